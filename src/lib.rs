//! Aberred Scroll library.
//!
//! Infinite scrolling backgrounds for bevy_ecs scenes rendered with raylib.
//! The [`scroller`] module holds the tiling and scheduling logic; the ECS
//! components, resources and systems it drives are exposed for reuse and
//! integration tests.

pub mod components;
pub mod resources;
pub mod scroller;
pub mod systems;

pub use scroller::{
    BackgroundImage, InfiniteScrollingBackground, ScrollDirection, ScrollerError, SceneGraph,
    TransitionSpeed,
};
