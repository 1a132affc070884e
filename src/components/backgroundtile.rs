use bevy_ecs::prelude::Component;

/// Marks a node created by an
/// [`InfiniteScrollingBackground`](crate::scroller::InfiniteScrollingBackground).
///
/// `index` is the position of the node's image in the scroller's image list.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundTile {
    pub index: usize,
}
