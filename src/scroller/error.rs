use thiserror::Error;

use super::speed::MAX_TRANSITION_SPEED;

/// Reasons an [`InfiniteScrollingBackground`](super::InfiniteScrollingBackground)
/// cannot be built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScrollerError {
    #[error("You must provide at least 2 images! (got {0})")]
    NotEnoughImages(usize),
    #[error("The transitionSpeed must be bigger than zero and at most {max}! (got {0})", max = MAX_TRANSITION_SPEED)]
    InvalidTransitionSpeed(f32),
    #[error("Image '{0}' has no usable size")]
    InvalidImageSize(String),
    #[error("The scene {0} is not available")]
    SceneUnavailable(String),
}
