pub mod pointer;
pub mod swipe;
pub mod viewer;

pub use pointer::{PointerRecord, PointerSet};
pub use swipe::{SwipeDirection, SwipeTracker};
pub use viewer::{PinchReference, ViewTransform, ViewerState};
