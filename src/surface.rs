//! The display capability the gesture engine drives.
//!
//! The engine only ever talks to a [`DisplaySurface`]; the browser build uses
//! [`crate::dom_surface::DomSurface`], tests use a recording fake.

use kurbo::Point;

use crate::state::ViewTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Live 1:1 tracking.
    None,
    /// Animated snap; the surface drops the transition once it has run.
    Eased { duration_ms: u32 },
}

pub trait DisplaySurface {
    fn show_overlay(&mut self);
    fn hide_overlay(&mut self);
    fn set_image(&mut self, src: &str, alt: &str);
    fn set_caption(&mut self, title: &str, description: &str);
    fn apply_transform(&mut self, transform: ViewTransform, transition: Transition);

    /// Client coordinates of the image's untransformed center, or `None`
    /// when the image is not mounted.
    fn transform_origin(&self) -> Option<Point>;

    fn attach_gesture_listeners(&mut self) {}
    fn detach_gesture_listeners(&mut self) {}
}
