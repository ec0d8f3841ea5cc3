// Viewer state owned by the gesture engine
use kurbo::{Point, Vec2};

use super::pointer::PointerSet;

/// Uniform scale plus translation, applied about the image's untransformed
/// center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        pan: Vec2::ZERO,
    };

    /// Rescales while keeping the point at `anchor` (relative to the
    /// transform origin) where it is on screen.
    pub fn zoomed_about(self, anchor: Vec2, new_scale: f64) -> Self {
        let ratio = new_scale / self.scale;
        Self {
            scale: new_scale,
            pan: (self.pan - anchor) * ratio + anchor,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.pan.x, self.pan.y, self.scale
        )
    }

    /// Client-space mapping for a transform whose origin sits at `origin`.
    #[cfg(test)]
    pub fn to_affine(&self, origin: Point) -> kurbo::Affine {
        use kurbo::Affine;
        Affine::translate(origin.to_vec2() + self.pan)
            * Affine::scale(self.scale)
            * Affine::translate(-origin.to_vec2())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchReference {
    pub distance: f64,
    pub midpoint: Point,
}

impl PinchReference {
    pub fn between(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    pub current_index: usize,
    /// Id of the item on screen, used to notice collection edits.
    pub current_id: Option<u64>,
    pub transform: ViewTransform,
    /// Pan at the end of the last drag; live drags add to it.
    pub committed_pan: Vec2,
    pub pointers: PointerSet,
    pub pinch: Option<PinchReference>,
    pub last_tap_ms: Option<f64>,
    /// When a double tap last toggled zoom.
    pub last_toggle_ms: Option<f64>,
    pub panning: bool,
    pub overlay_visible: bool,
    pub listeners_attached: bool,
}
