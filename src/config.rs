//! Viewer tuning knobs.
//!
//! Defaults reproduce the gallery's stock feel. A JSON object stored under
//! [`CONFIG_KEY`] may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::storage;

pub const CONFIG_KEY: &str = "viewer_config";
pub const GALLERY_KEY: &str = "gallery";

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 4.0;
pub const DOUBLE_TAP_SCALE: f64 = 2.0;
/// Scales at or below this count as unzoomed when a gesture ends.
pub const SNAP_THRESHOLD: f64 = 1.01;
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
pub const SWIPE_WINDOW_MS: f64 = 500.0;
pub const SWIPE_MIN_DISTANCE_PX: f64 = 60.0;
pub const RESET_TRANSITION_MS: u32 = 180;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub double_tap_scale: f64,
    pub snap_threshold: f64,
    pub double_tap_window_ms: f64,
    pub swipe_window_ms: f64,
    pub swipe_min_distance_px: f64,
    pub reset_transition_ms: u32,
    /// Ignore a swipe if a second finger touched down during the gesture.
    pub suppress_swipe_after_pinch: bool,
    /// Ignore a swipe while the image is still zoomed in.
    pub suppress_swipe_while_zoomed: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            double_tap_scale: DOUBLE_TAP_SCALE,
            snap_threshold: SNAP_THRESHOLD,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            swipe_window_ms: SWIPE_WINDOW_MS,
            swipe_min_distance_px: SWIPE_MIN_DISTANCE_PX,
            reset_transition_ms: RESET_TRANSITION_MS,
            suppress_swipe_after_pinch: true,
            suppress_swipe_while_zoomed: true,
        }
    }
}

impl ViewerConfig {
    /// Stored overrides on top of the defaults.
    pub fn load() -> Self {
        storage::load::<Self>(CONFIG_KEY)
            .unwrap_or_default()
            .normalized()
    }

    /// Repairs values that would break the gesture math: swapped or
    /// non-positive scale limits and negative windows.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            self.min_scale = defaults.min_scale;
        }
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            self.max_scale = defaults.max_scale;
        }
        if self.min_scale > self.max_scale {
            std::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        self.double_tap_scale = self.clamp_scale(self.double_tap_scale);
        if !self.snap_threshold.is_finite() {
            self.snap_threshold = defaults.snap_threshold;
        }
        self.double_tap_window_ms = self.double_tap_window_ms.max(0.0);
        self.swipe_window_ms = self.swipe_window_ms.max(0.0);
        self.swipe_min_distance_px = self.swipe_min_distance_px.max(0.0);
        self
    }

    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }

    pub fn is_unzoomed(&self, scale: f64) -> bool {
        scale <= self.snap_threshold
    }
}
