// Swipe heuristic over touchstart/touchend, independent of the pointer state machine
use kurbo::Point;

use crate::config::ViewerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled right to left.
    Left,
    /// Finger travelled left to right.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SwipeStart {
    pos: Point,
    at_ms: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<SwipeStart>,
    multi_touch: bool,
}

impl SwipeTracker {
    /// Single-touch starts arm the tracker; any extra finger marks the
    /// gesture as multi-touch.
    pub fn begin(&mut self, touch_count: u32, first: Option<Point>, now_ms: f64) {
        match (touch_count, first) {
            (1, Some(pos)) => {
                self.start = Some(SwipeStart { pos, at_ms: now_ms });
                self.multi_touch = false;
            }
            (n, _) if n > 1 => self.multi_touch = true,
            _ => {}
        }
    }

    pub fn saw_multi_touch(&self) -> bool {
        self.multi_touch
    }

    /// Consumes the armed start and classifies the gesture.
    pub fn finish(
        &mut self,
        end: Option<Point>,
        now_ms: f64,
        config: &ViewerConfig,
    ) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let end = end?;
        let dx = end.x - start.pos.x;
        let dt = now_ms - start.at_ms;
        if dx.abs() > config.swipe_min_distance_px && dt < config.swipe_window_ms {
            Some(if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}
