//! The viewer's gesture engine.
//!
//! [`GestureEngine`] owns the one [`ViewerState`] and turns pointer, touch and
//! double-click input into pan, pinch-zoom, toggle-zoom and swipe navigation.
//! It reads items through a [`GalleryProvider`] and renders only through a
//! [`DisplaySurface`], so it runs headless in tests.
//!
//! Every operation is best effort: out-of-range indices, empty collections
//! and missing surface elements turn into no-ops.

use kurbo::{Point, Vec2};

use crate::config::ViewerConfig;
use crate::model::GalleryProvider;
use crate::state::{
    PinchReference, PointerRecord, SwipeDirection, SwipeTracker, ViewTransform, ViewerState,
};
use crate::surface::{DisplaySurface, Transition};
use crate::util::clog;

pub struct GestureEngine<G, S> {
    gallery: G,
    surface: S,
    config: ViewerConfig,
    state: ViewerState,
    swipe: SwipeTracker,
}

impl<G: GalleryProvider, S: DisplaySurface> GestureEngine<G, S> {
    pub fn new(gallery: G, surface: S, config: ViewerConfig) -> Self {
        Self {
            gallery,
            surface,
            config: config.normalized(),
            state: ViewerState::default(),
            swipe: SwipeTracker::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_open(&self) -> bool {
        self.state.overlay_visible
    }

    // --- navigation ---

    pub fn open_at(&mut self, index: usize) {
        let Some(item) = self.gallery.item_at(index) else {
            clog(&format!("viewer: open_at({index}) out of range"));
            return;
        };
        self.state.current_index = index;
        self.state.current_id = Some(item.id);
        self.surface.set_image(item.image_src(), item.alt_text());
        self.surface.set_caption(&item.title, &item.description);

        self.forget_input();
        self.reset_transform();
        self.state.overlay_visible = true;
        self.surface.show_overlay();
        self.attach_listeners();
    }

    pub fn close(&mut self) {
        if !self.state.overlay_visible {
            return;
        }
        self.reset_transform();
        self.state.overlay_visible = false;
        self.surface.hide_overlay();
        self.detach_listeners();
        self.forget_input();
    }

    pub fn next(&mut self) {
        if self.gallery.is_empty() {
            return;
        }
        let len = self.gallery.len();
        self.open_at((self.state.current_index % len + 1) % len);
    }

    pub fn prev(&mut self) {
        if self.gallery.is_empty() {
            return;
        }
        let len = self.gallery.len();
        self.open_at((self.state.current_index % len + len - 1) % len);
    }

    /// Swaps in an edited collection. While open: an empty collection closes
    /// the viewer, a shorter one clamps the index, a different item at the
    /// same index is re-opened and the same item is only re-rendered.
    pub fn replace_gallery(&mut self, gallery: G) {
        self.gallery = gallery;
        if !self.state.overlay_visible {
            return;
        }
        let len = self.gallery.len();
        if len == 0 {
            clog("viewer: collection emptied, closing");
            self.close();
            return;
        }
        let index = self.state.current_index.min(len - 1);
        let same_item = index == self.state.current_index
            && self.gallery.item_at(index).map(|i| i.id) == self.state.current_id;
        if same_item {
            if let Some(item) = self.gallery.item_at(index) {
                self.surface.set_image(item.image_src(), item.alt_text());
                self.surface.set_caption(&item.title, &item.description);
            }
        } else {
            self.open_at(index);
        }
    }

    // --- pointer input ---

    pub fn pointer_down(&mut self, id: i32, pos: Point, now_ms: f64) {
        if !self.state.listeners_attached {
            return;
        }
        self.state.pointers.insert(PointerRecord::new(id, pos));
        match self.state.pointers.len() {
            1 => {
                let window = self.config.double_tap_window_ms;
                let double_tap = self
                    .state
                    .last_tap_ms
                    .is_some_and(|t| now_ms - t < window);
                if double_tap {
                    self.state.last_tap_ms = None;
                    self.state.last_toggle_ms = Some(now_ms);
                    self.state.panning = false;
                    self.toggle_zoom();
                } else {
                    self.state.last_tap_ms = Some(now_ms);
                    self.state.panning = true;
                }
            }
            2 => self.capture_pinch(),
            _ => self.state.pinch = None,
        }
    }

    pub fn pointer_move(&mut self, id: i32, pos: Point) {
        if !self.state.listeners_attached {
            return;
        }
        if !self.state.pointers.update_position(id, pos) {
            return;
        }
        match self.state.pointers.len() {
            1 if self.state.panning => {
                let Some(offset) = self.state.pointers.first().map(PointerRecord::drag_offset)
                else {
                    return;
                };
                self.state.transform.pan = self.state.committed_pan + offset;
                self.apply(Transition::None);
            }
            2 => self.continue_pinch(),
            _ => {}
        }
    }

    pub fn pointer_up(&mut self, id: i32) {
        if !self.state.listeners_attached {
            return;
        }
        if self.state.pointers.remove(id).is_none() {
            return;
        }
        match self.state.pointers.len() {
            0 => {
                self.state.committed_pan = self.state.transform.pan;
                self.state.panning = false;
                self.state.pinch = None;
                if self.config.is_unzoomed(self.state.transform.scale) {
                    self.reset_transform();
                }
            }
            1 => {
                // resume panning from where the finger is now
                self.state.pinch = None;
                self.state.committed_pan = self.state.transform.pan;
                self.state.pointers.restamp_all();
                self.state.panning = true;
            }
            2 => self.capture_pinch(),
            _ => {}
        }
    }

    pub fn pointer_cancel(&mut self, id: i32) {
        self.pointer_up(id);
    }

    // --- touch swipe ---

    pub fn touch_start(&mut self, touch_count: u32, first: Option<Point>, now_ms: f64) {
        if !self.state.listeners_attached {
            return;
        }
        self.swipe.begin(touch_count, first, now_ms);
    }

    pub fn touch_end(&mut self, changed: Option<Point>, now_ms: f64) {
        if !self.state.listeners_attached {
            return;
        }
        let multi_touch = self.swipe.saw_multi_touch();
        let Some(direction) = self.swipe.finish(changed, now_ms, &self.config) else {
            return;
        };
        if multi_touch && self.config.suppress_swipe_after_pinch {
            clog("viewer: swipe ignored after pinch");
            return;
        }
        if self.config.suppress_swipe_while_zoomed
            && !self.config.is_unzoomed(self.state.transform.scale)
        {
            clog("viewer: swipe ignored while zoomed");
            return;
        }
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.prev(),
        }
    }

    // --- double click ---

    /// A mouse double-click also arrives as two pointer taps; if those
    /// already toggled zoom, the trailing `dblclick` is swallowed.
    pub fn double_click(&mut self, now_ms: f64) {
        if !self.state.listeners_attached {
            return;
        }
        let window = self.config.double_tap_window_ms;
        if let Some(t) = self.state.last_toggle_ms.take() {
            if now_ms - t < window {
                return;
            }
        }
        self.toggle_zoom();
    }

    // --- internals ---

    fn toggle_zoom(&mut self) {
        if self.state.transform.scale > self.config.min_scale {
            self.reset_transform();
        } else {
            self.state.transform.scale = self.config.double_tap_scale;
            self.apply(Transition::None);
        }
    }

    /// Drops pointers, tap timing and any armed swipe.
    fn forget_input(&mut self) {
        self.state.pointers.clear();
        self.state.panning = false;
        self.state.pinch = None;
        self.state.last_tap_ms = None;
        self.state.last_toggle_ms = None;
        self.swipe.cancel();
    }

    fn capture_pinch(&mut self) {
        self.state.pinch = self
            .state
            .pointers
            .pair()
            .map(|(a, b)| PinchReference::between(a.last, b.last));
    }

    fn continue_pinch(&mut self) {
        let Some((a, b)) = self.state.pointers.pair() else {
            return;
        };
        let current = PinchReference::between(a.last, b.last);
        if let Some(reference) = self.state.pinch.filter(|r| r.distance > 0.0) {
            if let Some(origin) = self.surface.transform_origin() {
                let factor = current.distance / reference.distance;
                let new_scale = self.config.clamp_scale(self.state.transform.scale * factor);
                let anchor: Vec2 = current.midpoint - origin;
                self.state.transform = self.state.transform.zoomed_about(anchor, new_scale);
                self.apply(Transition::None);
            }
        }
        self.state.pinch = Some(current);
    }

    fn reset_transform(&mut self) {
        self.state.transform = ViewTransform::IDENTITY;
        self.state.committed_pan = Vec2::ZERO;
        self.state.pinch = None;
        self.apply(Transition::Eased {
            duration_ms: self.config.reset_transition_ms,
        });
    }

    fn apply(&mut self, transition: Transition) {
        self.surface.apply_transform(self.state.transform, transition);
    }

    fn attach_listeners(&mut self) {
        if self.state.listeners_attached {
            return;
        }
        self.state.listeners_attached = true;
        self.surface.attach_gesture_listeners();
    }

    fn detach_listeners(&mut self) {
        if !self.state.listeners_attached {
            return;
        }
        self.state.listeners_attached = false;
        self.surface.detach_gesture_listeners();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GalleryItem;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Show,
        Hide,
        Image(String),
        Caption(String),
        Transform(ViewTransform, Transition),
        Attach,
        Detach,
    }

    #[derive(Default)]
    struct FakeSurface {
        calls: Vec<Call>,
        origin: Option<Point>,
    }

    impl FakeSurface {
        fn with_origin(origin: Point) -> Self {
            Self {
                calls: Vec::new(),
                origin: Some(origin),
            }
        }

        fn count(&self, wanted: &Call) -> usize {
            self.calls.iter().filter(|c| *c == wanted).count()
        }

        fn last_transform(&self) -> Option<(ViewTransform, Transition)> {
            self.calls.iter().rev().find_map(|c| match c {
                Call::Transform(t, tr) => Some((*t, *tr)),
                _ => None,
            })
        }
    }

    impl DisplaySurface for FakeSurface {
        fn show_overlay(&mut self) {
            self.calls.push(Call::Show);
        }
        fn hide_overlay(&mut self) {
            self.calls.push(Call::Hide);
        }
        fn set_image(&mut self, src: &str, _alt: &str) {
            self.calls.push(Call::Image(src.to_string()));
        }
        fn set_caption(&mut self, title: &str, _description: &str) {
            self.calls.push(Call::Caption(title.to_string()));
        }
        fn apply_transform(&mut self, transform: ViewTransform, transition: Transition) {
            self.calls.push(Call::Transform(transform, transition));
        }
        fn transform_origin(&self) -> Option<Point> {
            self.origin
        }
        fn attach_gesture_listeners(&mut self) {
            self.calls.push(Call::Attach);
        }
        fn detach_gesture_listeners(&mut self) {
            self.calls.push(Call::Detach);
        }
    }

    type TestEngine = GestureEngine<Rc<Vec<GalleryItem>>, FakeSurface>;

    fn items(n: usize) -> Rc<Vec<GalleryItem>> {
        Rc::new(
            (0..n)
                .map(|i| GalleryItem {
                    id: i as u64 + 1,
                    image_data: format!("img-{i}"),
                    title: format!("Art {i}"),
                    description: String::new(),
                })
                .collect(),
        )
    }

    fn engine(n: usize) -> TestEngine {
        GestureEngine::new(
            items(n),
            FakeSurface::with_origin(Point::new(200.0, 150.0)),
            ViewerConfig::default(),
        )
    }

    fn opened(n: usize, index: usize) -> TestEngine {
        let mut e = engine(n);
        e.open_at(index);
        e
    }

    /// Holds pointer 1 at `left` and moves pointer 2 so the spread goes from
    /// `from` to `to` in one event. Returns the final midpoint.
    fn pinch(e: &mut TestEngine, left: Point, from: f64, to: f64) -> Point {
        e.pointer_down(1, left, 0.0);
        e.pointer_down(2, Point::new(left.x + from, left.y), 10.0);
        let right = Point::new(left.x + to, left.y);
        e.pointer_move(2, right);
        left.midpoint(right)
    }

    fn release_all(e: &mut TestEngine) {
        e.pointer_up(1);
        e.pointer_up(2);
    }

    #[test]
    fn open_renders_and_attaches_once() {
        let mut e = opened(3, 1);
        assert!(e.is_open());
        assert_eq!(e.state().current_index, 1);
        assert_eq!(e.state().current_id, Some(2));
        assert!(e.surface().calls.contains(&Call::Image("img-1".into())));
        assert!(e.surface().calls.contains(&Call::Caption("Art 1".into())));
        e.open_at(2);
        assert_eq!(e.surface().count(&Call::Attach), 1);
        assert_eq!(
            e.surface().last_transform(),
            Some((
                ViewTransform::IDENTITY,
                Transition::Eased { duration_ms: 180 }
            ))
        );
    }

    #[test]
    fn out_of_range_open_is_noop() {
        let mut e = engine(3);
        e.open_at(3);
        e.open_at(usize::MAX);
        assert!(!e.is_open());
        assert!(e.surface().calls.is_empty());
        assert_eq!(e.state(), &ViewerState::default());

        let mut empty = engine(0);
        empty.open_at(0);
        empty.next();
        empty.prev();
        assert!(!empty.is_open());
    }

    #[test]
    fn reopen_after_close_is_identity() {
        let mut e = opened(3, 1);
        e.double_click(0.0);
        assert_eq!(e.state().transform.scale, 2.0);
        e.close();
        assert!(!e.is_open());
        assert_eq!(e.surface().count(&Call::Detach), 1);
        e.open_at(1);
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
        assert_eq!(e.state().committed_pan, Vec2::ZERO);
    }

    #[test]
    fn out_of_range_open_keeps_open_state() {
        let mut e = opened(3, 1);
        e.double_click(0.0);
        e.pointer_down(1, Point::new(100.0, 100.0), 0.0);
        e.pointer_move(1, Point::new(120.0, 90.0));
        let before = e.state().clone();
        let calls = e.surface().calls.len();
        e.open_at(3);
        e.open_at(usize::MAX);
        assert_eq!(e.state(), &before);
        assert_eq!(e.state().current_index, 1);
        assert_eq!(e.state().transform.pan, Vec2::new(20.0, -10.0));
        assert_eq!(e.surface().calls.len(), calls);
    }

    #[test]
    fn navigating_mid_drag_starts_clean() {
        let mut e = opened(3, 0);
        e.double_click(0.0);
        e.pointer_down(1, Point::new(100.0, 100.0), 5000.0);
        e.pointer_move(1, Point::new(150.0, 100.0));
        e.next();
        assert_eq!(e.state().current_index, 1);
        assert!(e.state().pointers.is_empty());
        assert!(!e.state().panning);
        assert_eq!(e.state().last_tap_ms, None);
        // the stale finger no longer drags the new image
        e.pointer_move(1, Point::new(151.0, 100.0));
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
        e.pointer_up(1);
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
    }

    #[test]
    fn tap_right_after_swipe_does_not_zoom() {
        let mut e = opened(5, 2);
        e.touch_start(1, Some(Point::new(300.0, 200.0)), 1000.0);
        e.pointer_down(1, Point::new(300.0, 200.0), 1000.0);
        e.pointer_move(1, Point::new(200.0, 200.0));
        e.pointer_up(1);
        e.touch_end(Some(Point::new(200.0, 200.0)), 1150.0);
        assert_eq!(e.state().current_index, 3);
        e.pointer_down(1, Point::new(200.0, 200.0), 1250.0);
        assert_eq!(e.state().transform.scale, 1.0);
    }

    #[test]
    fn close_when_hidden_does_nothing() {
        let mut e = engine(2);
        e.close();
        assert!(e.surface().calls.is_empty());
    }

    #[test]
    fn next_wraps_around() {
        for n in 1..6 {
            for start in 0..n {
                let mut e = opened(n, start);
                for _ in 0..n {
                    e.next();
                }
                assert_eq!(e.state().current_index, start);
            }
        }
    }

    #[test]
    fn prev_inverts_next() {
        for i in 0..4 {
            let mut e = opened(4, i);
            e.next();
            e.prev();
            assert_eq!(e.state().current_index, i);
        }
        let mut e = opened(4, 0);
        e.prev();
        assert_eq!(e.state().current_index, 3);
    }

    #[test]
    fn navigation_clears_zoom() {
        let mut e = opened(3, 0);
        e.double_click(0.0);
        e.next();
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
    }

    #[test]
    fn double_click_toggles() {
        let mut e = opened(2, 0);
        e.double_click(0.0);
        assert_eq!(e.state().transform.scale, 2.0);
        e.double_click(0.0);
        assert_eq!(e.state().transform.scale, 1.0);
    }

    #[test]
    fn double_tap_toggles_and_consumes_the_tap() {
        let mut e = opened(2, 0);
        e.pointer_down(1, Point::new(50.0, 50.0), 1000.0);
        e.pointer_up(1);
        e.pointer_down(1, Point::new(50.0, 50.0), 1200.0);
        assert_eq!(e.state().transform.scale, 2.0);
        assert!(!e.state().panning);
        e.pointer_move(1, Point::new(90.0, 90.0));
        assert_eq!(e.state().transform.pan, Vec2::ZERO);
        e.pointer_up(1);
        // a third tap starts a fresh window
        e.pointer_down(1, Point::new(50.0, 50.0), 1300.0);
        assert_eq!(e.state().transform.scale, 2.0);
        e.pointer_up(1);
        e.pointer_down(1, Point::new(50.0, 50.0), 1450.0);
        assert_eq!(e.state().transform.scale, 1.0);
    }

    #[test]
    fn mouse_double_click_zooms_once() {
        let mut e = opened(3, 0);
        // a mouse double-click: two pointer taps, then dblclick
        e.pointer_down(1, Point::new(50.0, 50.0), 1000.0);
        e.pointer_up(1);
        e.pointer_down(1, Point::new(50.0, 50.0), 1150.0);
        e.pointer_up(1);
        e.double_click(1160.0);
        assert_eq!(e.state().transform.scale, 2.0);

        e.pointer_down(1, Point::new(50.0, 50.0), 3000.0);
        e.pointer_up(1);
        e.pointer_down(1, Point::new(50.0, 50.0), 3150.0);
        e.pointer_up(1);
        e.double_click(3160.0);
        assert_eq!(e.state().transform.scale, 1.0);
    }

    #[test]
    fn double_click_long_after_tap_toggle_still_works() {
        let mut e = opened(3, 0);
        e.pointer_down(1, Point::ZERO, 1000.0);
        e.pointer_up(1);
        e.pointer_down(1, Point::ZERO, 1100.0);
        e.pointer_up(1);
        assert_eq!(e.state().transform.scale, 2.0);
        e.double_click(5000.0);
        assert_eq!(e.state().transform.scale, 1.0);
    }

    #[test]
    fn slow_taps_do_not_zoom() {
        let mut e = opened(2, 0);
        e.pointer_down(1, Point::ZERO, 0.0);
        e.pointer_up(1);
        e.pointer_down(1, Point::ZERO, 300.0);
        assert_eq!(e.state().transform.scale, 1.0);
    }

    #[test]
    fn drag_pans_live_and_commits() {
        let mut e = opened(2, 0);
        e.double_click(0.0);
        e.pointer_down(1, Point::new(100.0, 100.0), 0.0);
        e.pointer_move(1, Point::new(130.0, 80.0));
        assert_eq!(e.state().transform.pan, Vec2::new(30.0, -20.0));
        assert_eq!(
            e.surface().last_transform().map(|(_, t)| t),
            Some(Transition::None)
        );
        e.pointer_up(1);
        assert_eq!(e.state().committed_pan, Vec2::new(30.0, -20.0));

        e.pointer_down(1, Point::new(0.0, 0.0), 5000.0);
        e.pointer_move(1, Point::new(10.0, 10.0));
        assert_eq!(e.state().transform.pan, Vec2::new(40.0, -10.0));
    }

    #[test]
    fn unzoomed_drag_snaps_back_on_release() {
        let mut e = opened(2, 0);
        e.pointer_down(1, Point::new(100.0, 100.0), 0.0);
        e.pointer_move(1, Point::new(140.0, 100.0));
        assert_eq!(e.state().transform.pan, Vec2::new(40.0, 0.0));
        e.pointer_up(1);
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
        assert_eq!(e.state().committed_pan, Vec2::ZERO);
        assert_eq!(
            e.surface().last_transform().map(|(_, t)| t),
            Some(Transition::Eased { duration_ms: 180 })
        );
    }

    #[test]
    fn pinch_doubles_scale_around_midpoint() {
        let mut e = opened(2, 0);
        let origin = Point::new(200.0, 150.0);
        let left = Point::new(210.0, 120.0);
        let mid = left.midpoint(Point::new(left.x + 200.0, left.y));
        let local = e.state().transform.to_affine(origin).inverse() * mid;
        assert_eq!(pinch(&mut e, left, 100.0, 200.0), mid);
        let t = e.state().transform;
        assert!((t.scale - 2.0).abs() < 1e-9);
        let moved = t.to_affine(origin) * local;
        assert!((moved - mid).hypot() < 1e-6);
    }

    #[test]
    fn pinch_is_clamped_at_every_step() {
        let mut e = opened(2, 0);
        let mid = Point::new(210.0, 160.0);
        e.pointer_down(1, Point::new(200.0, 160.0), 0.0);
        e.pointer_down(2, Point::new(220.0, 160.0), 10.0);
        let mut half = 10.0;
        for step in 0..40 {
            half = if step % 7 < 4 { half * 1.6 } else { half / 2.3 };
            e.pointer_move(2, Point::new(mid.x + half, mid.y));
            let s = e.state().transform.scale;
            assert!((1.0..=4.0).contains(&s), "scale {s} out of range");
        }
        release_all(&mut e);
    }

    #[test]
    fn pinch_past_max_clamps_to_four() {
        let mut e = opened(2, 0);
        e.double_click(0.0);
        pinch(&mut e, Point::new(150.0, 150.0), 100.0, 300.0);
        assert_eq!(e.state().transform.scale, 4.0);
    }

    #[test]
    fn pinch_state_only_with_two_pointers() {
        let mut e = opened(2, 0);
        e.pointer_down(1, Point::new(0.0, 0.0), 0.0);
        assert!(e.state().pinch.is_none());
        e.pointer_down(2, Point::new(100.0, 0.0), 1.0);
        assert_eq!(e.state().pinch.map(|p| p.distance), Some(100.0));
        e.pointer_down(3, Point::new(50.0, 50.0), 2.0);
        assert!(e.state().pinch.is_none());
        e.pointer_up(3);
        assert!(e.state().pinch.is_some());
        e.pointer_up(2);
        assert!(e.state().pinch.is_none());
    }

    #[test]
    fn two_to_one_transition_does_not_jump() {
        let mut e = opened(2, 0);
        pinch(&mut e, Point::new(150.0, 150.0), 100.0, 200.0);
        let after_pinch = e.state().transform;
        e.pointer_up(2);
        assert!(e.state().panning);
        // pointer 1 is at its last position; no movement means no change
        e.pointer_move(1, Point::new(150.0, 150.0));
        assert_eq!(e.state().transform, after_pinch);
        e.pointer_move(1, Point::new(160.0, 155.0));
        assert_eq!(e.state().transform.pan, after_pinch.pan + Vec2::new(10.0, 5.0));
    }

    #[test]
    fn pinch_without_origin_only_rebases() {
        let mut e = GestureEngine::new(items(2), FakeSurface::default(), ViewerConfig::default());
        e.open_at(0);
        pinch(&mut e, Point::ZERO, 100.0, 200.0);
        assert_eq!(e.state().transform.scale, 1.0);
        assert_eq!(e.state().pinch.map(|p| p.distance), Some(200.0));
    }

    #[test]
    fn cancel_behaves_like_up() {
        let mut e = opened(2, 0);
        e.pointer_down(7, Point::ZERO, 0.0);
        e.pointer_cancel(7);
        assert!(e.state().pointers.is_empty());
        assert!(!e.state().panning);
    }

    #[test]
    fn input_ignored_while_closed() {
        let mut e = engine(3);
        e.pointer_down(1, Point::ZERO, 0.0);
        e.double_click(0.0);
        e.touch_start(1, Some(Point::new(300.0, 200.0)), 0.0);
        e.touch_end(Some(Point::new(200.0, 200.0)), 100.0);
        assert!(e.state().pointers.is_empty());
        assert!(!e.is_open());
        assert!(e.surface().calls.is_empty());
    }

    #[test]
    fn swipe_left_goes_next() {
        let mut e = opened(5, 2);
        e.touch_start(1, Some(Point::new(300.0, 200.0)), 1000.0);
        e.touch_end(Some(Point::new(200.0, 200.0)), 1150.0);
        assert_eq!(e.state().current_index, 3);
    }

    #[test]
    fn swipe_right_goes_prev_with_wrap() {
        let mut e = opened(5, 0);
        e.touch_start(1, Some(Point::new(200.0, 200.0)), 1000.0);
        e.touch_end(Some(Point::new(300.0, 200.0)), 1400.0);
        assert_eq!(e.state().current_index, 4);
    }

    #[test]
    fn swipe_with_drag_at_rest_scale() {
        let mut e = opened(5, 2);
        e.touch_start(1, Some(Point::new(300.0, 200.0)), 1000.0);
        e.pointer_down(1, Point::new(300.0, 200.0), 1000.0);
        e.pointer_move(1, Point::new(200.0, 200.0));
        e.pointer_up(1);
        e.touch_end(Some(Point::new(200.0, 200.0)), 1150.0);
        assert_eq!(e.state().current_index, 3);
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
    }

    #[test]
    fn swipe_suppressed_while_zoomed() {
        let mut e = opened(5, 2);
        e.double_click(0.0);
        e.touch_start(1, Some(Point::new(300.0, 200.0)), 1000.0);
        e.touch_end(Some(Point::new(200.0, 200.0)), 1150.0);
        assert_eq!(e.state().current_index, 2);

        let mut permissive = GestureEngine::new(
            items(5),
            FakeSurface::default(),
            ViewerConfig {
                suppress_swipe_while_zoomed: false,
                ..Default::default()
            },
        );
        permissive.open_at(2);
        permissive.double_click(0.0);
        permissive.touch_start(1, Some(Point::new(300.0, 200.0)), 1000.0);
        permissive.touch_end(Some(Point::new(200.0, 200.0)), 1150.0);
        assert_eq!(permissive.state().current_index, 3);
    }

    #[test]
    fn swipe_suppressed_after_second_finger() {
        let mut e = opened(5, 2);
        e.touch_start(1, Some(Point::new(300.0, 200.0)), 1000.0);
        e.touch_start(2, Some(Point::new(300.0, 200.0)), 1010.0);
        e.touch_end(Some(Point::new(200.0, 200.0)), 1150.0);
        assert_eq!(e.state().current_index, 2);
    }

    #[test]
    fn shrinking_collection_clamps_index() {
        let mut e = opened(5, 4);
        e.double_click(0.0);
        e.replace_gallery(items(3));
        assert!(e.is_open());
        assert_eq!(e.state().current_index, 2);
        assert_eq!(e.state().current_id, Some(3));
        assert_eq!(e.state().transform, ViewTransform::IDENTITY);
    }

    #[test]
    fn emptied_collection_closes() {
        let mut e = opened(3, 1);
        e.replace_gallery(items(0));
        assert!(!e.is_open());
        assert_eq!(e.surface().count(&Call::Detach), 1);
    }

    #[test]
    fn edit_of_current_item_keeps_zoom() {
        let mut e = opened(3, 1);
        e.double_click(0.0);
        let mut edited = (*items(3)).clone();
        edited[1].title = "Renamed".into();
        e.replace_gallery(Rc::new(edited));
        assert_eq!(e.state().transform.scale, 2.0);
        assert!(e.surface().calls.contains(&Call::Caption("Renamed".into())));
    }

    #[test]
    fn removal_before_current_reopens() {
        let mut e = opened(3, 1);
        e.double_click(0.0);
        let mut shorter = (*items(3)).clone();
        shorter.remove(0);
        e.replace_gallery(Rc::new(shorter));
        assert_eq!(e.state().current_index, 1);
        assert_eq!(e.state().current_id, Some(3));
        assert_eq!(e.state().transform.scale, 1.0);
    }
}
