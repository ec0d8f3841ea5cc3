// Display surface over the overlay's DOM nodes
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, HtmlImageElement, PointerEvent};
use yew::NodeRef;

use crate::gesture::GestureEngine;
use crate::model::GalleryItem;
use crate::state::ViewTransform;
use crate::surface::{DisplaySurface, Transition};
use crate::util::clog;

pub type DomViewer = GestureEngine<Rc<Vec<GalleryItem>>, DomSurface>;

/// Slack added to an eased transition before it is cleared.
const TRANSITION_CLEAR_SLACK_MS: u32 = 20;

/// Nodes rendered by `ViewerOverlay` and driven by `DomSurface`.
#[derive(Clone, Default, PartialEq)]
pub struct ViewerRefs {
    pub overlay: NodeRef,
    pub stage: NodeRef,
    pub image: NodeRef,
    pub caption_title: NodeRef,
    pub caption_desc: NodeRef,
}

/// Window-level pointer listeners, so drags keep tracking outside the overlay.
pub struct WindowListeners {
    pointer_move: Closure<dyn FnMut(PointerEvent)>,
    pointer_up: Closure<dyn FnMut(PointerEvent)>,
    pointer_cancel: Closure<dyn FnMut(PointerEvent)>,
}

fn client_point(e: &PointerEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

impl WindowListeners {
    pub fn for_viewer(viewer: Weak<RefCell<DomViewer>>) -> Self {
        let pointer_move = {
            let viewer = viewer.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let Some(viewer) = viewer.upgrade() else { return };
                if let Ok(mut v) = viewer.try_borrow_mut() {
                    v.pointer_move(e.pointer_id(), client_point(&e));
                };
            }) as Box<dyn FnMut(_)>)
        };
        let pointer_up = {
            let viewer = viewer.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let Some(viewer) = viewer.upgrade() else { return };
                if let Ok(mut v) = viewer.try_borrow_mut() {
                    v.pointer_up(e.pointer_id());
                };
            }) as Box<dyn FnMut(_)>)
        };
        let pointer_cancel = Closure::wrap(Box::new(move |e: PointerEvent| {
            let Some(viewer) = viewer.upgrade() else { return };
            if let Ok(mut v) = viewer.try_borrow_mut() {
                v.pointer_cancel(e.pointer_id());
            };
        }) as Box<dyn FnMut(_)>);
        Self {
            pointer_move,
            pointer_up,
            pointer_cancel,
        }
    }

    fn entries(&self) -> [(&'static str, &Closure<dyn FnMut(PointerEvent)>); 3] {
        [
            ("pointermove", &self.pointer_move),
            ("pointerup", &self.pointer_up),
            ("pointercancel", &self.pointer_cancel),
        ]
    }
}

/// Handle of the timeout that will drop the current eased transition.
#[derive(Debug, Default, PartialEq)]
struct PendingClear(Option<i32>);

impl PendingClear {
    /// Stores `handle` and returns the one it supersedes, which must be cancelled.
    fn replace(&mut self, handle: Option<i32>) -> Option<i32> {
        std::mem::replace(&mut self.0, handle)
    }
}

pub struct DomSurface {
    refs: ViewerRefs,
    listeners: Option<WindowListeners>,
    listening: bool,
    pending_clear: PendingClear,
}

fn cancel_timeout(handle: Option<i32>) {
    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
        window.clear_timeout_with_handle(handle);
    }
}

impl DomSurface {
    pub fn new(refs: ViewerRefs) -> Self {
        Self {
            refs,
            listeners: None,
            listening: false,
            pending_clear: PendingClear::default(),
        }
    }

    /// Listeners need a handle to the engine, so they arrive after it exists.
    pub fn install_listeners(&mut self, listeners: WindowListeners) {
        let was_listening = self.listening;
        if was_listening {
            self.detach_gesture_listeners();
        }
        self.listeners = Some(listeners);
        if was_listening {
            self.attach_gesture_listeners();
        }
    }

    fn overlay(&self) -> Option<HtmlElement> {
        self.refs.overlay.cast::<HtmlElement>()
    }

    fn image(&self) -> Option<HtmlElement> {
        self.refs.image.cast::<HtmlElement>()
    }

    fn cancel_transition_clear(&mut self) {
        cancel_timeout(self.pending_clear.replace(None));
    }

    /// Only the latest eased reset may clear the transition.
    fn clear_transition_later(&mut self, img: HtmlElement, delay_ms: u32) {
        let Some(window) = web_sys::window() else { return };
        let cb = Closure::once_into_js(move || {
            let _ = img.style().set_property("transition", "");
        });
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                delay_ms as i32,
            )
            .ok();
        cancel_timeout(self.pending_clear.replace(handle));
    }

    fn set_overlay_display(&self, visible: bool) {
        let Some(overlay) = self.overlay() else {
            clog("viewer: overlay element missing");
            return;
        };
        let style = overlay.style();
        let _ = style.set_property("display", if visible { "flex" } else { "none" });
        let classes = overlay.class_list();
        let (add, remove) = if visible {
            ("visible", "hidden")
        } else {
            ("hidden", "visible")
        };
        let _ = classes.remove_1(remove);
        let _ = classes.add_1(add);
    }
}

impl DisplaySurface for DomSurface {
    fn show_overlay(&mut self) {
        self.set_overlay_display(true);
    }

    fn hide_overlay(&mut self) {
        self.set_overlay_display(false);
    }

    fn set_image(&mut self, src: &str, alt: &str) {
        if let Some(img) = self.refs.image.cast::<HtmlImageElement>() {
            img.set_src(src);
            img.set_alt(alt);
        }
    }

    fn set_caption(&mut self, title: &str, description: &str) {
        if let Some(el) = self.refs.caption_title.cast::<Element>() {
            el.set_text_content(Some(title));
        }
        if let Some(el) = self.refs.caption_desc.cast::<Element>() {
            el.set_text_content(Some(description));
        }
    }

    fn apply_transform(&mut self, transform: ViewTransform, transition: Transition) {
        let Some(img) = self.image() else { return };
        let style = img.style();
        match transition {
            Transition::None => {
                self.cancel_transition_clear();
                let _ = style.set_property("transition", "");
            }
            Transition::Eased { duration_ms } => {
                let _ = style.set_property("transition", &format!("transform {duration_ms}ms ease"));
                self.clear_transition_later(img.clone(), duration_ms + TRANSITION_CLEAR_SLACK_MS);
            }
        }
        let _ = style.set_property("transform", &transform.to_css());
    }

    fn transform_origin(&self) -> Option<Point> {
        // offset* ignore CSS transforms, so this is the untransformed box
        let stage = self.refs.stage.cast::<Element>()?;
        let img = self.image()?;
        let rect = stage.get_bounding_client_rect();
        Some(Point::new(
            rect.left() + img.offset_left() as f64 + img.offset_width() as f64 / 2.0,
            rect.top() + img.offset_top() as f64 + img.offset_height() as f64 / 2.0,
        ))
    }

    fn attach_gesture_listeners(&mut self) {
        if let Some(overlay) = self.overlay() {
            let _ = overlay.style().set_property("touch-action", "none");
        }
        let (Some(window), Some(listeners)) = (web_sys::window(), self.listeners.as_ref()) else {
            return;
        };
        for (name, cb) in listeners.entries() {
            window
                .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                .ok();
        }
        self.listening = true;
    }

    fn detach_gesture_listeners(&mut self) {
        if let Some(overlay) = self.overlay() {
            let _ = overlay.style().set_property("touch-action", "");
        }
        let (Some(window), Some(listeners)) = (web_sys::window(), self.listeners.as_ref()) else {
            return;
        };
        for (name, cb) in listeners.entries() {
            let _ = window.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
        self.listening = false;
    }
}
