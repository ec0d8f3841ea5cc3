use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use web_sys::{MouseEvent, PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::dom_surface::{DomViewer, ViewerRefs};
use crate::util::now_ms;

/// Shared engine handle; props compare by identity.
#[derive(Clone)]
pub struct ViewerHandle(pub Rc<RefCell<DomViewer>>);

impl PartialEq for ViewerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ViewerHandle {
    /// Runs `f` unless the engine is already busy with another event.
    pub fn with(&self, f: impl FnOnce(&mut DomViewer)) {
        if let Ok(mut v) = self.0.try_borrow_mut() {
            f(&mut v);
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerOverlayProps {
    pub refs: ViewerRefs,
    pub viewer: ViewerHandle,
}

#[function_component(ViewerOverlay)]
pub fn viewer_overlay(props: &ViewerOverlayProps) -> Html {
    let on_pointer_down = {
        let viewer = props.viewer.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            let pos = Point::new(e.client_x() as f64, e.client_y() as f64);
            viewer.with(|v| v.pointer_down(e.pointer_id(), pos, now_ms()));
        })
    };
    let on_touch_start = {
        let viewer = props.viewer.clone();
        Callback::from(move |e: TouchEvent| {
            let touches = e.touches();
            let first = touches
                .item(0)
                .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64));
            viewer.with(|v| v.touch_start(touches.length(), first, now_ms()));
        })
    };
    let on_touch_end = {
        let viewer = props.viewer.clone();
        Callback::from(move |e: TouchEvent| {
            let changed = e
                .changed_touches()
                .item(0)
                .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64));
            viewer.with(|v| v.touch_end(changed, now_ms()));
        })
    };
    let on_dblclick = {
        let viewer = props.viewer.clone();
        Callback::from(move |_: MouseEvent| viewer.with(|v| v.double_click(now_ms())))
    };
    let nav = |f: fn(&mut DomViewer)| {
        let viewer = props.viewer.clone();
        Callback::from(move |_: MouseEvent| viewer.with(f))
    };
    // buttons sit on the overlay but must not start a gesture
    let swallow = Callback::from(|e: PointerEvent| e.stop_propagation());

    let refs = &props.refs;
    html! {
        <div ref={refs.overlay.clone()} class="viewer-overlay hidden"
            style="display:none; position:fixed; inset:0; background:rgba(0,0,0,0.92); flex-direction:column; align-items:center; justify-content:center; z-index:9000; overflow:hidden;"
            onpointerdown={on_pointer_down} ontouchstart={on_touch_start} ontouchend={on_touch_end}>
            <div class="viewer-top" style="position:absolute; top:12px; right:12px; z-index:9999;">
                <button class="viewer-close" onpointerdown={swallow.clone()} onclick={nav(DomViewer::close)}>{"✕"}</button>
            </div>
            <button class="viewer-prev" style="position:absolute; left:12px; top:50%; z-index:9999;"
                onpointerdown={swallow.clone()} onclick={nav(DomViewer::prev)}>{"‹"}</button>
            <div ref={refs.stage.clone()} class="viewer-stage" style="position:relative; max-width:92vw; max-height:78vh;">
                <img ref={refs.image.clone()} class="viewer-img" alt="Artwork" draggable="false"
                    style="display:block; max-width:92vw; max-height:78vh; transform-origin:50% 50%; will-change:transform; user-select:none;"
                    ondblclick={on_dblclick} />
            </div>
            <button class="viewer-next" style="position:absolute; right:12px; top:50%; z-index:9999;"
                onpointerdown={swallow} onclick={nav(DomViewer::next)}>{"›"}</button>
            <div class="viewer-caption" style="margin-top:12px; color:#fff; text-align:center; max-width:80vw;">
                <strong ref={refs.caption_title.clone()} style="display:block"></strong>
                <div ref={refs.caption_desc.clone()} style="color:#ddd; margin-top:6px"></div>
            </div>
        </div>
    }
}
