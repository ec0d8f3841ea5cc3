// Viewer entry points published on `window` for plain HTML buttons
use std::cell::RefCell;
use std::rc::Weak;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::dom_surface::DomViewer;
use crate::util::cwarn;

/// Index argument from script; `None` unless it is a whole, non-negative number.
pub fn index_from_js(value: f64) -> Option<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

fn with_viewer(viewer: &Weak<RefCell<DomViewer>>, f: impl FnOnce(&mut DomViewer)) {
    let Some(viewer) = viewer.upgrade() else { return };
    if let Ok(mut v) = viewer.try_borrow_mut() {
        f(&mut v);
    }
}

/// `openViewerAt(i)`, `closeViewer()`, `viewerPrev()` and `viewerNext()`.
pub struct GlobalEntryPoints {
    open_at: Closure<dyn FnMut(f64)>,
    close: Closure<dyn FnMut()>,
    prev: Closure<dyn FnMut()>,
    next: Closure<dyn FnMut()>,
}

impl GlobalEntryPoints {
    pub fn for_viewer(viewer: Weak<RefCell<DomViewer>>) -> Self {
        let open_at = {
            let viewer = viewer.clone();
            Closure::wrap(Box::new(move |i: f64| match index_from_js(i) {
                Some(index) => with_viewer(&viewer, |v| v.open_at(index)),
                None => cwarn(&format!("viewer: openViewerAt({i}) ignored")),
            }) as Box<dyn FnMut(_)>)
        };
        let nav = |f: fn(&mut DomViewer)| {
            let viewer = viewer.clone();
            Closure::wrap(Box::new(move || with_viewer(&viewer, f)) as Box<dyn FnMut()>)
        };
        Self {
            open_at,
            close: nav(DomViewer::close),
            prev: nav(DomViewer::prev),
            next: nav(DomViewer::next),
        }
    }

    fn entries(&self) -> [(&'static str, &JsValue); 4] {
        [
            ("openViewerAt", self.open_at.as_ref()),
            ("closeViewer", self.close.as_ref()),
            ("viewerPrev", self.prev.as_ref()),
            ("viewerNext", self.next.as_ref()),
        ]
    }

    pub fn install(&self) {
        let Some(window) = web_sys::window() else { return };
        for (name, f) in self.entries() {
            if Reflect::set(window.as_ref(), &JsValue::from_str(name), f).is_err() {
                cwarn(&format!("viewer: could not publish {name}"));
            }
        }
    }

    /// Must run before the closures drop, or script would call freed callbacks.
    pub fn uninstall(&self) {
        let Some(window) = web_sys::window() else { return };
        for (name, _) in self.entries() {
            let _ = Reflect::delete_property(window.as_ref(), &JsValue::from_str(name));
        }
    }
}
