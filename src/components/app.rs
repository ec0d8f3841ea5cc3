use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    gallery_grid::GalleryGrid,
    viewer_overlay::{ViewerHandle, ViewerOverlay},
};
use crate::config::ViewerConfig;
use crate::dom_surface::{DomSurface, ViewerRefs, WindowListeners};
use crate::gesture::GestureEngine;
use crate::globals::GlobalEntryPoints;
use crate::model::{Gallery, GalleryAction};

#[function_component(App)]
pub fn app() -> Html {
    let gallery = use_reducer(Gallery::load);
    let refs = use_memo((), |_| ViewerRefs::default());
    let viewer = {
        let refs = (*refs).clone();
        let items = gallery.items();
        use_mut_ref(move || GestureEngine::new(items, DomSurface::new(refs), ViewerConfig::load()))
    };
    let handle = ViewerHandle(viewer.clone());

    // Window pointer listeners hold a weak handle back to the engine
    {
        let viewer = viewer.clone();
        use_effect_with((), move |_| {
            let listeners = WindowListeners::for_viewer(Rc::downgrade(&viewer));
            viewer.borrow_mut().surface_mut().install_listeners(listeners);
            move || {
                if let Ok(mut v) = viewer.try_borrow_mut() {
                    v.close();
                }
            }
        });
    }
    // openViewerAt and friends for buttons outside the yew tree
    {
        let viewer = viewer.clone();
        use_effect_with((), move |_| {
            let globals = GlobalEntryPoints::for_viewer(Rc::downgrade(&viewer));
            globals.install();
            move || globals.uninstall()
        });
    }
    // Hand every new collection to the viewer
    {
        let handle = handle.clone();
        use_effect_with(gallery.items(), move |items| {
            let items = items.clone();
            handle.with(|v| v.replace_gallery(items));
            || ()
        });
    }
    // Keyboard shortcuts only while the viewer is open
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                handle.with(|v| {
                    if !v.is_open() {
                        return;
                    }
                    match e.key().as_str() {
                        "ArrowLeft" => v.prev(),
                        "ArrowRight" => v.next(),
                        "Escape" => v.close(),
                        _ => {}
                    }
                });
            }) as Box<dyn FnMut(_)>);
            let window = web_sys::window();
            if let Some(win) = &window {
                win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }
    // Other tabs editing the collection
    {
        let gallery = gallery.clone();
        use_effect_with((), move |_| {
            let storage_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                gallery.dispatch(GalleryAction::Reload);
            }) as Box<dyn FnMut(_)>);
            let window = web_sys::window();
            if let Some(win) = &window {
                win.add_event_listener_with_callback("storage", storage_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "storage",
                        storage_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_open = {
        let handle = handle.clone();
        Callback::from(move |i: usize| handle.with(|v| v.open_at(i)))
    };

    html! {
        <div id="root">
            <GalleryGrid items={gallery.items()} {on_open} />
            <ViewerOverlay refs={(*refs).clone()} viewer={handle} />
        </div>
    }
}
