// Console helpers shared by the app shell and the viewer

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // no console off wasm
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Wall-clock milliseconds, the same clock `Date.now()` reads.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
