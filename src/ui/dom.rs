/// Thin wrappers over browser APIs used by the frontend

use wasm_bindgen::prelude::*;
use web_sys::Storage;

// Import JS bridge functions
#[wasm_bindgen(module = "/app.js")]
extern "C" {
    fn downloadFile(data: &str, filename: &str, mime: &str);
}

const DARK_MODE_KEY: &str = "darkMode";
const DARK_CLASS: &str = "dark";

/// Assumed width when the window can not be measured
const FALLBACK_WIDTH: f64 = 1024.0;

pub fn download(data: &str, filename: &str, mime: &str) {
    downloadFile(data, filename, mime);
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

/// Seconds since the Unix epoch
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0).floor() as i64
}

pub fn load_dark_mode() -> bool {
    session_storage()
        .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
        .is_some_and(|value| value == "true")
}

/// Toggle the `dark` class on `<html>` and remember the choice for the session
pub fn apply_dark_mode(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let classes = root.class_list();
        let result = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = result {
            log::error!("failed to switch theme: {:?}", e);
        }
    }

    if let Some(storage) = session_storage() {
        if let Err(e) = storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
            log::warn!("failed to save theme: {:?}", e);
        }
    }
}

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}
