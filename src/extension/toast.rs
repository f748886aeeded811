/// In-page toast notifications for the content script

use crate::extension::tracker::Notice;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement, Window};

pub const CONTAINER_ID: &str = "tagscope-toast-container";

/// Time a toast stays fully visible
pub const DISPLAY_MS: i32 = 2500;

/// Fade-out before removal
pub const FADE_MS: i32 = 500;

pub const CONTAINER_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("display", "flex"),
    ("flex-direction", "column"),
    ("gap", "10px"),
    ("z-index", "9999"),
];

pub const TOAST_STYLE: &[(&str, &str)] = &[
    ("padding", "10px 16px"),
    ("background", "rgba(0,0,0,0.8)"),
    ("color", "white"),
    ("border-radius", "6px"),
    ("font-size", "14px"),
    ("box-shadow", "0 2px 8px rgba(0,0,0,0.3)"),
    ("opacity", "1"),
    ("transition", "opacity 0.5s"),
];

/// Content-script entry: render a background notice, ignore anything else
#[wasm_bindgen]
pub fn show_notice(message: JsValue) {
    match serde_wasm_bindgen::from_value::<Notice>(message) {
        Ok(notice) => {
            if let Err(e) = show_toast(notice.text()) {
                log::error!("toast failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("ignoring runtime message: {}", e),
    }
}

/// Append a toast to the page; it fades and removes itself.
///
/// Toasts stack in arrival order. There is no limit and no dedup.
pub fn show_toast(text: &str) -> Result<HtmlElement, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let container = ensure_container(&document)?;

    let toast: HtmlElement = document.create_element("div")?.dyn_into()?;
    toast.set_inner_text(text);
    apply_style(&toast.style(), TOAST_STYLE)?;
    container.append_child(&toast)?;

    schedule_dismiss(&window, toast.clone())?;
    Ok(toast)
}

fn ensure_container(document: &Document) -> Result<HtmlElement, JsValue> {
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return Ok(existing.dyn_into()?);
    }

    let container: HtmlElement = document.create_element("div")?.dyn_into()?;
    container.set_id(CONTAINER_ID);
    apply_style(&container.style(), CONTAINER_STYLE)?;

    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&container)?;
    Ok(container)
}

fn apply_style(style: &CssStyleDeclaration, rules: &[(&str, &str)]) -> Result<(), JsValue> {
    for (name, value) in rules {
        style.set_property(name, value)?;
    }
    Ok(())
}

fn schedule_dismiss(window: &Window, toast: HtmlElement) -> Result<(), JsValue> {
    let timer_window = window.clone();

    let fade = Closure::once_into_js(move || {
        if let Err(e) = toast.style().set_property("opacity", "0") {
            log::error!("toast fade failed: {:?}", e);
        }

        let remove = Closure::once_into_js(move || toast.remove());
        if let Err(e) = timer_window
            .set_timeout_with_callback_and_timeout_and_arguments_0(remove.unchecked_ref(), FADE_MS)
        {
            log::error!("toast removal not scheduled: {:?}", e);
        }
    });

    window.set_timeout_with_callback_and_timeout_and_arguments_0(fade.unchecked_ref(), DISPLAY_MS)?;
    Ok(())
}
