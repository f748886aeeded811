/// Tagscope - bookmark manager with tag search
/// Built with Rust + WASM + Yew

pub mod api;
pub mod bookmark;
pub mod config;
pub mod error;
pub mod export;
pub mod extension;
pub mod operations;
pub mod pagination;
pub mod search;
pub mod tags;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the bookmark manager page
#[wasm_bindgen]
pub fn start_app() {
    log::info!("mounting Tagscope");
    yew::Renderer::<ui::app::App>::new().render();
}
