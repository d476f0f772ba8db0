#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod config;
pub mod input;
pub mod logging;

/// Re-export of the card engine used by the front end.
pub use valentine_card as card;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init(logging::level_from_query(&config::location_search())) {
        web_sys::console::warn_1(&JsValue::from(format!("logger already installed: {err}")));
    }
    yew::Renderer::<app::App>::new().render();
}
