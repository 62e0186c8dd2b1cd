#![forbid(unsafe_code)]
//! Browser front end for the plate roller.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod audio;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod theme;
pub mod timers;
pub mod wear;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger: {err}")));
    }
    // Ensure <html lang> matches the saved locale before the first paint
    let lang = app::state::saved_lang();
    dom::set_document_lang(lang.code());
    log::info!("plate roller starting ({})", lang.code());
    yew::Renderer::<app::App>::new().render();
}
