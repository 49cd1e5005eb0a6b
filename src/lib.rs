#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod embed;
pub mod motion;
pub mod rotation;
pub mod schedule;
pub mod scroll;
pub mod slider;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("couldn't initialise console logging: {err}");
    }
    leptos::mount::hydrate_body(App);
}
