pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
pub mod notify;
pub mod scheduler;
pub mod throttle;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod pages;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(test)]
mod test_support;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::SiteConfig::default().log_level);
    leptos::mount::mount_to_body(App);
}
