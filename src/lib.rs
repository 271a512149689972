//! Jobify Web Console
//!
//! A web console for tracking job applications, built with Leptos. The UI
//! runs client-side; an Axum binary serves the HTML shell that bootstraps it.

use leptos::prelude::*;

pub mod components;
pub mod meta;
pub mod pages;
pub mod store;
pub mod types;

#[cfg(feature = "ssr")]
pub mod server;

/// The main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <store::AppStateProvider>
            <pages::AppRouter />
        </store::AppStateProvider>
    }
}

/// Client-side entry point (WASM)
#[cfg(feature = "client")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
