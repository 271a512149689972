//! Theme Toggle Button Component
//!
//! A button that cycles through theme options (System -> Light -> Dark).

use crate::components::theme::{Theme, use_theme_context};
use leptos::prelude::*;

/// Theme toggle component - cycles through Light/Dark/System
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme_context();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| {
                theme_ctx.toggle.run(());
            }
        >
            <span class="material-symbols-outlined theme-icon">
                {move || match theme_ctx.theme.get() {
                    Theme::Light => "light_mode",
                    Theme::Dark => "dark_mode",
                    Theme::System => "contrast",
                }}
            </span>
            <span class="theme-label">
                {move || theme_ctx.theme.get().display_name()}
            </span>
        </button>
    }
}
