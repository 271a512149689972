//! Navigation bar component

use crate::components::theme_toggle::ThemeToggle;
use leptos::prelude::*;

/// Dashboard header bar
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="header-search">
                <span class="material-symbols-outlined header-search-icon">"search"</span>
                <input type="text" placeholder="Search applications..." />
            </div>
            <div class="header-actions">
                <ThemeToggle />
                <button class="nav-btn" aria-label="User profile">
                    <span class="material-symbols-outlined">"account_circle"</span>
                </button>
            </div>
        </nav>
    }
}
