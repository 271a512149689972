//! Theme management with dark mode support
//!
//! Provides theme state management, local storage persistence,
//! and CSS class toggling for dark/light mode.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// localStorage key for the saved preference
const THEME_STORAGE_KEY: &str = "jobify-theme";

/// Theme preference stored in localStorage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Theme {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "system")]
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl Theme {
    /// Check if dark mode is active
    #[must_use]
    pub fn is_dark(&self) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark(),
        }
    }

    /// Get next theme in cycle: System -> Light -> Dark -> System
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }

    /// Get display name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

/// System preference detection (only works in browser)
#[cfg(feature = "client")]
fn system_prefers_dark() -> bool {
    use web_sys::window;

    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .and_then(|m| m.map(|m| m.matches()))
        .unwrap_or(false)
}

/// SSR fallback
#[cfg(not(feature = "client"))]
fn system_prefers_dark() -> bool {
    false
}

/// Get or create the theme signal from context
pub fn use_theme() -> RwSignal<Theme> {
    if let Some(ctx) = use_context::<RwSignal<Theme>>() {
        ctx
    } else {
        let theme = RwSignal::new(Theme::System);
        provide_context(theme);
        theme
    }
}

/// Theme context for components
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal
    pub theme: RwSignal<Theme>,
    /// Set theme and persist
    pub set_theme: Callback<Theme>,
    /// Toggle to next theme
    pub toggle: Callback<()>,
    /// Whether dark mode is active
    pub is_dark: Signal<bool>,
}

impl ThemeContext {
    /// Create new theme context, restoring any saved preference
    pub fn new() -> Self {
        let theme = use_theme();
        let set_theme = Callback::new(move |new_theme: Theme| {
            theme.set(new_theme);
            persist_theme(new_theme);
            apply_theme(new_theme);
        });
        let toggle = Callback::new(move |_: ()| {
            let next = theme.get().next();
            theme.set(next);
            persist_theme(next);
            apply_theme(next);
        });
        let is_dark = Signal::derive(move || theme.get().is_dark());

        if let Some(saved) = load_saved_theme() {
            theme.set(saved);
            apply_theme(saved);
        } else {
            apply_theme(theme.get());
        }

        ThemeContext {
            theme,
            set_theme,
            toggle,
            is_dark,
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use theme context in components
pub fn use_theme_context() -> ThemeContext {
    ThemeContext::new()
}

/// Persist theme to localStorage
#[cfg(feature = "client")]
fn persist_theme(theme: Theme) {
    use web_sys::window;

    if let Ok(json) = serde_json::to_string(&theme) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, &json);
        }
    }
}

#[cfg(not(feature = "client"))]
fn persist_theme(_: Theme) {}

/// Load saved theme from localStorage
#[cfg(feature = "client")]
fn load_saved_theme() -> Option<Theme> {
    use web_sys::window;

    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
}

#[cfg(not(feature = "client"))]
fn load_saved_theme() -> Option<Theme> {
    None
}

/// Apply theme by toggling the `dark` class on the document root
#[cfg(feature = "client")]
fn apply_theme(theme: Theme) {
    use web_sys::window;

    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(html) = document.document_element() {
            if theme.is_dark() {
                html.class_list().add_1("dark").ok();
            } else {
                html.class_list().remove_1("dark").ok();
            }
        }
    }
}

#[cfg(not(feature = "client"))]
fn apply_theme(_: Theme) {}
