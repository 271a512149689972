//! Layout components - Sidebar and main layout wrapper
//!
//! The sidebar renders a fixed list of route descriptors and highlights the
//! entry whose path exactly equals the current location.

use crate::components::nav::NavBar;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Navigation item type
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Sidebar links, in display order. Hrefs are unique.
pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "add job",
        href: "/add-job",
        icon: "post_add",
    },
    NavLink {
        label: "all jobs",
        href: "/jobs",
        icon: "work",
    },
    NavLink {
        label: "stats",
        href: "/stats",
        icon: "monitoring",
    },
];

/// One navigation entry resolved against the current location
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedNavLink {
    pub href: &'static str,
    /// Display label, capitalized per word
    pub label: String,
    pub icon: &'static str,
    pub active: bool,
}

/// Resolve the link list against the current path.
///
/// Pure projection: one output entry per input entry, input order preserved.
/// An entry is active iff its href equals `current_path` exactly; a path
/// matching no entry yields zero active links.
pub fn render_nav_links(links: &[NavLink], current_path: &str) -> Vec<RenderedNavLink> {
    links
        .iter()
        .map(|link| RenderedNavLink {
            href: link.href,
            label: capitalize_label(link.label),
            icon: link.icon,
            active: link.href == current_path,
        })
        .collect()
}

/// Uppercase the first letter of each whitespace-separated word.
///
/// Display-only; stored labels stay lowercase.
pub fn capitalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for ch in label.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

/// Sidebar component with navigation links
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="sidebar-logo">
                    <span class="material-symbols-outlined" style="font-size: 1.25rem;">"work_history"</span>
                </div>
                <span class="sidebar-title">"Jobify"</span>
            </div>
            <nav class="sidebar-nav">
                {move || {
                    let path = location.pathname.get();
                    render_nav_links(NAV_LINKS, &path)
                        .into_iter()
                        .map(|link| {
                            let class = if link.active { "nav-item active" } else { "nav-item" };
                            view! {
                                <A href=link.href attr:class=class>
                                    <span class="material-symbols-outlined nav-icon">{link.icon}</span>
                                    {link.label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </aside>
    }
}

/// Main layout wrapper with sidebar and header
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                <NavBar />
                <div class="page-content">{children()}</div>
            </main>
        </div>
    }
}
