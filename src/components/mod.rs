//! Components Module

pub mod job_form;
pub mod layout;
pub mod nav;
pub mod stats_card;
pub mod status_badge;
pub mod theme;
pub mod theme_toggle;

pub use job_form::{JobFormError, MAX_FIELD_LEN};
pub use layout::{Layout, NAV_LINKS, NavLink, RenderedNavLink, Sidebar, render_nav_links};
pub use nav::NavBar;
pub use stats_card::{IconVariant, StatsCard};
pub use status_badge::StatusBadge;
pub use theme::{Theme, ThemeContext, use_theme, use_theme_context};
pub use theme_toggle::ThemeToggle;
