//! Pages Module

pub mod add_job;
pub mod home;
pub mod jobs;
pub mod stats;

pub use add_job::AddJob;
pub use home::Home;
pub use jobs::Jobs;
pub use stats::Stats;

use crate::components::Layout;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Top-level router mapping paths to pages
///
/// The landing page renders on its own; dashboard pages share the sidebar
/// layout.
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/add-job") view=|| view! { <Layout><AddJob /></Layout> } />
                <Route path=path!("/jobs") view=|| view! { <Layout><Jobs /></Layout> } />
                <Route path=path!("/stats") view=|| view! { <Layout><Stats /></Layout> } />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page-title">"Page not found"</h1>
            <p class="page-subtitle">"The page you are looking for does not exist."</p>
        </main>
    }
}
