//! Landing page - Public marketing page

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="landing">
            <header class="landing-header">
                <span class="material-symbols-outlined landing-logo">"work_history"</span>
                <span class="landing-brand">"Jobify"</span>
            </header>
            <section class="landing-hero">
                <div>
                    <h1 class="landing-title">
                        "Job "<span class="accent">"Tracking"</span>" App"
                    </h1>
                    <p class="landing-copy">
                        "Jobify is a job application tracker for job seekers who want \
                         to organize, track, and analyze their job search. Add and \
                         manage applications, follow up on interviews, and watch your \
                         progress on a clean stats dashboard - all in one place."
                    </p>
                    <A href="/add-job" attr:class="btn btn-primary">"Get Started"</A>
                </div>
                <div class="landing-art" aria-hidden="true">
                    <span class="material-symbols-outlined">"work_history"</span>
                </div>
            </section>
        </main>
    }
}
