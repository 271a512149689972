//! Stats page - Aggregated overview of the job search

use crate::components::{IconVariant, StatsCard};
use crate::store::use_app_state;
use leptos::prelude::*;

/// Stats page component
#[component]
pub fn Stats() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Stats"</h1>
                    <p class="page-subtitle">"Overview of your job search"</p>
                </div>
            </div>

            {move || {
                let stats = state.stats();
                view! {
                    <div class="stats-grid">
                        <StatsCard
                            label="Pending Applications".to_string()
                            value=stats.pending.to_string()
                            icon="hourglass_empty".to_string()
                            icon_variant=IconVariant::Warning
                        />
                        <StatsCard
                            label="Interviews Scheduled".to_string()
                            value=stats.interview.to_string()
                            icon="event".to_string()
                            icon_variant=IconVariant::Primary
                        />
                        <StatsCard
                            label="Jobs Declined".to_string()
                            value=stats.declined.to_string()
                            icon="cancel".to_string()
                            icon_variant=IconVariant::Danger
                        />
                        <StatsCard
                            label="Total Applications".to_string()
                            value=stats.total().to_string()
                            icon="work".to_string()
                            icon_variant=IconVariant::Neutral
                        />
                    </div>
                }
            }}
        </div>
    }
}
