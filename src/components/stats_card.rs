//! Stats Card Component
//!
//! A reusable statistics card showing a metric.

use leptos::prelude::*;

/// Icon color variants
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconVariant {
    Primary,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl IconVariant {
    /// CSS class for the icon container
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            IconVariant::Primary => "stat-icon primary",
            IconVariant::Success => "stat-icon success",
            IconVariant::Warning => "stat-icon pending",
            IconVariant::Danger => "stat-icon failed",
            IconVariant::Neutral => "stat-icon",
        }
    }
}

/// Stats Card component
#[component]
pub fn StatsCard(
    /// Label describing the metric
    label: String,
    /// Numeric value to display
    value: String,
    /// Icon name (Material Symbols)
    icon: String,
    /// Icon color variant
    icon_variant: IconVariant,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card-header">
                <div class=icon_variant.class()>
                    <span class="material-symbols-outlined">{icon}</span>
                </div>
            </div>
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}
