//! Status Badge Component
//!
//! Displays an application status with appropriate colors and icons.

use crate::types::JobStatus;
use leptos::prelude::*;

/// Color class and icon for a status
#[must_use]
pub fn status_style(status: JobStatus) -> (&'static str, &'static str) {
    match status {
        JobStatus::Pending => ("pending", "hourglass_empty"),
        JobStatus::Interview => ("running", "event"),
        JobStatus::Declined => ("failed", "cancel"),
    }
}

/// Status Badge component
#[component]
pub fn StatusBadge(
    /// Status to display
    status: JobStatus,
) -> impl IntoView {
    let (color_class, icon) = status_style(status);

    view! {
        <span class=format!("status-badge {}", color_class)>
            <span class="material-symbols-outlined" style="font-size: 0.875rem;">{icon}</span>
            {status.display_name()}
        </span>
    }
}
