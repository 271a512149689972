//! Global in-memory store for tracked applications
//!
//! Records live in a signal-backed list for the lifetime of the page; there
//! is no persistence layer behind it.

use crate::types::{JobApplication, JobForm, JobMode, JobStats, JobStatus};
use leptos::prelude::*;

/// App state using signals
#[derive(Clone, Copy)]
pub struct AppState {
    /// All tracked applications, newest last
    pub jobs: RwSignal<Vec<JobApplication>>,
    next_id: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        let seed = sample_jobs();
        let next_id = seed.len() as u64 + 1;
        Self {
            jobs: RwSignal::new(seed),
            next_id: RwSignal::new(next_id),
        }
    }

    /// Insert a new application from a validated form draft
    pub fn add_job(&self, form: &JobForm) -> JobApplication {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let job = JobApplication {
            id: format!("app-{:04}", id),
            position: form.position.trim().to_string(),
            company: form.company.trim().to_string(),
            location: form.location.trim().to_string(),
            status: form.status,
            mode: form.mode,
            applied: today(),
        };
        self.jobs.update(|jobs| jobs.push(job.clone()));
        job
    }

    /// Remove an application by id; unknown ids are ignored
    pub fn remove_job(&self, id: &str) {
        self.jobs.update(|jobs| jobs.retain(|job| job.id != id));
    }

    /// Aggregate counts for the stats page
    pub fn stats(&self) -> JobStats {
        JobStats::tally(&self.jobs.get())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app state from context
pub fn use_app_state() -> AppState {
    let ctx = use_context::<AppState>();
    if let Some(state) = ctx {
        state
    } else {
        panic!("App state not found. Wrap your app in AppStateProvider.");
    }
}

/// Provide global app state
#[component]
pub fn AppStateProvider(children: Children) -> impl IntoView {
    provide_context(AppState::new());
    children()
}

/// Today's date as a display string
fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Seed applications shown before the user adds their own
pub fn sample_jobs() -> Vec<JobApplication> {
    vec![
        JobApplication {
            id: "app-0001".to_string(),
            position: "Backend Engineer".to_string(),
            company: "Northwind Labs".to_string(),
            location: "Berlin, Germany".to_string(),
            status: JobStatus::Interview,
            mode: JobMode::FullTime,
            applied: "2026-07-12".to_string(),
        },
        JobApplication {
            id: "app-0002".to_string(),
            position: "Platform Engineer".to_string(),
            company: "Helios Cloud".to_string(),
            location: "Remote".to_string(),
            status: JobStatus::Pending,
            mode: JobMode::FullTime,
            applied: "2026-07-18".to_string(),
        },
        JobApplication {
            id: "app-0003".to_string(),
            position: "Site Reliability Engineer".to_string(),
            company: "Ferrous Systems".to_string(),
            location: "Amsterdam, Netherlands".to_string(),
            status: JobStatus::Declined,
            mode: JobMode::PartTime,
            applied: "2026-06-30".to_string(),
        },
        JobApplication {
            id: "app-0004".to_string(),
            position: "Developer Tools Intern".to_string(),
            company: "Quanta Software".to_string(),
            location: "Lisbon, Portugal".to_string(),
            status: JobStatus::Pending,
            mode: JobMode::Internship,
            applied: "2026-07-25".to_string(),
        },
    ]
}
