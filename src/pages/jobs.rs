//! Jobs page - List and manage tracked applications

use crate::components::StatusBadge;
use crate::store::use_app_state;
use crate::types::JobApplication;
use leptos::prelude::*;

/// Jobs page component
#[component]
pub fn Jobs() -> impl IntoView {
    let state = use_app_state();
    let search_term = RwSignal::new(String::new());

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"All Jobs"</h1>
                    <p class="page-subtitle">
                        {move || format!("{} applications tracked", state.jobs.get().len())}
                    </p>
                </div>
                <div class="quick-actions">
                    <div class="form-group">
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Search position or company..."
                            on:input=move |e| {
                                search_term.set(event_target_value(&e));
                            }
                        />
                    </div>
                </div>
            </div>

            <Show when=move || state.jobs.get().is_empty()>
                <p class="page-subtitle">
                    "No applications yet. Add your first job to get started."
                </p>
            </Show>

            <div class="card">
                <div class="card-body" style="padding: 0;">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Status"</th>
                                <th>"Position"</th>
                                <th>"Location"</th>
                                <th>"Mode"</th>
                                <th>"Applied"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search_term.get().to_lowercase();
                                let all_jobs = state.jobs.get();
                                let filtered: Vec<JobApplication> = if term.is_empty() {
                                    all_jobs
                                } else {
                                    all_jobs
                                        .into_iter()
                                        .filter(|j| {
                                            j.position.to_lowercase().contains(&term)
                                                || j.company.to_lowercase().contains(&term)
                                        })
                                        .collect()
                                };
                                filtered.into_iter().map(|job| {
                                    let job_id = job.id.clone();
                                    view! {
                                        <tr>
                                            <td><StatusBadge status=job.status /></td>
                                            <td>
                                                <span style="font-weight: 500;">{job.position}</span>
                                                <span class="monospace" style="display: block; font-size: 0.75rem; color: var(--text-muted);">
                                                    {job.company}
                                                </span>
                                            </td>
                                            <td>{job.location}</td>
                                            <td>{job.mode.display_name()}</td>
                                            <td class="monospace">{job.applied}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost"
                                                    aria-label="Delete application"
                                                    on:click=move |_| state.remove_job(&job_id)
                                                >
                                                    <span class="material-symbols-outlined">"delete"</span>
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
