//! Add Job page - Record a new application

use crate::store::use_app_state;
use crate::types::{JobForm, JobMode, JobStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Add Job page component
#[component]
pub fn AddJob() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let position = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let status = RwSignal::new(JobStatus::Pending);
    let mode = RwSignal::new(JobMode::FullTime);
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let form = JobForm {
            position: position.get(),
            company: company.get(),
            location: location.get(),
            status: status.get(),
            mode: mode.get(),
        };
        match form.validate() {
            Ok(()) => {
                state.add_job(&form);
                error.set(None);
                navigate("/jobs", Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Add Job"</h1>
                    <p class="page-subtitle">"Record a new application to track"</p>
                </div>
            </div>

            <div class="card">
                <div class="card-body">
                    <div class="form-grid">
                        <div class="form-group">
                            <label class="form-label">"Position"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="e.g. Backend Engineer"
                                prop:value=move || position.get()
                                on:input=move |e| position.set(event_target_value(&e))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Company"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="e.g. Northwind Labs"
                                prop:value=move || company.get()
                                on:input=move |e| company.set(event_target_value(&e))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Location"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="e.g. Remote"
                                prop:value=move || location.get()
                                on:input=move |e| location.set(event_target_value(&e))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Status"</label>
                            <select
                                class="form-select"
                                on:change=move |e| {
                                    if let Some(parsed) = JobStatus::parse(&event_target_value(&e)) {
                                        status.set(parsed);
                                    }
                                }
                            >
                                <option value="pending">"Pending"</option>
                                <option value="interview">"Interview"</option>
                                <option value="declined">"Declined"</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Mode"</label>
                            <select
                                class="form-select"
                                on:change=move |e| {
                                    if let Some(parsed) = JobMode::parse(&event_target_value(&e)) {
                                        mode.set(parsed);
                                    }
                                }
                            >
                                <option value="full-time">"Full-time"</option>
                                <option value="part-time">"Part-time"</option>
                                <option value="internship">"Internship"</option>
                            </select>
                        </div>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <p class="form-error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <button class="btn btn-primary" on:click=submit>
                        <span class="material-symbols-outlined">"add"</span>
                        "Add Job"
                    </button>
                </div>
            </div>
        </div>
    }
}
