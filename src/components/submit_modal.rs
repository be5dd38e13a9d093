//! Submit Idea Modal
//!
//! Validates locally, keeps the entry as a pending record in the deck and
//! then posts it. A failed post still leaves the local record in place.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use sparkdeck_core::domain::{category_label, complexity_label};
use sparkdeck_core::{Command, IdeaSubmission, ModalState};

use crate::analytics::track;
use crate::commands;
use crate::models::ToastKind;
use crate::store::{store_dispatch, store_push_toast, use_app_store, AppStateStoreFields};

/// Always offered, even before the catalog contains them
const BASE_CATEGORIES: &[&str] = &["saas", "ai", "tech"];

#[component]
pub fn SubmitModal() -> impl IntoView {
    let store = use_app_store();
    let is_open = Memo::new(move |_| store.deck().read().modal() == ModalState::Submit);

    let form = RwSignal::new(IdeaSubmission {
        complexity: 1,
        ..IdeaSubmission::default()
    });
    let (saving, set_saving) = signal(false);

    let categories = Memo::new(move |_| {
        let mut all: Vec<String> = BASE_CATEGORIES.iter().map(|c| c.to_string()).collect();
        for category in store.deck().read().store().categories() {
            if !all.contains(&category) {
                all.push(category);
            }
        }
        all
    });

    let close = move || {
        form.set(IdeaSubmission {
            complexity: 1,
            ..IdeaSubmission::default()
        });
        store_dispatch(&store, Command::CloseModal);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let submission = form.get_untracked();
        let recorded = store.deck().write().record_submission(submission.clone(), Utc::now());
        let idea = match recorded {
            Ok(idea) => idea,
            Err(e) => {
                store_push_toast(&store, ToastKind::Error, e.to_string());
                return;
            }
        };

        track(
            &store,
            "idea_submitted",
            json!({ "category": idea.category, "complexity": idea.complexity }),
        );
        close();
        set_saving.set(true);
        spawn_local(async move {
            match commands::submit_idea(&submission).await {
                Ok(_) => {
                    commands::clear_cache();
                    store_push_toast(
                        &store,
                        ToastKind::Success,
                        "Idea submitted successfully! It will be reviewed soon.",
                    );
                }
                Err(e) => {
                    log::warn!("idea submission not delivered: {}", e);
                    store_push_toast(
                        &store,
                        ToastKind::Info,
                        "Idea saved on this device. The server could not be reached.",
                    );
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal active" on:click=move |_| close()>
                <div class="modal-content submit-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" title="Close" on:click=move |_| close()>"×"</button>
                    <h2>"Submit Your Idea"</h2>

                    <form class="idea-form" on:submit=submit>
                        <label>
                            "Title"
                            <input type="text" required=true
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev)) />
                        </label>

                        <div class="form-row">
                            <label>
                                "Category"
                                <select required=true
                                    prop:value=move || form.with(|f| f.category.clone())
                                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))>
                                    <option value="">"Choose..."</option>
                                    <For each=move || categories.get() key=|c| c.clone() let:category>
                                        <option value=category.clone()>{category_label(&category)}</option>
                                    </For>
                                </select>
                            </label>
                            <label>
                                "Complexity"
                                <select
                                    prop:value=move || form.with(|f| f.complexity.to_string())
                                    on:change=move |ev| {
                                        let level = event_target_value(&ev).parse().unwrap_or(1);
                                        form.update(|f| f.complexity = level);
                                    }>
                                    {(1u8..=4).map(|level| view! {
                                        <option value=level.to_string()>{complexity_label(level)}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                        </div>

                        <label>
                            "Description"
                            <textarea required=true rows="3"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))></textarea>
                        </label>
                        <label>
                            "Problem"
                            <textarea rows="2"
                                prop:value=move || form.with(|f| f.problem.clone())
                                on:input=move |ev| form.update(|f| f.problem = event_target_value(&ev))></textarea>
                        </label>
                        <label>
                            "Solution"
                            <textarea rows="2"
                                prop:value=move || form.with(|f| f.solution.clone())
                                on:input=move |ev| form.update(|f| f.solution = event_target_value(&ev))></textarea>
                        </label>
                        <label>
                            "Demo URL"
                            <input type="url"
                                prop:value=move || form.with(|f| f.url.clone())
                                on:input=move |ev| form.update(|f| f.url = event_target_value(&ev)) />
                        </label>
                        <label>
                            "Tags (comma separated)"
                            <input type="text"
                                prop:value=move || form.with(|f| f.tags.clone())
                                on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev)) />
                        </label>

                        <div class="form-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn-primary" disabled=move || saving.get()>"Submit Idea"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
