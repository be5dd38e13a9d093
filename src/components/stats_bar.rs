//! Stats Bar
//!
//! Counts for the filtered sequence, plus the platform-wide line once
//! `/stats` has answered.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.deck().read().stats());
    let platform = Memo::new(move |_| store.deck().read().platform_stats().cloned());

    view! {
        <section class="stats-bar">
            <div class="stat">
                <span class="stat-value">{move || stats.get().total_ideas}</span>
                <span class="stat-label">"Ideas"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{move || stats.get().total_categories}</span>
                <span class="stat-label">"Categories"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{move || stats.get().avg_rating_label()}</span>
                <span class="stat-label">"Avg Rating"</span>
            </div>
            {move || platform.get().map(|p| view! {
                <p class="platform-stats">
                    {format!(
                        "{} ideas across {} categories on SparkDeck, rated {:.1} on average. Updated {}.",
                        p.total_ideas,
                        p.total_categories,
                        p.avg_rating,
                        p.last_updated.format("%-m/%-d/%Y"),
                    )}
                </p>
            })}
        </section>
    }
}
