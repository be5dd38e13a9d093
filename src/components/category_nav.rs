//! Category Navigation
//!
//! "All" plus every category present in the catalog, in first-seen order.

use leptos::prelude::*;
use serde_json::json;
use sparkdeck_core::domain::category_label;
use sparkdeck_core::{CategoryFilter, Command};

use crate::analytics::track;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_app_store();

    let categories = Memo::new(move |_| {
        let mut all = vec!["all".to_string()];
        all.extend(store.deck().read().store().categories());
        all
    });
    let active = Memo::new(move |_| store.deck().read().store().category().as_str().to_string());

    view! {
        <nav class="nav">
            <For each=move || categories.get() key=|c| c.clone() let:category>
                {
                    let label = category_label(&category);
                    let is_active = {
                        let category = category.clone();
                        move || active.get() == category
                    };
                    view! {
                        <a
                            href="#"
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                store_dispatch(&store, Command::Filter(CategoryFilter::from(category.as_str())));
                                track(&store, "category_filter", json!({ "category": category }));
                            }
                        >
                            {label}
                        </a>
                    }
                }
            </For>
        </nav>
    }
}
