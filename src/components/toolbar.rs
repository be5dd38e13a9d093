//! Toolbar
//!
//! Sort select, carousel/grid toggle and the submit-idea button.

use std::str::FromStr;

use leptos::prelude::*;
use serde_json::json;
use sparkdeck_core::{Command, SortKey, ViewMode};

use crate::analytics::track;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();
    let view_mode = Memo::new(move |_| store.deck().read().view());
    let sort_value = move || store.deck().read().store().sort().as_str();

    let on_sort = move |ev: web_sys::Event| {
        match SortKey::from_str(&event_target_value(&ev)) {
            Ok(key) => {
                store_dispatch(&store, Command::Sort(key));
                track(&store, "ideas_sorted", json!({ "sort": key.as_str() }));
            }
            Err(e) => log::warn!("{}", e),
        }
    };

    let toggle_class = move |mode: ViewMode| {
        move || if view_mode.get() == mode { "view-btn active" } else { "view-btn" }
    };

    view! {
        <div class="toolbar">
            <select class="sort-select" prop:value=sort_value on:change=on_sort>
                {SortKey::ALL.iter().map(|key| view! {
                    <option value=key.as_str()>{key.label()}</option>
                }).collect_view()}
            </select>

            <div class="view-toggle">
                <button
                    class=toggle_class(ViewMode::Carousel)
                    title="Carousel view"
                    on:click=move |_| { store_dispatch(&store, Command::SetView(ViewMode::Carousel)); }
                >
                    "Carousel"
                </button>
                <button
                    class=toggle_class(ViewMode::Grid)
                    title="Grid view"
                    on:click=move |_| { store_dispatch(&store, Command::SetView(ViewMode::Grid)); }
                >
                    "Grid"
                </button>
            </div>

            <button class="submit-idea-btn" on:click=move |_| { store_dispatch(&store, Command::OpenSubmit); }>
                "Submit Idea"
            </button>
        </div>
    }
}
