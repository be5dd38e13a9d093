//! Grid View

use leptos::prelude::*;

use super::IdeaCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn IdeaGrid() -> impl IntoView {
    let store = use_app_store();
    let cards = Memo::new(move |_| store.deck().read().grid_cards());

    view! {
        <div class="grid-view">
            <Show
                when=move || !cards.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No ideas in this category yet."</p> }
            >
                <div class="idea-grid">
                    <For each=move || cards.get() key=|card| (card.id, card.index) let:card>
                        <IdeaCard card=card grid=true />
                    </For>
                </div>
            </Show>
        </div>
    }
}
