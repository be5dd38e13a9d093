//! Carousel Component
//!
//! Track, prev/next buttons, indicators and progress bar. The track style
//! comes straight from the deck's `CarouselFrame`; gestures go through the
//! `leptos-swipe` adapters.

use leptos::prelude::*;
use leptos_swipe::{make_on_mousedown, make_on_touchend, make_on_touchmove, make_on_touchstart};
use sparkdeck_core::Command;
use wasm_bindgen::JsCast;

use super::IdeaCard;
use crate::context::use_app_context;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

/// Distance between the left edges of two adjacent cards, or the width of
/// a lone card
pub fn measure_item_width() -> Option<f64> {
    let cards = document().query_selector_all(".carousel-track .idea-card").ok()?;
    let first = cards.item(0)?.dyn_into::<web_sys::HtmlElement>().ok()?;
    let width = match cards.item(1).and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(second) => (second.offset_left() - first.offset_left()) as f64,
        None => first.get_bounding_client_rect().width(),
    };
    (width > 0.0).then_some(width)
}

#[component]
pub fn Carousel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let swipe = ctx.swipe;
    let dispatch = ctx.dispatch;

    let cards = Memo::new(move |_| store.deck().read().carousel_frame().cards);
    let track_style = Memo::new(move |_| store.deck().read().carousel_frame().track.style());
    let progress_style = Memo::new(move |_| store.deck().read().carousel_frame().progress_style());
    let indicators = Memo::new(move |_| store.deck().read().indicators());
    let dragging = Memo::new(move |_| store.deck().read().controller().is_dragging());

    // Re-measure once the cards are laid out
    Effect::new(move |_| {
        if cards.with(|cards| cards.is_empty()) {
            return;
        }
        request_animation_frame(move || {
            if let Some(item_width) = measure_item_width() {
                store_dispatch(&store, Command::Resize { item_width });
            }
        });
    });

    view! {
        <section class="carousel">
            <Show
                when=move || !cards.with(|cards| cards.is_empty())
                fallback=|| view! { <p class="empty-state">"No ideas in this category yet."</p> }
            >
                <div class="carousel-container">
                    <button class="carousel-btn prev" title="Previous idea"
                        on:click=move |_| { store_dispatch(&store, Command::Prev); }>
                        "‹"
                    </button>

                    <div
                        class=move || if dragging.get() { "carousel-viewport dragging" } else { "carousel-viewport" }
                        on:mousedown=make_on_mousedown(swipe, dispatch)
                        on:touchstart=make_on_touchstart(swipe, dispatch)
                        on:touchmove=make_on_touchmove(swipe, dispatch)
                        on:touchend=make_on_touchend(swipe, dispatch)
                        on:touchcancel=make_on_touchend(swipe, dispatch)
                    >
                        <div class="carousel-track" style=move || track_style.get()>
                            <For each=move || cards.get() key=|card| (card.id, card.index, card.active) let:card>
                                <IdeaCard card=card />
                            </For>
                        </div>
                    </div>

                    <button class="carousel-btn next" title="Next idea"
                        on:click=move |_| { store_dispatch(&store, Command::Next); }>
                        "›"
                    </button>
                </div>

                <div class="carousel-indicators">
                    <For each=move || indicators.get() key=|mark| (mark.index, mark.active) let:mark>
                        <button
                            class=if mark.active { "indicator active" } else { "indicator" }
                            title=format!("Idea {}", mark.index + 1)
                            on:click=move |_| { store_dispatch(&store, Command::GoTo(mark.index)); }
                        ></button>
                    </For>
                </div>

                <div class="progress-bar">
                    <div class="progress-fill" style=move || progress_style.get()></div>
                </div>
            </Show>
        </section>
    }
}
