//! SparkDeck Frontend App
//!
//! Builds the store, loads the catalog and wires the window-level timers
//! and listeners; everything visible lives in `components`.

use gloo_timers::callback::Interval;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use serde_json::json;
use sparkdeck_core::{
    fallback_ideas, sample_ideas, Command, DataSource, Deck, DeckConfig, IdeaQuery, KeyCommand, ViewMode,
};
use wasm_bindgen::JsCast;

use crate::analytics::track;
use crate::commands;
use crate::components::{
    measure_item_width, Carousel, CategoryNav, IdeaGrid, IdeaModal, NewsletterForm, StatsBar, SubmitModal,
    ToastStack, Toolbar,
};
use crate::context::AppContext;
use crate::store::{store_dispatch, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App(config: DeckConfig) -> impl IntoView {
    commands::configure_client(&config);

    let store: AppStore = Store::new(AppState::new(Deck::new(config.clone())));
    provide_context(store);
    let ctx = AppContext::new(store);
    provide_context(ctx);
    leptos_swipe::bind_global_mouse(ctx.swipe, ctx.dispatch);

    load_catalog(store, config.data_source);

    // Auto-rotate; the deck ignores it in grid view, behind a modal or mid-gesture
    Interval::new(config.auto_rotate_ms as u32, move || {
        store_dispatch(&store, Command::AutoRotate);
    })
    .forget();

    let _ = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let Some(key) = KeyCommand::from_key(&ev.key()) else { return };
        if key != KeyCommand::Escape && is_typing(&ev) {
            return;
        }
        if store_dispatch(&store, Command::Key(key)).prevent_default {
            ev.prevent_default();
        }
    });

    let _ = window_event_listener(ev::resize, move |_| {
        if let Some(item_width) = measure_item_width() {
            store_dispatch(&store, Command::Resize { item_width });
        }
    });

    // Lock page scroll while a modal is open
    Effect::new(move |_| {
        let open = store.deck().read().is_modal_open();
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", if open { "hidden" } else { "auto" });
        }
    });

    track(&store, "page_view", json!({ "source": format!("{:?}", config.data_source) }));

    let is_carousel = move || store.deck().read().view() == ViewMode::Carousel;

    view! {
        <div class="app">
            <header class="header">
                <div class="logo">"SparkDeck"</div>
                <CategoryNav />
            </header>

            <main class="main-content">
                <section class="hero">
                    <h1>"Startup ideas, ready to explore"</h1>
                    <p>"Swipe through curated concepts, dig into the details, or pitch your own."</p>
                </section>

                <StatsBar />
                <Toolbar />

                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <div class="loading">"Loading ideas..."</div> }
                >
                    <Show when=is_carousel fallback=|| view! { <IdeaGrid /> }>
                        <Carousel />
                    </Show>
                </Show>

                <NewsletterForm />
            </main>

            <IdeaModal />
            <SubmitModal />
            <ToastStack />
        </div>
    }
}

/// Initial catalog and platform stats
fn load_catalog(store: AppStore, source: DataSource) {
    spawn_local(async move {
        *store.loading().write() = true;
        let ideas = match source {
            DataSource::Sample => sample_ideas().unwrap_or_else(|e| {
                log::error!("bundled catalog is unreadable: {}", e);
                fallback_ideas()
            }),
            DataSource::Api => commands::fetch_ideas(&IdeaQuery::default()).await,
        };
        log::info!("SparkDeck initialized with {} ideas", ideas.len());
        store.deck().write().load(ideas);
        *store.loading().write() = false;

        let stats = commands::fetch_stats().await;
        store.deck().write().set_platform_stats(stats);
    });
}

/// Key presses inside form fields belong to the field
fn is_typing(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}
