//! Idea Card Component
//!
//! One card from a `CardView`; shared by the carousel track and the grid.

use leptos::prelude::*;
use leptos_swipe::should_swallow_click;
use serde_json::json;
use sparkdeck_core::render::CardView;
use sparkdeck_core::Command;

use crate::analytics::track;
use crate::context::use_app_context;
use crate::store::use_app_store;

#[component]
pub fn IdeaCard(card: CardView, #[prop(optional)] grid: bool) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let index = card.index;
    let id = card.id;
    let title = card.title.clone();
    let header_style = card.header_style();
    let class = match (grid, card.active) {
        (true, _) => "idea-card grid-item",
        (false, true) => "idea-card active",
        (false, false) => "idea-card",
    };

    let open_detail = move |_| {
        // the click that ends a swipe is not a tap
        if should_swallow_click(&ctx.swipe) {
            return;
        }
        ctx.dispatch(Command::OpenDetailById(id));
        track(&store, "idea_view", json!({ "idea_id": id }));
    };

    let visit = card.demo_url.clone().map(|url| {
        let title = title.clone();
        view! {
            <button
                class="visit-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    track(&store, "idea_visit", json!({ "idea_id": id, "idea_title": title }));
                    if let Ok(None) | Err(_) = window().open_with_url_and_target(&url, "_blank") {
                        log::warn!("could not open demo {}", url);
                    }
                }
            >
                <i class="fas fa-external-link-alt"></i>
                " Visit Demo"
            </button>
        }
    });

    view! {
        <div class=class data-index=index.to_string() on:click=open_detail>
            <div class="card-header" style=header_style>
                {card.icon.map(|icon| view! { <i class=format!("card-icon {}", icon)></i> })}
                <div class="card-category">{card.category_label}</div>
                <h3 class="card-title">{card.title}</h3>
                <p class="card-subtitle">{card.subtitle}</p>
            </div>
            <div class="card-body">
                <p class="card-description">{card.description}</p>
                <ul class="card-features">
                    {card.features.into_iter().map(|feature| view! {
                        <li><i class="fas fa-check"></i>" "{feature}</li>
                    }).collect_view()}
                </ul>
            </div>
            <div class="card-footer">
                <div class="card-meta">
                    <div class="meta-item">
                        <i class="fas fa-star"></i>
                        <span>{card.rating_label}</span>
                    </div>
                    <div class="meta-item">
                        <i class="fas fa-code-branch"></i>
                        <span>{card.complexity_label}</span>
                    </div>
                    <div class="meta-item">
                        <i class="fas fa-clock"></i>
                        <span>{card.created_label}</span>
                    </div>
                </div>
                {visit}
            </div>
        </div>
    }
}
