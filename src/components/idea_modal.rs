//! Idea Detail Modal
//!
//! Full detail of the current idea. Prev/next step through the filtered
//! sequence without touching the carousel animation.

use leptos::prelude::*;
use sparkdeck_core::Command;

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn IdeaModal() -> impl IntoView {
    let store = use_app_store();
    let detail = Memo::new(move |_| store.deck().read().detail());
    let close = move || {
        store_dispatch(&store, Command::CloseModal);
    };

    view! {
        {move || detail.get().map(|d| {
            let nav = d.show_navigation;
            view! {
                <div class="modal active" on:click=move |_| close()>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" title="Close" on:click=move |_| close()>"×"</button>

                        <div class="idea-detail">
                            <div class="detail-header" style=format!("background: {}", d.color)>
                                <div class="detail-category">{d.category_label}</div>
                                <h2>{d.title}</h2>
                                <p class="detail-subtitle">{d.subtitle}</p>
                                <div class="detail-meta">
                                    <span class="meta-item"><i class="fas fa-star"></i>" "{d.rating_label}</span>
                                    <span class="meta-item"><i class="fas fa-code-branch"></i>" "{d.complexity_label}</span>
                                    <span class="meta-item"><i class="fas fa-calendar"></i>" "{d.created_label}</span>
                                    {d.pending.then(|| view! { <span class="badge pending">"Pending review"</span> })}
                                </div>
                            </div>
                            <div class="detail-content">
                                <div class="detail-section">
                                    <h3><i class="fas fa-info-circle"></i>" Description"</h3>
                                    <p>{d.description}</p>
                                </div>
                                <div class="detail-section">
                                    <h3><i class="fas fa-exclamation-circle"></i>" Problem Statement"</h3>
                                    <p>{d.problem}</p>
                                </div>
                                <div class="detail-section">
                                    <h3><i class="fas fa-lightbulb"></i>" Solution"</h3>
                                    <p>{d.solution}</p>
                                </div>
                                <div class="detail-section">
                                    <h3><i class="fas fa-list-check"></i>" Key Features"</h3>
                                    <ul class="feature-list">
                                        {d.features.into_iter().map(|f| view! {
                                            <li><i class="fas fa-check"></i>" "{f}</li>
                                        }).collect_view()}
                                    </ul>
                                </div>
                                <div class="detail-section">
                                    <h3><i class="fas fa-tags"></i>" Tags"</h3>
                                    <div class="tags-container">
                                        {d.tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="modal-footer">
                            <Show when=move || nav>
                                <button class="modal-nav-btn" title="Previous idea"
                                    on:click=move |_| { store_dispatch(&store, Command::DetailPrev); }>
                                    "‹"
                                </button>
                            </Show>
                            {d.demo_url.map(|url| view! {
                                <a class="visit-page-btn" href=url target="_blank" rel="noopener">
                                    <i class="fas fa-external-link-alt"></i>" Visit Demo Page"
                                </a>
                            })}
                            <Show when=move || nav>
                                <button class="modal-nav-btn" title="Next idea"
                                    on:click=move |_| { store_dispatch(&store, Command::DetailNext); }>
                                    "›"
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
