use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

/// Stacked toasts, newest at the bottom
#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-container">
            <For each=move || store.toasts().get() key=|toast| toast.id let:toast>
                <div class=toast.kind.class() role="status">
                    <span class="toast-message">{toast.message.clone()}</span>
                    <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, toast.id)>"×"</button>
                </div>
            </For>
        </div>
    }
}
