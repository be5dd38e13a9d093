//! Newsletter Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::analytics::track;
use crate::commands;
use crate::models::ToastKind;
use crate::store::{store_push_toast, use_app_store};

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let subscribe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        set_sending.set(true);
        spawn_local(async move {
            let result = commands::subscribe_newsletter(&address)
                .await
                .and_then(|resp| if resp.success { Ok(resp) } else { Err(resp.message) });
            match result {
                Ok(resp) => {
                    let message = if resp.message.is_empty() {
                        "Successfully subscribed to newsletter!".to_string()
                    } else {
                        resp.message
                    };
                    store_push_toast(&store, ToastKind::Success, message);
                    set_email.set(String::new());
                    track(&store, "newsletter_subscribed", json!({}));
                }
                Err(e) => {
                    log::warn!("newsletter subscription failed: {}", e);
                    store_push_toast(&store, ToastKind::Error, format!("Could not subscribe: {}", e));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <section class="newsletter">
            <h2>"Get new ideas in your inbox"</h2>
            <form class="newsletter-form" on:submit=subscribe>
                <input
                    type="email"
                    placeholder="you@example.com"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || sending.get()>"Subscribe"</button>
            </form>
        </section>
    }
}
