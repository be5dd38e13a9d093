//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The `deck` field
//! is the single source of truth for catalog, index and gesture state; it is
//! only mutated through [`store_dispatch`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use sparkdeck_core::{Clock, Command, Deck, DispatchOutcome};

use crate::models::{Toast, ToastKind};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub deck: Deck,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Catalog fetch in flight
    pub loading: bool,
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// `Date.now()` as the deck clock
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

// ========================
// Store Helper Functions
// ========================

/// Run a command against the deck, arming the animation timer if asked to
pub fn store_dispatch(store: &AppStore, command: Command) -> DispatchOutcome {
    let outcome = store.deck().write().dispatch(command, &BrowserClock);
    if let Some(ms) = outcome.tick_after_ms {
        let store = *store;
        Timeout::new(ms as u32, move || {
            store_dispatch(&store, Command::Tick);
        })
        .forget();
    }
    outcome
}

/// Show a toast and schedule its removal
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });

    let toast_ms = store.deck().read_untracked().config().toast_ms;
    let store = *store;
    Timeout::new(toast_ms as u32, move || store_dismiss_toast(&store, id)).forget();
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
