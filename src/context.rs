//! Application Context
//!
//! Gesture plumbing shared by the carousel components via Leptos Context API.

use leptos::prelude::*;
use leptos_swipe::{create_swipe_signals, SwipeSignals};
use sparkdeck_core::{Command, DispatchOutcome};

use crate::store::{store_dispatch, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Deck command dispatcher handed to the swipe adapters
    pub dispatch: Callback<Command, DispatchOutcome>,
    pub swipe: SwipeSignals,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            dispatch: Callback::new(move |command| store_dispatch(&store, command)),
            swipe: create_swipe_signals(),
        }
    }

    pub fn dispatch(&self, command: Command) -> DispatchOutcome {
        self.dispatch.run(command)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
