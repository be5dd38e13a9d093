//! Analytics
//!
//! Events are only logged to the console; there is no collection backend.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use leptos::prelude::*;

use crate::store::{AppStore, AppStateStoreFields};

/// Log `name` with its properties when analytics are enabled
pub fn track_event(enabled: bool, name: &str, props: Value) {
    if !enabled {
        return;
    }
    log::info!("event tracked: {} {}", name, props);
    let props = props
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL);
    web_sys::console::debug_2(&JsValue::from_str(name), &props);
}

/// `track_event` gated on the deck's `enable_analytics` setting
pub fn track(store: &AppStore, name: &str, props: Value) {
    let enabled = store.deck().read_untracked().config().enable_analytics;
    track_event(enabled, name, props);
}
