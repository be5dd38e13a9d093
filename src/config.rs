//! Page Configuration
//!
//! Reads `DeckConfig` from the `<script id="sparkdeck-config">` JSON block in
//! `index.html`. Missing block or keys fall back to defaults.

use sparkdeck_core::DeckConfig;

const CONFIG_ELEMENT_ID: &str = "sparkdeck-config";

pub fn load_config() -> DeckConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => DeckConfig::from_json(&raw).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[config] ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
            DeckConfig::default()
        }),
        _ => DeckConfig::default(),
    }
}
