//! Server Settings
//!
//! Defaults, overridden by `server.toml` in the working directory, then by
//! environment variables.

use std::{collections::HashMap, fs, path::PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// Directory served for everything outside `/api` and `/health`
    pub static_dir: PathBuf,
    /// JSON array of ideas backing the API
    pub ideas_file: PathBuf,
    /// `development` exposes error details in 500 responses
    pub environment: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            static_dir: PathBuf::from("dist"),
            ideas_file: PathBuf::from("public/assets/sample-ideas.json"),
            environment: "production".into(),
        }
    }
}

impl Settings {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string("server.toml").ok();
    resolve_settings(file.as_deref(), |key| std::env::var(key).ok())
}

/// Layer a `server.toml` body and an environment lookup over the defaults
pub fn resolve_settings(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.bind_addr = v.clone();
                }
                if let Some(v) = file_cfg.get("static_dir") {
                    settings.static_dir = PathBuf::from(v);
                }
                if let Some(v) = file_cfg.get("ideas_file") {
                    settings.ideas_file = PathBuf::from(v);
                }
                if let Some(v) = file_cfg.get("environment") {
                    settings.environment = v.clone();
                }
            }
            Err(e) => tracing::warn!("ignoring malformed server.toml: {}", e),
        }
    }

    if let Some(port) = env("PORT") {
        match port.parse::<u16>() {
            Ok(port) => settings.bind_addr = format!("0.0.0.0:{}", port),
            Err(_) => tracing::warn!("ignoring invalid PORT '{}'", port),
        }
    }
    if let Some(v) = env("SPARKDECK_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("SPARKDECK_STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }
    if let Some(v) = env("SPARKDECK_IDEAS_FILE") {
        settings.ideas_file = PathBuf::from(v);
    }
    if let Some(v) = env("SPARKDECK_ENV") {
        settings.environment = v;
    }

    settings
}
