//! SparkDeck Server
//!
//! Layered architecture:
//! - config: settings from defaults, `server.toml` and the environment
//! - repository: read-only access to the ideas file
//! - routes: axum handlers for `/api` and `/health`
//!
//! Everything else is served from the static directory with an
//! `index.html` fallback for client-side routes.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use sparkdeck_core::DomainError;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod repository;
mod routes;

pub use config::{load_settings, Settings};
use error::ApiError;
use repository::{IdeaRepository, JsonIdeaRepository};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
    script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; \
    font-src 'self' https://fonts.gstatic.com; \
    img-src 'self' data: https:; \
    connect-src 'self'";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn IdeaRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let repo = JsonIdeaRepository::new(settings.ideas_file.clone());
        Self {
            repo: Arc::new(repo),
            settings: Arc::new(settings),
        }
    }

    pub(crate) fn api_error(&self, err: DomainError) -> ApiError {
        ApiError::from_domain(err, self.settings.is_development())
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.settings.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/ideas", get(routes::list_ideas))
        .route("/api/ideas/submit", post(routes::submit_idea))
        .route("/api/ideas/{id}", get(routes::get_idea))
        .route("/api/stats", get(routes::get_stats))
        .route("/api/newsletter/subscribe", post(routes::subscribe_newsletter))
        .route("/health", get(routes::health))
        .fallback_service(spa)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let bind_addr = settings.bind_addr.clone();
    let static_dir = settings.static_dir.clone();
    let app = build_router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("SparkDeck listening on {}", listener.local_addr()?);
    tracing::info!("serving static files from {}", static_dir.display());
    axum::serve(listener, app).await?;
    Ok(())
}
