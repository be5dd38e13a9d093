use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let settings = sparkdeck_server::load_settings();
    tracing::info!("environment: {}", settings.environment);
    sparkdeck_server::run(settings).await.context("server exited with error")
}
