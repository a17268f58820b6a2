use anyhow::Context;
use moviepick_server::config::AppConfig;
use moviepick_server::routes::build_router;
use moviepick_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; the process environment wins.
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = AppState::from_config(&config).context("failed to build TMDB client")?;
    info!(
        provider = state.provider.name(),
        base_url = %config.tmdb_base_url,
        image_base = state.images.as_str(),
        language = %config.language,
        timeout_secs = config.request_timeout.as_secs(),
        "metadata provider configured"
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("failed to bind")?;
    info!(addr = %config.bind_addr, origin = ?config.frontend_origin, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
