use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_core::deps::Deps;
use blog_core::domains::auth::TokenService;
use blog_core::server::build_app;
use blog_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting blog API server");

    let config = Config::from_env().context("Failed to load configuration")?;

    let tokens = TokenService::new(&config.session_secret, config.token_issuer.clone());
    let deps = match config.store_url.as_str() {
        "memory://" => Arc::new(Deps::in_memory(tokens)),
        other => bail!("unsupported store url {other}; only memory:// is compiled in"),
    };

    let app = build_app(deps);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
