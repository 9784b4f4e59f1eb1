use earnhub::{build_router, config::Config, AppContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Hashes the demo password once, up front
    let ctx = AppContext::new(config)?;
    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("EarnHub demo listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
