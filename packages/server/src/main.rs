use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = server::database::init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    info!("Database connected");

    let store = server::storage::init_store(&config.storage)
        .await
        .context("Failed to initialize object storage")?;
    info!(bucket = %config.storage.bucket, "Object storage ready");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState { db, store, config };
    let app = server::build_router(state);

    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
