//! Server binary: loads settings, opens the store, ensures the tables and serves the API until Ctrl-C.

use purchase_tracker::{app, connect, initialize_schema, routes::docs::DOCS_PATH, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("purchase_tracker=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database).await?;
    initialize_schema(&pool, config.schema_init).await?;

    let router = app(AppState::new(pool.clone()), config.max_body_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!("listening on {}", addr);
    tracing::info!("API documentation at http://{}{}", addr, DOCS_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
