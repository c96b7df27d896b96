use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::EmployeeStore;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by process exit");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: connect the pool, bootstrap the schema, and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let static_assets = common::env::ensure_web_root(&cfg.server.web_root).await;
    info!(web_root = %cfg.server.web_root, static_assets, "static file fallback configured");

    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("employees schema ready");

    let state = ServerState { store: EmployeeStore::new(db) };
    let app: Router = routes::build_router(state, routes::build_cors(), &cfg.server.web_root);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    let local = listener.local_addr().map_err(StartupError::Serve)?;
    info!(%local, "server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;
    Ok(())
}
