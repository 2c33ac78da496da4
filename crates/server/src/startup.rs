use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::{runtime, storage::JsonFileStore, CampaignService};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {e}", cfg.bind_addr())))
}

/// Wire the file store, service, and router from config.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.server.frontend_dir).await;

    let store = JsonFileStore::new(cfg.storage.data_file.clone())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let campaigns = Arc::new(CampaignService::new(store));
    // a broken file is reported here but not fatal: requests get a 500 and the page stays up
    match campaigns.list().await {
        Ok(existing) => {
            info!(path = %cfg.storage.data_file.display(), count = existing.len(), "campaign store ready")
        }
        Err(e) => {
            error!(path = %cfg.storage.data_file.display(), err = %e, "campaign store unreadable; serving anyway")
        }
    }

    let state = ServerState { campaigns };
    Ok(routes::build_router(state, build_cors(), &cfg.server.frontend_dir))
}

/// Public entry: build the app and run the HTTP server until the process exits.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting campaign tracker");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
