pub mod campaigns;

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use service::CampaignService;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::{metrics, types::Health};

use crate::ui;

#[derive(Clone)]
pub struct ServerState {
    pub campaigns: Arc<CampaignService>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the application router: UI page, campaign API, health and metrics.
/// Extra assets under `frontend_dir` are served at `/static`.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let public = Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .nest_service("/static", ServeDir::new(frontend_dir));

    // `*name` keeps names containing `/` (sent as %2F) in one segment, decoded
    let api = Router::new()
        .route("/campaigns", get(campaigns::list).post(campaigns::create))
        .route(
            "/campaigns/*name",
            axum::routing::put(campaigns::update_status).delete(campaigns::delete),
        )
        .with_state(state);

    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
