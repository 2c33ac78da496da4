use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::{Campaign, CampaignInput, StatusUpdate};
use tracing::info;

use super::ServerState;
use crate::errors::JsonApiError;

/// GET /campaigns: the whole collection in stored order.
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Campaign>>, JsonApiError> {
    let all = state.campaigns.list().await?;
    Ok(Json(all))
}

/// POST /campaigns: validate and insert, replacing a campaign with the same name.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CampaignInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.campaigns.create(input).await?;
    info!(name = %created.name, "create campaign request handled");
    Ok((StatusCode::CREATED, Json(Message::new("Campaign added!"))))
}

/// PUT /campaigns/{name}: change only the status.
pub async fn update_status(
    State(state): State<ServerState>,
    name: Result<Path<String>, PathRejection>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(name) = name?;
    let Json(update) = payload?;
    state.campaigns.apply_status_update(&name, update).await?;
    Ok(Json(Message::new("Status updated!")))
}

/// DELETE /campaigns/{name}: succeeds whether or not the name exists.
pub async fn delete(
    State(state): State<ServerState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(name) = name?;
    state.campaigns.delete(&name).await?;
    Ok(Json(Message::new("Campaign deleted!")))
}
