use axum::{extract::State, Json};
use std::sync::Arc;

use crate::models::MapStatus;
use crate::services::map_status::map_status;
use crate::services::AppState;

pub async fn get_map_status(State(state): State<Arc<AppState>>) -> Json<MapStatus> {
    let status = map_status(state.config.maps_api_key.as_deref());
    tracing::debug!(status = ?status.status, key = ?status.key, "map status checked");
    Json(status)
}
