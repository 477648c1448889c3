//! Harvest log HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::harvest::{
    HarvestFilter, HarvestService, RecordHarvestInput, UpdateHarvestInput,
};
use crate::AppState;

/// List harvest logs, optionally for one cultivation
pub async fn list_harvests(
    State(state): State<AppState>,
    Query(filter): Query<HarvestFilter>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.get_harvests(&filter).await {
        Ok(harvests) => (StatusCode::OK, Json(serde_json::json!({ "harvests": harvests }))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific harvest log
pub async fn get_harvest(
    State(state): State<AppState>,
    Path(harvest_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.get_harvest(harvest_id).await {
        Ok(harvest) => (StatusCode::OK, Json(harvest)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record a new harvest
pub async fn record_harvest(
    State(state): State<AppState>,
    Json(input): Json<RecordHarvestInput>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.record_harvest(input).await {
        Ok(harvest) => (StatusCode::CREATED, Json(harvest)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a harvest log
pub async fn update_harvest(
    State(state): State<AppState>,
    Path(harvest_id): Path<Uuid>,
    Json(input): Json<UpdateHarvestInput>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.update_harvest(harvest_id, input).await {
        Ok(harvest) => (StatusCode::OK, Json(harvest)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a harvest log
pub async fn delete_harvest(
    State(state): State<AppState>,
    Path(harvest_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.delete_harvest(harvest_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
