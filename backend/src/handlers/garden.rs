//! Garden management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::garden::{CreateGardenInput, GardenService, UpdateGardenInput};
use crate::AppState;

/// List all gardens
pub async fn list_gardens(State(state): State<AppState>) -> impl IntoResponse {
    let service = GardenService::new(state.db.clone());

    match service.get_gardens().await {
        Ok(gardens) => (StatusCode::OK, Json(serde_json::json!({ "gardens": gardens }))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific garden
pub async fn get_garden(
    State(state): State<AppState>,
    Path(garden_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = GardenService::new(state.db.clone());

    match service.get_garden(garden_id).await {
        Ok(garden) => (StatusCode::OK, Json(garden)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new garden
pub async fn create_garden(
    State(state): State<AppState>,
    Json(input): Json<CreateGardenInput>,
) -> impl IntoResponse {
    let service = GardenService::new(state.db.clone());

    match service.create_garden(input).await {
        Ok(garden) => (StatusCode::CREATED, Json(garden)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a garden
pub async fn update_garden(
    State(state): State<AppState>,
    Path(garden_id): Path<Uuid>,
    Json(input): Json<UpdateGardenInput>,
) -> impl IntoResponse {
    let service = GardenService::new(state.db.clone());

    match service.update_garden(garden_id, input).await {
        Ok(garden) => (StatusCode::OK, Json(garden)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a garden
pub async fn delete_garden(
    State(state): State<AppState>,
    Path(garden_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = GardenService::new(state.db.clone());

    match service.delete_garden(garden_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
