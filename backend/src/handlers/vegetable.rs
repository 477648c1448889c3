//! Vegetable template HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::vegetable::{CreateVegetableInput, UpdateVegetableInput, VegetableService};
use crate::AppState;

/// Query parameters for dimensioning
#[derive(Debug, Deserialize)]
pub struct DimensioningQuery {
    /// Desired weekly yield, parsed by the service
    pub desired: Option<String>,
}

/// List all vegetable templates
pub async fn list_vegetables(State(state): State<AppState>) -> impl IntoResponse {
    let service = VegetableService::new(state.db.clone());

    match service.get_vegetables().await {
        Ok(vegetables) => {
            (StatusCode::OK, Json(serde_json::json!({ "vegetables": vegetables }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Get a specific vegetable template
pub async fn get_vegetable(
    State(state): State<AppState>,
    Path(vegetable_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = VegetableService::new(state.db.clone());

    match service.get_vegetable(vegetable_id).await {
        Ok(vegetable) => (StatusCode::OK, Json(vegetable)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new vegetable template
pub async fn create_vegetable(
    State(state): State<AppState>,
    Json(input): Json<CreateVegetableInput>,
) -> impl IntoResponse {
    let service = VegetableService::new(state.db.clone());

    match service.create_vegetable(input).await {
        Ok(vegetable) => (StatusCode::CREATED, Json(vegetable)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a vegetable template
pub async fn update_vegetable(
    State(state): State<AppState>,
    Path(vegetable_id): Path<Uuid>,
    Json(input): Json<UpdateVegetableInput>,
) -> impl IntoResponse {
    let service = VegetableService::new(state.db.clone());

    match service.update_vegetable(vegetable_id, input).await {
        Ok(vegetable) => (StatusCode::OK, Json(vegetable)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a vegetable template
pub async fn delete_vegetable(
    State(state): State<AppState>,
    Path(vegetable_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = VegetableService::new(state.db.clone());

    match service.delete_vegetable(vegetable_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Modules and area needed for a desired weekly yield
pub async fn get_dimensioning(
    State(state): State<AppState>,
    Path(vegetable_id): Path<Uuid>,
    Query(query): Query<DimensioningQuery>,
) -> AppResult<impl IntoResponse> {
    let service = VegetableService::new(state.db.clone());
    let dimensioning = service
        .calculate_dimensioning(vegetable_id, query.desired.as_deref())
        .await?;
    Ok(Json(dimensioning))
}
