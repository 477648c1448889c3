//! Cultivation management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::cultivation::{
    CreateCultivationInput, CultivationFilter, CultivationService, UpdateCultivationInput,
};
use crate::AppState;

/// List cultivations, optionally for one garden
pub async fn list_cultivations(
    State(state): State<AppState>,
    Query(filter): Query<CultivationFilter>,
) -> impl IntoResponse {
    let service = CultivationService::new(state.db.clone());

    match service.get_cultivations(&filter).await {
        Ok(cultivations) => {
            (StatusCode::OK, Json(serde_json::json!({ "cultivations": cultivations })))
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Get a specific cultivation
pub async fn get_cultivation(
    State(state): State<AppState>,
    Path(cultivation_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = CultivationService::new(state.db.clone());

    match service.get_cultivation(cultivation_id).await {
        Ok(cultivation) => (StatusCode::OK, Json(cultivation)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new cultivation
pub async fn create_cultivation(
    State(state): State<AppState>,
    Json(input): Json<CreateCultivationInput>,
) -> impl IntoResponse {
    let service = CultivationService::new(state.db.clone());

    match service.create_cultivation(input).await {
        Ok(cultivation) => (StatusCode::CREATED, Json(cultivation)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a cultivation
pub async fn update_cultivation(
    State(state): State<AppState>,
    Path(cultivation_id): Path<Uuid>,
    Json(input): Json<UpdateCultivationInput>,
) -> impl IntoResponse {
    let service = CultivationService::new(state.db.clone());

    match service.update_cultivation(cultivation_id, input).await {
        Ok(cultivation) => (StatusCode::OK, Json(cultivation)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a cultivation
pub async fn delete_cultivation(
    State(state): State<AppState>,
    Path(cultivation_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = CultivationService::new(state.db.clone());

    match service.delete_cultivation(cultivation_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
