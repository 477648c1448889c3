//! Efficiency report HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::report::{CreateReportInput, ReportFilter, ReportService};
use crate::AppState;

/// List efficiency reports, optionally for one garden
pub async fn list_reports(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.db.clone());
    let reports = service.get_reports(&filter).await?;
    Ok(Json(serde_json::json!({ "reports": reports })))
}

/// Get a specific report
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.db.clone());
    let report = service.get_report(report_id).await?;
    Ok(Json(report))
}

/// Create a report for a garden
pub async fn create_report(
    State(state): State<AppState>,
    Json(input): Json<CreateReportInput>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.db.clone());
    let report = service.create_report(input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Delete a report
pub async fn delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.db.clone());
    service.delete_report(report_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
