//! Calendar and weekly task HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::CalendarService;
use crate::AppState;

/// Query parameters for the weekly task list
#[derive(Debug, Deserialize)]
pub struct WeeklyTasksQuery {
    /// Any date inside the wanted week; defaults to today
    pub week_of: Option<String>,
    pub format: Option<String>, // "json" or "csv"
}

/// Calendar of a single cultivation
pub async fn get_cultivation_calendar(
    State(state): State<AppState>,
    Path(cultivation_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let service = CalendarService::new(state.db.clone());
    let windows = service.get_cultivation_calendar(cultivation_id).await?;
    Ok(Json(serde_json::json!({ "windows": windows })))
}

/// Calendar across every cultivation
pub async fn get_consolidated_calendar(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let service = CalendarService::new(state.db.clone());
    let windows = service.get_consolidated_calendar().await?;
    Ok(Json(serde_json::json!({ "windows": windows })))
}

/// Planting and harvest tasks of one week
pub async fn get_weekly_tasks(
    State(state): State<AppState>,
    Query(query): Query<WeeklyTasksQuery>,
) -> AppResult<impl IntoResponse> {
    let week_start = state
        .config
        .planning
        .week_start_day()
        .map_err(|e| AppError::Configuration(e.to_string()))?;
    let today = Local::now().date_naive();

    let service = CalendarService::new(state.db.clone());
    let weekly = service
        .get_weekly_tasks(query.week_of.as_deref(), week_start, today)
        .await?;

    if query.format.as_deref() == Some("csv") {
        let csv = CalendarService::export_to_csv(&weekly.tasks)?;
        let disposition = format!(
            "attachment; filename=\"tarefas_{}.csv\"",
            weekly.week.start.format("%Y-%m-%d")
        );
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(weekly).into_response())
    }
}
