//! Route definitions for the garden planner API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/gardens", garden_routes())
        .nest("/vegetables", vegetable_routes())
        .nest("/cultivations", cultivation_routes())
        .nest("/harvests", harvest_routes())
        .nest("/reports", report_routes())
}

/// Garden routes
fn garden_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_gardens).post(handlers::create_garden))
        .route(
            "/:garden_id",
            get(handlers::get_garden)
                .put(handlers::update_garden)
                .delete(handlers::delete_garden),
        )
}

/// Vegetable template routes
fn vegetable_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_vegetables).post(handlers::create_vegetable))
        .route(
            "/:vegetable_id",
            get(handlers::get_vegetable)
                .put(handlers::update_vegetable)
                .delete(handlers::delete_vegetable),
        )
        .route("/:vegetable_id/dimensioning", get(handlers::get_dimensioning))
}

/// Cultivation and calendar routes
fn cultivation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_cultivations).post(handlers::create_cultivation))
        // Static segments take priority over the id capture
        .route("/calendar", get(handlers::get_consolidated_calendar))
        .route("/weekly-tasks", get(handlers::get_weekly_tasks))
        .route(
            "/:cultivation_id",
            get(handlers::get_cultivation)
                .put(handlers::update_cultivation)
                .delete(handlers::delete_cultivation),
        )
        .route("/:cultivation_id/calendar", get(handlers::get_cultivation_calendar))
}

/// Harvest log routes
fn harvest_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_harvests).post(handlers::record_harvest))
        .route(
            "/:harvest_id",
            get(handlers::get_harvest)
                .put(handlers::update_harvest)
                .delete(handlers::delete_harvest),
        )
}

/// Efficiency report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_reports).post(handlers::create_report))
        .route(
            "/:report_id",
            get(handlers::get_report).delete(handlers::delete_report),
        )
}
