//! Route definitions for the Rx Burn Weather Planner

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/forecast", forecast_routes())
        .nest("/plans", plan_routes())
}

/// Forecast evaluation routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(handlers::evaluate_location))
        .route("/evaluate/payload", post(handlers::evaluate_payload))
        .route("/export", post(handlers::export_csv))
        .route("/link", get(handlers::forecast_link))
}

/// Saved burn plan routes
fn plan_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::list_plans)).route(
        "/:name",
        get(handlers::get_plan)
            .put(handlers::save_plan)
            .delete(handlers::delete_plan),
    )
}
