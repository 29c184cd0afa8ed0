//! HTTP handlers for saved burn plans

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::BurnPlanSettings;

use crate::error::AppResult;
use crate::services::{settings::SavedBurnPlan, SettingsService};
use crate::AppState;

pub async fn list_plans(State(state): State<AppState>) -> AppResult<Json<Vec<SavedBurnPlan>>> {
    let service = SettingsService::new(state.db);
    let plans = service.list_plans().await?;
    Ok(Json(plans))
}

pub async fn get_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<SavedBurnPlan>> {
    let service = SettingsService::new(state.db);
    let plan = service.get_plan(&name).await?;
    Ok(Json(plan))
}

/// Create or overwrite a plan
pub async fn save_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(settings): Json<BurnPlanSettings>,
) -> AppResult<Json<SavedBurnPlan>> {
    let service = SettingsService::new(state.db);
    let plan = service.save_plan(&name, settings).await?;
    Ok(Json(plan))
}

pub async fn delete_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    let service = SettingsService::new(state.db);
    service.delete_plan(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
