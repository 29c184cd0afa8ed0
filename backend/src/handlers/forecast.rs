//! HTTP handlers for forecast evaluation endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use serde::{Deserialize, Serialize};
use shared::{
    validate_coordinates, ForecastEvaluation, ForecastInput, GpsCoordinates, GridForecast,
    Prescription,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::{export_to_csv, ForecastService};
use crate::AppState;

/// Evaluate the live NWS forecast for a point
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateLocationRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
    pub prescription: Prescription,
    #[validate(length(min = 1, max = 100, message = "Property name must be 1-100 characters"))]
    pub property_name: Option<String>,
}

/// Evaluate a forecast supplied by the caller
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePayloadRequest {
    /// Gridpoint `properties` object; unknown keys are ignored
    pub forecast: serde_json::Value,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub location: Option<String>,
    pub prescription: Prescription,
}

impl EvaluatePayloadRequest {
    fn into_parts(self) -> AppResult<(ForecastInput, Prescription)> {
        let forecast = GridForecast::from_nws_properties(&self.forecast).map_err(|e| {
            AppError::Validation {
                field: "forecast".to_string(),
                message: e.to_string(),
            }
        })?;
        let input = ForecastInput {
            forecast,
            time_zone: self.time_zone,
            location: self.location,
        };
        Ok((input, self.prescription))
    }
}

#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ForecastLink {
    pub url: String,
}

fn forecast_service(state: &AppState) -> ForecastService {
    ForecastService::new(state.nws.clone(), state.geocoder.clone())
}

pub async fn evaluate_location(
    State(state): State<AppState>,
    Json(input): Json<EvaluateLocationRequest>,
) -> AppResult<Json<ForecastEvaluation>> {
    input.validate()?;

    let coords = GpsCoordinates::new(
        Decimal::from_f64(input.latitude)
            .ok_or_else(|| AppError::ValidationError("Invalid latitude".to_string()))?,
        Decimal::from_f64(input.longitude)
            .ok_or_else(|| AppError::ValidationError("Invalid longitude".to_string()))?,
    );

    let evaluation = forecast_service(&state)
        .evaluate_location(coords, &input.prescription, input.property_name.as_deref())
        .await?;
    Ok(Json(evaluation))
}

pub async fn evaluate_payload(
    State(state): State<AppState>,
    Json(request): Json<EvaluatePayloadRequest>,
) -> AppResult<Json<ForecastEvaluation>> {
    let (input, prescription) = request.into_parts()?;
    let evaluation = forecast_service(&state).evaluate_payload(&input, &prescription)?;
    Ok(Json(evaluation))
}

/// Same body as `evaluate_payload`, answered with CSV
pub async fn export_csv(
    State(state): State<AppState>,
    Json(request): Json<EvaluatePayloadRequest>,
) -> AppResult<impl IntoResponse> {
    let (input, prescription) = request.into_parts()?;
    let evaluation = forecast_service(&state).evaluate_payload(&input, &prescription)?;
    let csv = export_to_csv(&evaluation.records)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"burn-window.csv\"",
            ),
        ],
        csv,
    ))
}

/// Link to the NWS point forecast page for the same location
pub async fn forecast_link(Query(query): Query<LinkQuery>) -> AppResult<Json<ForecastLink>> {
    let latitude = query.latitude.to_f64().unwrap_or(f64::NAN);
    let longitude = query.longitude.to_f64().unwrap_or(f64::NAN);
    validate_coordinates(latitude, longitude)
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    let coords = GpsCoordinates::new(query.latitude, query.longitude);
    Ok(Json(ForecastLink {
        url: coords.point_forecast_url(),
    }))
}
