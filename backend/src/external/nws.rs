//! National Weather Service API client
//!
//! Resolves a point to its gridpoint forecast URL and timezone, then pulls the
//! raw gridpoint series the engine consumes.

use reqwest::Client;
use serde::Deserialize;
use shared::{ForecastInput, GpsCoordinates, GridForecast};

use crate::error::{AppError, AppResult};

/// NWS API client
#[derive(Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

/// What the `points` lookup tells us about a location
#[derive(Debug, Clone, PartialEq)]
pub struct PointMetadata {
    pub forecast_grid_data: String,
    pub time_zone: String,
}

#[derive(Debug, Deserialize)]
struct PointResponse {
    properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointProperties {
    forecast_grid_data: Option<String>,
    time_zone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GridpointResponse {
    properties: serde_json::Value,
}

impl NwsClient {
    pub fn new(base_url: String, user_agent: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent,
        }
    }

    /// URL of the `points` lookup for a coordinate pair
    pub fn points_url(&self, coords: &GpsCoordinates) -> String {
        format!("{}/points/{}", self.base_url, coords.nws_point())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(|e| AppError::ForecastUnavailable(format!("NWS request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ForecastUnavailable(format!(
                "NWS returned {} - {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ForecastUnavailable(format!("Failed to parse NWS response: {}", e)))
    }

    /// Look up the gridpoint forecast URL and local timezone for a point
    pub async fn get_point(&self, coords: &GpsCoordinates) -> AppResult<PointMetadata> {
        let data: PointResponse = self.get_json(&self.points_url(coords)).await?;
        point_metadata(data.properties)
    }

    /// Fetch the raw gridpoint series from a `forecastGridData` URL
    pub async fn get_grid_forecast(&self, grid_url: &str) -> AppResult<GridForecast> {
        let data: GridpointResponse = self.get_json(grid_url).await?;
        GridForecast::from_nws_properties(&data.properties).map_err(|e| {
            AppError::ForecastUnavailable(format!("Unexpected gridpoint layout: {}", e))
        })
    }

    /// Points lookup followed by the gridpoint fetch
    pub async fn fetch_forecast_input(&self, coords: &GpsCoordinates) -> AppResult<ForecastInput> {
        let point = self.get_point(coords).await?;
        tracing::debug!(grid = %point.forecast_grid_data, time_zone = %point.time_zone, "resolved NWS point");

        let forecast = self.get_grid_forecast(&point.forecast_grid_data).await?;

        Ok(ForecastInput {
            forecast,
            time_zone: point.time_zone,
            location: None,
        })
    }
}

fn point_metadata(properties: PointProperties) -> AppResult<PointMetadata> {
    let forecast_grid_data = properties.forecast_grid_data.ok_or_else(|| {
        AppError::ForecastUnavailable("location has no gridpoint forecast".to_string())
    })?;

    Ok(PointMetadata {
        forecast_grid_data,
        // An absent zone falls back to UTC inside the engine
        time_zone: properties.time_zone.unwrap_or_default(),
    })
}
