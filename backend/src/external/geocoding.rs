//! Nominatim reverse geocoding for county/state labels

use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, LocationLabel};

use crate::error::{AppError, AppResult};

/// Reverse geocoding client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    user_agent: String,
    enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: ReverseAddress,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    county: Option<String>,
    state: Option<String>,
}

impl GeocodingClient {
    pub fn new(base_url: String, user_agent: String, enabled: bool) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent,
            enabled,
        }
    }

    async fn reverse(&self, coords: &GpsCoordinates) -> AppResult<LocationLabel> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=8&addressdetails=1",
            self.base_url,
            coords.latitude.normalize(),
            coords.longitude.normalize()
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "Geocoding returned {}",
                response.status()
            )));
        }

        let data: ReverseResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to parse geocoding response: {}", e)))?;

        Ok(label_from_address(data.address))
    }

    /// County/state for a point. Never fails; any problem yields the default label.
    pub async fn location_label(&self, coords: &GpsCoordinates) -> LocationLabel {
        if !self.enabled {
            return LocationLabel::default();
        }

        match self.reverse(coords).await {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!("Reverse geocoding failed, using default label: {}", e);
                LocationLabel::default()
            }
        }
    }
}

fn label_from_address(address: ReverseAddress) -> LocationLabel {
    let default = LocationLabel::default();
    LocationLabel {
        county: address.county.unwrap_or(default.county),
        state: address.state.unwrap_or(default.state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_full_address() {
        let body = serde_json::json!({
            "display_name": "Riley County, Kansas, United States",
            "address": { "county": "Riley County", "state": "Kansas", "country": "United States" }
        });
        let data: ReverseResponse = serde_json::from_value(body).unwrap();
        let label = label_from_address(data.address);
        assert_eq!(label.to_string(), "Riley County, Kansas");
    }

    #[test]
    fn test_missing_parts_use_defaults() {
        let body = serde_json::json!({ "address": { "state": "Kansas" } });
        let data: ReverseResponse = serde_json::from_value(body).unwrap();
        assert_eq!(label_from_address(data.address).to_string(), "Unknown County, Kansas");

        let empty: ReverseResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(label_from_address(empty.address), LocationLabel::default());
    }
}
