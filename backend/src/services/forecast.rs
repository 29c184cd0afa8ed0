//! Forecast evaluation service
//!
//! Gathers a forecast (from NWS or the caller), checks the prescription and
//! hands both to the shared engine.

use shared::{
    evaluate_forecast, validate_prescription, ForecastEvaluation, ForecastInput, GpsCoordinates,
    LocationLabel, Prescription,
};

use crate::error::AppResult;
use crate::external::{GeocodingClient, NwsClient};

/// Forecast service
#[derive(Clone)]
pub struct ForecastService {
    nws: NwsClient,
    geocoder: GeocodingClient,
}

impl ForecastService {
    pub fn new(nws: NwsClient, geocoder: GeocodingClient) -> Self {
        Self { nws, geocoder }
    }

    /// Fetch the NWS forecast for a point and evaluate it.
    ///
    /// The prescription is checked before any request goes out.
    pub async fn evaluate_location(
        &self,
        coords: GpsCoordinates,
        prescription: &Prescription,
        property_name: Option<&str>,
    ) -> AppResult<ForecastEvaluation> {
        validate_prescription(prescription)?;

        let mut input = self.nws.fetch_forecast_input(&coords).await?;
        let label = self.geocoder.location_label(&coords).await;
        input.location = Some(location_text(property_name, &label));

        tracing::info!(
            point = %coords.nws_point(),
            location = input.location.as_deref().unwrap_or_default(),
            "Evaluating NWS forecast"
        );

        Ok(evaluate_forecast(&input, prescription)?)
    }

    /// Evaluate a forecast the caller already has
    pub fn evaluate_payload(
        &self,
        input: &ForecastInput,
        prescription: &Prescription,
    ) -> AppResult<ForecastEvaluation> {
        validate_prescription(prescription)?;
        Ok(evaluate_forecast(input, prescription)?)
    }
}

/// Label shown above the calendar, e.g. `North Pasture (Riley County, Kansas)`
pub fn location_text(property_name: Option<&str>, label: &LocationLabel) -> String {
    match property_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{} ({})", name, label),
        None => label.to_string(),
    }
}
