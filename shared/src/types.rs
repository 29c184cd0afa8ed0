//! Common types used across the planner

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// NWS only accepts point queries with up to four decimal places.
const NWS_COORDINATE_PRECISION: u32 = 4;

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Coordinates rounded for the NWS `points` endpoint, formatted `lat,lon`
    pub fn nws_point(&self) -> String {
        format!(
            "{},{}",
            self.latitude.round_dp(NWS_COORDINATE_PRECISION).normalize(),
            self.longitude.round_dp(NWS_COORDINATE_PRECISION).normalize()
        )
    }

    /// Link to the human-readable NWS graphical point forecast
    pub fn point_forecast_url(&self) -> String {
        format!(
            "https://forecast.weather.gov/MapClick.php?lat={}&lon={}&unit=0&lg=english&FcstType=graphical",
            self.latitude.normalize(),
            self.longitude.normalize()
        )
    }
}

/// Reverse-geocoded place name shown next to an evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationLabel {
    pub county: String,
    pub state: String,
}

impl Default for LocationLabel {
    fn default() -> Self {
        Self {
            county: "Unknown County".to_string(),
            state: "Unknown State".to_string(),
        }
    }
}

impl std::fmt::Display for LocationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.county, self.state)
    }
}
