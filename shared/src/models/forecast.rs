//! Gridded forecast models
//!
//! The NWS gridpoint forecast delivers each quantity as its own sparse series
//! of `validTime`/`value` pairs. These types carry that payload from the raw
//! form, through the merged hourly timeline, to display units.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Every forecast quantity the planner understands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ForecastField {
    Temperature,
    Dewpoint,
    RelativeHumidity,
    WindSpeed,
    WindDirection,
    SkyCover,
    ProbabilityOfPrecipitation,
    MixingHeight,
    TransportWindSpeed,
    TransportWindDirection,
}

impl ForecastField {
    pub const ALL: [ForecastField; 10] = [
        ForecastField::Temperature,
        ForecastField::Dewpoint,
        ForecastField::RelativeHumidity,
        ForecastField::WindSpeed,
        ForecastField::WindDirection,
        ForecastField::SkyCover,
        ForecastField::ProbabilityOfPrecipitation,
        ForecastField::MixingHeight,
        ForecastField::TransportWindSpeed,
        ForecastField::TransportWindDirection,
    ];

    /// Property name used by the NWS gridpoint payload
    pub fn nws_key(&self) -> &'static str {
        match self {
            ForecastField::Temperature => "temperature",
            ForecastField::Dewpoint => "dewpoint",
            ForecastField::RelativeHumidity => "relativeHumidity",
            ForecastField::WindSpeed => "windSpeed",
            ForecastField::WindDirection => "windDirection",
            ForecastField::SkyCover => "skyCover",
            ForecastField::ProbabilityOfPrecipitation => "probabilityOfPrecipitation",
            ForecastField::MixingHeight => "mixingHeight",
            ForecastField::TransportWindSpeed => "transportWindSpeed",
            ForecastField::TransportWindDirection => "transportWindDirection",
        }
    }
}

impl std::fmt::Display for ForecastField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nws_key())
    }
}

/// One run-length-encoded tuple: `validTime` is `<start>/<ISO-8601 duration>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    pub valid_time: String,
    pub value: Option<f64>,
}

impl RawSample {
    pub fn new(valid_time: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            valid_time: valid_time.into(),
            value,
        }
    }
}

/// A single forecast quantity as delivered by the gridpoint endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawFieldSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(default)]
    pub values: Vec<RawSample>,
}

impl RawFieldSeries {
    pub fn new(values: Vec<RawSample>) -> Self {
        Self { uom: None, values }
    }
}

/// Gridded forecast keyed by field; absent fields are simply missing.
///
/// Deserializes from a gridpoint `properties` object, so unknown keys are
/// skipped the same way [`GridForecast::from_nws_properties`] skips them.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct GridForecast {
    pub series: BTreeMap<ForecastField, RawFieldSeries>,
}

impl GridForecast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, field: ForecastField, series: RawFieldSeries) -> Self {
        self.series.insert(field, series);
        self
    }

    /// Pick the known fields out of an NWS gridpoint `properties` object.
    ///
    /// Unknown properties (`@id`, `elevation`, weather text, ...) are ignored.
    pub fn from_nws_properties(properties: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut series = BTreeMap::new();
        for field in ForecastField::ALL {
            if let Some(raw) = properties.get(field.nws_key()) {
                let parsed: RawFieldSeries = serde_json::from_value(raw.clone())?;
                series.insert(field, parsed);
            }
        }
        Ok(Self { series })
    }
}

impl<'de> Deserialize<'de> for GridForecast {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let properties = serde_json::Value::deserialize(deserializer)?;
        if !properties.is_object() {
            return Err(de::Error::custom("forecast must be an object of gridpoint properties"));
        }
        Self::from_nws_properties(&properties).map_err(de::Error::custom)
    }
}

/// Everything the engine needs from the fetch collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    pub forecast: GridForecast,
    /// IANA timezone identifier, e.g. `America/Chicago`
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// A single hour produced by expanding one raw tuple
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HourlySample {
    pub instant: DateTime<Utc>,
    pub value: Option<f64>,
}

/// All fields observed at one hour-aligned instant.
///
/// A field that did not cover the hour has no key; a field that covered it
/// with a null value maps to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedRecord {
    pub instant: DateTime<Utc>,
    pub fields: BTreeMap<ForecastField, Option<f64>>,
}

impl MergedRecord {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            fields: BTreeMap::new(),
        }
    }

    /// Raw value of a field, flattening "absent" and "null" together
    pub fn value(&self, field: ForecastField) -> Option<f64> {
        self.fields.get(&field).copied().flatten()
    }
}

/// A merged record in display units and local time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub instant: DateTime<Utc>,
    pub local_time: String,
    pub local_date: NaiveDate,
    pub local_hour: u32,
    pub temperature_f: Option<i64>,
    pub dewpoint_f: Option<i64>,
    pub relative_humidity: Option<f64>,
    pub wind_speed_mph: Option<i64>,
    pub wind_direction_deg: Option<f64>,
    pub sky_cover: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub mixing_height_ft: Option<i64>,
    pub transport_wind_speed_mph: Option<i64>,
    pub transport_wind_direction_deg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_forecast_skips_unknown_properties() {
        let json = r#"{
            "@id": "https://api.weather.gov/gridpoints/TOP/31,80",
            "elevation": {"unitCode": "wmoUnit:m", "value": 325.8},
            "maxTemperature": {"uom": "wmoUnit:degC", "values": []},
            "temperature": {
                "uom": "wmoUnit:degC",
                "values": [{"validTime": "2024-04-10T15:00:00+00:00/PT2H", "value": 20}]
            }
        }"#;

        let grid: GridForecast = serde_json::from_str(json).unwrap();

        assert_eq!(grid.series.len(), 1);
        assert_eq!(grid.series[&ForecastField::Temperature].values.len(), 1);
    }

    #[test]
    fn test_grid_forecast_must_be_an_object() {
        assert!(serde_json::from_str::<GridForecast>("[]").is_err());
    }

    #[test]
    fn test_grid_forecast_serializes_by_nws_key() {
        let grid = GridForecast::new().with_series(
            ForecastField::ProbabilityOfPrecipitation,
            RawFieldSeries::new(vec![RawSample::new("2024-04-10T15:00:00+00:00/PT1H", Some(10.0))]),
        );
        let value = serde_json::to_value(&grid).unwrap();
        assert!(value.get("probabilityOfPrecipitation").is_some());

        let back: GridForecast = serde_json::from_value(value).unwrap();
        assert_eq!(back, grid);
    }
}
