//! WebAssembly module for the Rx Burn Weather Planner
//!
//! Runs the forecast evaluation engine in the browser so a fetched gridpoint
//! forecast can be classified and laid out without a server round trip.
//! Structured values cross the boundary as JSON strings.

use std::collections::BTreeSet;

use wasm_bindgen::prelude::*;

use shared::{EngineError, EvaluatedRecord, ForecastInput, Octant, Prescription};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("rx-burn engine loaded"));
}

fn js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

fn evaluate_json(input_json: &str, prescription_json: &str) -> Result<String, String> {
    let input: ForecastInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid forecast JSON: {}", e))?;
    let prescription: Prescription = serde_json::from_str(prescription_json)
        .map_err(|e| format!("Invalid prescription JSON: {}", e))?;
    shared::validate_prescription(&prescription).map_err(|e| e.to_string())?;

    let evaluation = shared::evaluate_forecast(&input, &prescription).map_err(|e| e.to_string())?;
    serde_json::to_string(&evaluation).map_err(|e| e.to_string())
}

fn calendar_json(records_json: &str, time_zone: &str) -> Result<String, String> {
    let records: Vec<EvaluatedRecord> =
        serde_json::from_str(records_json).map_err(|e| format!("Invalid records JSON: {}", e))?;
    let grid = shared::build_calendar_grid(time_zone, &records);
    serde_json::to_string(&grid).map_err(|e| e.to_string())
}

/// Octant labels from a comma-separated list; blank entries are ignored
fn parse_octants(labels_csv: &str) -> Result<BTreeSet<Octant>, EngineError> {
    labels_csv
        .split(',')
        .filter(|label| !label.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Evaluate a `ForecastInput` JSON against a `Prescription` JSON
#[wasm_bindgen]
pub fn evaluate_forecast(input_json: &str, prescription_json: &str) -> Result<String, JsValue> {
    evaluate_json(input_json, prescription_json).map_err(js_error)
}

/// Rebuild the calendar grid from evaluated records, e.g. after a timezone change
#[wasm_bindgen]
pub fn build_calendar_grid(records_json: &str, time_zone: &str) -> Result<String, JsValue> {
    calendar_json(records_json, time_zone).map_err(js_error)
}

/// Throws on an unknown octant label
#[wasm_bindgen]
pub fn matches_wind_direction(heading: f64, labels_csv: &str) -> Result<bool, JsValue> {
    let selected = parse_octants(labels_csv).map_err(|e| js_error(e.to_string()))?;
    Ok(shared::matches_wind_direction(&selected, heading))
}

#[wasm_bindgen]
pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<f64> {
    shared::celsius_to_fahrenheit(celsius).map(|v| v as f64)
}

#[wasm_bindgen]
pub fn kmh_to_mph(kmh: Option<f64>) -> Option<f64> {
    shared::kmh_to_mph(kmh).map(|v| v as f64)
}

#[wasm_bindgen]
pub fn meters_to_feet(meters: Option<f64>) -> Option<f64> {
    shared::meters_to_feet(meters).map(|v| v as f64)
}

/// True when the prescription JSON parses and every range is ordered
#[wasm_bindgen]
pub fn validate_prescription(prescription_json: &str) -> bool {
    serde_json::from_str::<Prescription>(prescription_json)
        .map(|p| shared::validate_prescription(&p).is_ok())
        .unwrap_or(false)
}
