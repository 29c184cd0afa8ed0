//! Validation utilities for prescriptions and saved burn plans

use crate::error::{EngineError, EngineResult};
use crate::models::{BurnPlanSettings, Prescription, PrescriptionCriteria, PrescriptionRange};

// ============================================================================
// Prescription Validations
// ============================================================================

/// Validate that a range is finite and not inverted
pub fn validate_range(field: &str, range: &PrescriptionRange) -> EngineResult<()> {
    if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
        return Err(EngineError::InvalidRange {
            field: field.to_string(),
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

pub fn validate_criteria(tier: &str, criteria: &PrescriptionCriteria) -> EngineResult<()> {
    validate_range(&format!("{}.temperature", tier), &criteria.temperature)?;
    validate_range(&format!("{}.humidity", tier), &criteria.humidity)?;
    validate_range(&format!("{}.windSpeed", tier), &criteria.wind_speed)?;
    Ok(())
}

/// Validate both tiers of a prescription
pub fn validate_prescription(prescription: &Prescription) -> EngineResult<()> {
    validate_criteria("preferred", &prescription.preferred)?;
    validate_criteria("acceptable", &prescription.acceptable)
}

/// Check that the preferred window sits inside the acceptable window.
///
/// Not enforced: a preferred tier wider than the acceptable one is legal,
/// it only means hours can be preferred without being acceptable.
pub fn is_nested_prescription(prescription: &Prescription) -> bool {
    let within = |inner: &PrescriptionRange, outer: &PrescriptionRange| {
        inner.min >= outer.min && inner.max <= outer.max
    };
    let preferred = &prescription.preferred;
    let acceptable = &prescription.acceptable;

    within(&preferred.temperature, &acceptable.temperature)
        && within(&preferred.humidity, &acceptable.humidity)
        && within(&preferred.wind_speed, &acceptable.wind_speed)
}

/// Relative humidity bounds must stay within 0-100%
pub fn validate_humidity_bounds(range: &PrescriptionRange) -> Result<(), &'static str> {
    if range.min < 0.0 || range.max > 100.0 {
        return Err("Relative humidity must be between 0 and 100%");
    }
    Ok(())
}

// ============================================================================
// Location Validations
// ============================================================================

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate property name (1-100 characters after trimming)
pub fn validate_property_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Property name cannot be empty");
    }
    if trimmed.chars().count() > 100 {
        return Err("Property name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a saved burn plan before it is persisted
pub fn validate_settings(settings: &BurnPlanSettings) -> Result<(), String> {
    validate_property_name(&settings.property_name).map_err(str::to_string)?;
    validate_coordinates(settings.latitude, settings.longitude).map_err(str::to_string)?;
    validate_prescription(&settings.prescription).map_err(|e| e.to_string())?;
    validate_humidity_bounds(&settings.prescription.preferred.humidity).map_err(str::to_string)?;
    validate_humidity_bounds(&settings.prescription.acceptable.humidity).map_err(str::to_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Octant;

    fn criteria(temp: (f64, f64), rh: (f64, f64), wind: (f64, f64)) -> PrescriptionCriteria {
        PrescriptionCriteria::new(
            PrescriptionRange::new(temp.0, temp.1),
            PrescriptionRange::new(rh.0, rh.1),
            PrescriptionRange::new(wind.0, wind.1),
        )
    }

    fn settings() -> BurnPlanSettings {
        BurnPlanSettings {
            property_name: "North Pasture".to_string(),
            latitude: 38.5,
            longitude: -96.6,
            prescription: Prescription {
                preferred: criteria((50.0, 70.0), (30.0, 45.0), (5.0, 10.0))
                    .with_directions([Octant::S]),
                acceptable: criteria((40.0, 80.0), (25.0, 55.0), (3.0, 15.0)),
            },
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = validate_range("temperature", &PrescriptionRange::new(80.0, 40.0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidRange {
                field: "temperature".to_string(),
                min: 80.0,
                max: 40.0
            }
        );
    }

    #[test]
    fn test_single_value_range_allowed() {
        assert!(validate_range("windSpeed", &PrescriptionRange::new(5.0, 5.0)).is_ok());
    }

    #[test]
    fn test_nan_range_rejected() {
        assert!(validate_range("humidity", &PrescriptionRange::new(f64::NAN, 5.0)).is_err());
    }

    #[test]
    fn test_prescription_error_names_tier() {
        let mut prescription = settings().prescription;
        prescription.acceptable.wind_speed = PrescriptionRange::new(20.0, 10.0);
        let err = validate_prescription(&prescription).unwrap_err();
        assert!(err.to_string().contains("acceptable.windSpeed"));
    }

    #[test]
    fn test_nested_prescription() {
        let mut prescription = settings().prescription;
        assert!(is_nested_prescription(&prescription));
        prescription.preferred.temperature = PrescriptionRange::new(30.0, 70.0);
        assert!(!is_nested_prescription(&prescription));
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_coordinates(38.5, -96.6).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_property_name() {
        assert!(validate_property_name("North Pasture").is_ok());
        assert!(validate_property_name("   ").is_err());
        assert!(validate_property_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_settings() {
        assert!(validate_settings(&settings()).is_ok());

        let mut bad = settings();
        bad.prescription.preferred.humidity = PrescriptionRange::new(30.0, 120.0);
        assert_eq!(
            validate_settings(&bad).unwrap_err(),
            "Relative humidity must be between 0 and 100%"
        );
    }
}
