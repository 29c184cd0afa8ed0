//! Prescription and wind-sector tests
//!
//! Tier precedence, inclusive bounds, octant matching, unit conversion and
//! saved-plan validation.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use shared::{
    celsius_to_fahrenheit, classify_record, kmh_to_mph, matches_wind_direction, meters_to_feet,
    normalize_record, octants_for_heading, resolve_time_zone, validate_prescription,
    validate_settings, BurnPlanSettings, BurnStatus, EngineError, ForecastField, MergedRecord,
    NormalizedRecord, Octant, Prescription, PrescriptionCriteria, PrescriptionRange,
};

fn range(min: f64, max: f64) -> PrescriptionRange {
    PrescriptionRange::new(min, max)
}

fn prescription() -> Prescription {
    Prescription {
        preferred: PrescriptionCriteria::new(range(50.0, 70.0), range(25.0, 40.0), range(4.0, 10.0))
            .with_directions([Octant::SW, Octant::W]),
        acceptable: PrescriptionCriteria::new(range(40.0, 80.0), range(20.0, 55.0), range(2.0, 15.0)),
    }
}

/// A normalized hour built from raw NWS units
fn hour(celsius: f64, rh: f64, kmh: f64, heading: f64) -> NormalizedRecord {
    let mut merged = MergedRecord::new(Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap());
    merged.fields.insert(ForecastField::Temperature, Some(celsius));
    merged.fields.insert(ForecastField::RelativeHumidity, Some(rh));
    merged.fields.insert(ForecastField::WindSpeed, Some(kmh));
    merged.fields.insert(ForecastField::WindDirection, Some(heading));
    normalize_record(&merged, resolve_time_zone("America/Chicago"))
}

// =============================================================================
// Tier Classification Tests
// =============================================================================

mod tiers {
    use super::*;

    #[test]
    fn test_preferred_hour() {
        // 15 C = 59 F, 12 km/h = 7 mph, 230 deg is SW
        let record = hour(15.0, 30.0, 12.0, 230.0);
        assert_eq!(classify_record(&record, &prescription()), BurnStatus::Preferred);
    }

    #[test]
    fn test_east_wind_is_only_acceptable() {
        let record = hour(15.0, 30.0, 12.0, 90.0);
        assert_eq!(classify_record(&record, &prescription()), BurnStatus::Acceptable);
    }

    #[test]
    fn test_too_humid_for_both_tiers() {
        let record = hour(15.0, 70.0, 12.0, 230.0);
        assert_eq!(classify_record(&record, &prescription()), BurnStatus::Unsuitable);
    }

    #[test]
    fn test_flooring_decides_the_bound() {
        // 21.1 C is 69.98 F, floored to 69 and inside the preferred 50-70
        let record = hour(21.1, 30.0, 12.0, 230.0);
        assert_eq!(record.temperature_f, Some(69));
        assert_eq!(classify_record(&record, &prescription()), BurnStatus::Preferred);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BurnStatus::Preferred.to_string(), "Preferred");
        assert_eq!(BurnStatus::Unsuitable.to_string(), "Not in Prescription");
        assert_eq!(BurnStatus::InsufficientData.to_string(), "Insufficient Data");
    }
}

// =============================================================================
// Wind Sector Tests
// =============================================================================

mod wind_sectors {
    use super::*;

    #[test]
    fn test_octant_labels_parse() {
        let parsed: Vec<Octant> = ["n", "NE", " sw "].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(parsed, vec![Octant::N, Octant::NE, Octant::SW]);
    }

    #[test]
    fn test_unknown_octant_label() {
        assert_eq!(
            "NNE".parse::<Octant>().unwrap_err(),
            EngineError::UnknownOctant("NNE".to_string())
        );
    }

    #[test]
    fn test_boundary_degrees() {
        assert_eq!(octants_for_heading(0.0), vec![Octant::N]);
        assert_eq!(octants_for_heading(67.0), vec![Octant::NE, Octant::E]);
        assert_eq!(octants_for_heading(247.0), vec![Octant::SW, Octant::W]);
        assert_eq!(octants_for_heading(360.0), vec![Octant::N]);
    }

    #[test]
    fn test_prescription_directions_deserialize() {
        let json = r#"{
            "temperature": {"min": 40, "max": 80},
            "humidity": {"min": 20, "max": 55},
            "windSpeed": {"min": 2, "max": 15},
            "windDirections": ["S", "SW"]
        }"#;
        let criteria: PrescriptionCriteria = serde_json::from_str(json).unwrap();
        assert!(matches_wind_direction(&criteria.wind_directions, 200.0));
        assert!(!matches_wind_direction(&criteria.wind_directions, 20.0));
    }

    #[test]
    fn test_directions_default_to_unrestricted() {
        let json = r#"{
            "temperature": {"min": 40, "max": 80},
            "humidity": {"min": 20, "max": 55},
            "windSpeed": {"min": 2, "max": 15}
        }"#;
        let criteria: PrescriptionCriteria = serde_json::from_str(json).unwrap();
        assert!(criteria.wind_directions.is_empty());
        assert!(matches_wind_direction(&criteria.wind_directions, 123.0));
    }
}

// =============================================================================
// Unit Conversion Tests
// =============================================================================

mod conversions {
    use super::*;

    #[test]
    fn test_conversions_floor() {
        assert_eq!(celsius_to_fahrenheit(Some(0.0)), Some(32));
        assert_eq!(celsius_to_fahrenheit(Some(-40.0)), Some(-40));
        assert_eq!(kmh_to_mph(Some(16.0934)), Some(9));
        assert_eq!(meters_to_feet(Some(1000.0)), Some(3280));
    }

    #[test]
    fn test_missing_values_stay_missing() {
        assert_eq!(celsius_to_fahrenheit(None), None);
        assert_eq!(kmh_to_mph(Some(f64::NAN)), None);
        assert_eq!(meters_to_feet(Some(f64::INFINITY)), None);
    }
}

// =============================================================================
// Saved Plan Validation Tests
// =============================================================================

mod plan_validation {
    use super::*;

    fn settings() -> BurnPlanSettings {
        BurnPlanSettings {
            property_name: "Tallgrass Unit 4".to_string(),
            latitude: 38.65,
            longitude: -96.55,
            prescription: prescription(),
        }
    }

    #[test]
    fn test_valid_plan() {
        assert!(validate_settings(&settings()).is_ok());
    }

    #[test]
    fn test_plan_json_round_trip_names() {
        let json = serde_json::to_value(settings()).unwrap();
        assert_eq!(json["propertyName"], "Tallgrass Unit 4");
        assert_eq!(json["prescription"]["preferred"]["windDirections"][0], "SW");
    }

    #[test]
    fn test_out_of_range_latitude() {
        let mut plan = settings();
        plan.latitude = 95.0;
        assert_eq!(
            validate_settings(&plan).unwrap_err(),
            "Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn test_inverted_wind_range() {
        let mut plan = settings();
        plan.prescription.preferred.wind_speed = range(12.0, 4.0);
        assert!(matches!(
            validate_prescription(&plan.prescription),
            Err(EngineError::InvalidRange { field, .. }) if field == "preferred.windSpeed"
        ));
    }
}

// =============================================================================
// Prescription Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Range bounds are inclusive on both ends
    #[test]
    fn property_range_bounds_inclusive(min in -100.0f64..100.0, width in 0.0f64..100.0) {
        let r = range(min, min + width);
        prop_assert!(r.contains(min));
        prop_assert!(r.contains(min + width));
        prop_assert!(!r.contains(min - 1.0));
    }

    /// An hour inside the preferred tier is never reported as merely acceptable
    #[test]
    fn property_preferred_takes_precedence(
        celsius in 10.5f64..21.0,
        rh in 25.0f64..40.0,
        heading in 202u32..=292,
    ) {
        // 10.5-21 C floors to 50-69 F; 12 km/h is 7 mph
        let record = hour(celsius, rh, 12.0, heading as f64);
        prop_assert_eq!(classify_record(&record, &prescription()), BurnStatus::Preferred);
    }

    /// Selecting every octant never rejects a whole-degree heading
    #[test]
    fn property_all_octants_match(heading in 0u32..=360) {
        let all: BTreeSet<Octant> = Octant::ALL.into_iter().collect();
        prop_assert!(matches_wind_direction(&all, heading as f64));
        prop_assert!(!octants_for_heading(heading as f64).is_empty());
    }

    /// Conversions never invent a value for missing input
    #[test]
    fn property_conversion_null_safety(value in proptest::option::of(-1000.0f64..1000.0)) {
        prop_assert_eq!(celsius_to_fahrenheit(value).is_some(), value.is_some());
        prop_assert_eq!(kmh_to_mph(value).is_some(), value.is_some());
        prop_assert_eq!(meters_to_feet(value).is_some(), value.is_some());
    }
}
