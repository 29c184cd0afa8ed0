//! Burn prescription models
//!
//! A prescription is the two-tier set of weather ranges a land manager
//! considers safe for a burn: a preferred window and a wider acceptable one.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Compass octant a user can select as an allowed wind direction.
///
/// Labels deserialize through [`FromStr`], so `"sw"` is accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String")]
pub enum Octant {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Octant {
    pub const ALL: [Octant; 8] = [
        Octant::N,
        Octant::NE,
        Octant::E,
        Octant::SE,
        Octant::S,
        Octant::SW,
        Octant::W,
        Octant::NW,
    ];

    /// Inclusive heading ranges in degrees.
    ///
    /// North wraps across 0/360 and is split in two. Neighbouring octants
    /// share their boundary degree, so a heading of exactly 67 is both NE and E.
    pub fn ranges(&self) -> &'static [(f64, f64)] {
        match self {
            Octant::N => &[(338.0, 360.0), (0.0, 22.0)],
            Octant::NE => &[(22.0, 67.0)],
            Octant::E => &[(67.0, 112.0)],
            Octant::SE => &[(112.0, 157.0)],
            Octant::S => &[(157.0, 202.0)],
            Octant::SW => &[(202.0, 247.0)],
            Octant::W => &[(247.0, 292.0)],
            Octant::NW => &[(292.0, 338.0)],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Octant::N => "N",
            Octant::NE => "NE",
            Octant::E => "E",
            Octant::SE => "SE",
            Octant::S => "S",
            Octant::SW => "SW",
            Octant::W => "W",
            Octant::NW => "NW",
        }
    }
}

impl std::fmt::Display for Octant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Octant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        Octant::ALL
            .into_iter()
            .find(|octant| octant.label() == label)
            .ok_or_else(|| EngineError::UnknownOctant(s.to_string()))
    }
}

impl TryFrom<String> for Octant {
    type Error = EngineError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Inclusive `[min, max]` bounds over one scalar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionRange {
    pub min: f64,
    pub max: f64,
}

impl PrescriptionRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One tier of a prescription, in display units (°F, %, mph)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionCriteria {
    pub temperature: PrescriptionRange,
    pub humidity: PrescriptionRange,
    pub wind_speed: PrescriptionRange,
    /// Empty means any heading is allowed
    #[serde(default)]
    pub wind_directions: BTreeSet<Octant>,
}

impl PrescriptionCriteria {
    pub fn new(
        temperature: PrescriptionRange,
        humidity: PrescriptionRange,
        wind_speed: PrescriptionRange,
    ) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            wind_directions: BTreeSet::new(),
        }
    }

    pub fn with_directions<I: IntoIterator<Item = Octant>>(mut self, directions: I) -> Self {
        self.wind_directions = directions.into_iter().collect();
        self
    }
}

/// Preferred tier is tried first, acceptable second
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub preferred: PrescriptionCriteria,
    pub acceptable: PrescriptionCriteria,
}

/// Settings blob saved per property so a prescription can be reused
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnPlanSettings {
    pub property_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub prescription: Prescription,
}
