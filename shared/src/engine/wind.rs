//! Wind-sector matching against user-selected compass octants

use std::collections::BTreeSet;

use crate::models::Octant;

/// Bring a heading into `[0, 360]`; 360 itself is kept as-is.
pub fn normalize_heading(heading: f64) -> f64 {
    if (0.0..=360.0).contains(&heading) {
        heading
    } else {
        heading.rem_euclid(360.0)
    }
}

pub fn octant_contains(octant: Octant, heading: f64) -> bool {
    let heading = normalize_heading(heading);
    octant
        .ranges()
        .iter()
        .any(|(low, high)| heading >= *low && heading <= *high)
}

/// An empty selection places no constraint on the heading
pub fn matches_wind_direction(selected: &BTreeSet<Octant>, heading: f64) -> bool {
    selected.is_empty() || selected.iter().any(|octant| octant_contains(*octant, heading))
}

/// Every octant a heading falls in (two on shared boundary degrees)
pub fn octants_for_heading(heading: f64) -> Vec<Octant> {
    Octant::ALL
        .into_iter()
        .filter(|octant| octant_contains(*octant, heading))
        .collect()
}
