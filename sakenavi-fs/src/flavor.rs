//! Flavor vector summarization
//!
//! Turns a six-axis flavor chart into the two user-facing summaries: a
//! single axis value rounded for display, and the two dominant axes phrased
//! as a natural-language headline.

use crate::catalog::{self, FlavorFeature};
use sakenavi_common::models::{FlavorAxis, FlavorChart};

/// Round up to two decimal places
///
/// Display rounding is always toward the ceiling, never to nearest:
/// 0.831 becomes 0.84 and 0.001 becomes 0.01. The scaled value is snapped
/// to the nearest integer first when it sits within float representation
/// noise of one, so an already-rounded value passes through unchanged
/// (0.84 * 100.0 can land a hair above 84.0 and must not become 0.85).
pub fn ceil_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let snapped = if (scaled - scaled.round()).abs() < 1e-9 {
        scaled.round()
    } else {
        scaled
    };
    snapped.ceil() / 100.0
}

/// Rounded value of one named axis
pub fn rounded_axis_value(chart: &FlavorChart, axis: FlavorAxis) -> f64 {
    ceil_to_hundredths(chart.axis_value(axis))
}

/// The two dominant flavor features of a chart
///
/// Axes are ranked by value descending. The ranking is seeded in catalog
/// order and sorted stably, so a tie always resolves toward the earlier
/// catalog entry regardless of how the chart was produced.
pub fn top_two(chart: &FlavorChart) -> (&'static FlavorFeature, &'static FlavorFeature) {
    let mut ranked: Vec<&'static FlavorFeature> = catalog::FEATURES.iter().collect();
    ranked.sort_by(|a, b| chart.axis_value(b.axis).total_cmp(&chart.axis_value(a.axis)));
    (ranked[0], ranked[1])
}

/// Natural-language summary of the dominant flavors
pub fn headline(chart: &FlavorChart) -> String {
    let (first, second) = top_two(chart);
    format!(
        "This sake's characteristic flavor is {} and {}.",
        first.english, second.english
    )
}
