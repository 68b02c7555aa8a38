//! Radar chart dataset
//!
//! Converts a flavor chart into the labeled point sequence a polar chart
//! renderer consumes. Points always come out in canonical catalog order,
//! exactly six of them, values untouched. Closing the polygon (repeating
//! the first point) is the renderer's job, not done here.

use crate::catalog;
use sakenavi_common::models::FlavorChart;
use serde::Serialize;

/// One labeled radar point, value in [0.0, 1.0]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RadarPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Ordered radar dataset for one flavor chart
pub fn radar_dataset(chart: &FlavorChart) -> Vec<RadarPoint> {
    catalog::FEATURES
        .iter()
        .map(|feature| RadarPoint {
            label: feature.label,
            value: chart.axis_value(feature.axis),
        })
        .collect()
}
