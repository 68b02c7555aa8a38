//! Immutable reference data snapshot
//!
//! Holds the four Sakenowa record sets for the lifetime of a session and
//! indexes flavor charts by brand id. Validation happens once here, at
//! ingestion: a chart with an axis value outside [0.0, 1.0] is flagged and
//! skipped (the brand then simply has no flavor data), and a duplicate
//! chart for the same brand keeps the last occurrence.

use sakenavi_common::models::{Area, Brand, Brewery, FlavorChart};
use std::collections::HashMap;
use tracing::warn;

/// Read-only reference data for one session
#[derive(Debug, Clone)]
pub struct ReferenceSnapshot {
    areas: Vec<Area>,
    breweries: Vec<Brewery>,
    brands: Vec<Brand>,
    flavor_charts: HashMap<u32, FlavorChart>,
}

impl ReferenceSnapshot {
    /// Build a snapshot from freshly fetched record sets
    pub fn from_records(
        areas: Vec<Area>,
        breweries: Vec<Brewery>,
        brands: Vec<Brand>,
        charts: Vec<FlavorChart>,
    ) -> Self {
        let mut flavor_charts: HashMap<u32, FlavorChart> = HashMap::with_capacity(charts.len());
        for chart in charts {
            if !chart.values_in_range() {
                warn!(
                    brand_id = chart.brand_id,
                    "Flavor chart has out-of-range axis values, skipping"
                );
                continue;
            }
            let brand_id = chart.brand_id;
            if flavor_charts.insert(brand_id, chart).is_some() {
                warn!(brand_id, "Duplicate flavor chart for brand, keeping the last one");
            }
        }

        Self {
            areas,
            breweries,
            brands,
            flavor_charts,
        }
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn breweries(&self) -> &[Brewery] {
        &self.breweries
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Flavor chart for a brand; `None` is an expected state, not an error
    pub fn flavor_chart(&self, brand_id: u32) -> Option<&FlavorChart> {
        self.flavor_charts.get(&brand_id)
    }

    /// Number of indexed flavor charts
    pub fn flavor_chart_count(&self) -> usize {
        self.flavor_charts.len()
    }
}
