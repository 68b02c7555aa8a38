//! Selection cascade pipeline
//!
//! Drives the region, producer, brand narrowing sequence over an immutable
//! [`ReferenceSnapshot`] and hands back either the next level's options or a
//! terminal outcome. The pipeline holds no mutable state, so it is safe to
//! re-run on every user interaction.
//!
//! Terminal outcomes are ordinary values, not errors: running out of
//! selectable breweries or brands, or hitting a brand without flavor data,
//! are expected user-visible states. Only a selection that contradicts the
//! computed options (an id that was never offered) or an unknown feature
//! label is reported as an error.

use crate::catalog;
use crate::flavor;
use crate::options::{options_from, OptionSet};
use crate::radar::{self, RadarPoint};
use crate::snapshot::ReferenceSnapshot;
use sakenavi_common::models::FlavorAxis;
use sakenavi_common::{Error, Result};
use serde::Serialize;

/// The four externally supplied user selections
#[derive(Debug, Clone)]
pub struct Selection {
    pub area_id: u32,
    pub brewery_id: u32,
    pub brand_id: u32,
    /// Flavor feature display label, must match the catalog exactly
    pub feature_label: String,
}

/// Completed summarization for one brand and feature
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorReport {
    pub brand_id: u32,
    /// Echo of the selected feature label
    pub feature_label: String,
    /// Axis the selected feature reads
    pub feature_axis: FlavorAxis,
    /// Selected axis value, rounded up to two decimal places
    pub feature_value: f64,
    /// Natural-language summary of the two dominant axes
    pub headline: String,
    /// Ordered radar dataset, six points in catalog order
    pub radar: Vec<RadarPoint>,
}

/// Terminal state of one cascade evaluation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionOutcome {
    /// The selected area has no selectable breweries
    #[serde(rename_all = "camelCase")]
    NoBreweries { area_id: u32 },
    /// The selected brewery has no selectable brands
    #[serde(rename_all = "camelCase")]
    NoBrands { brewery_id: u32 },
    /// The brand exists but has no flavor chart (informational, not an error)
    #[serde(rename_all = "camelCase")]
    NoFlavorData { brand_id: u32 },
    /// Summarization completed
    Summarized(FlavorReport),
}

/// Pure cascade evaluator over one reference snapshot
pub struct SelectionPipeline<'a> {
    snapshot: &'a ReferenceSnapshot,
}

impl<'a> SelectionPipeline<'a> {
    pub fn new(snapshot: &'a ReferenceSnapshot) -> Self {
        Self { snapshot }
    }

    /// All selectable areas, unfiltered
    pub fn area_options(&self) -> OptionSet {
        options_from(self.snapshot.areas(), |_| true)
    }

    /// Breweries selectable under one area
    pub fn brewery_options(&self, area_id: u32) -> OptionSet {
        options_from(self.snapshot.breweries(), |b| b.area_id == area_id)
    }

    /// Brands selectable under one brewery
    pub fn brand_options(&self, brewery_id: u32) -> OptionSet {
        options_from(self.snapshot.brands(), |b| b.brewery_id == brewery_id)
    }

    /// Summarize one brand against one selected feature label
    ///
    /// The feature selection is independent of the cascade, so this can run
    /// as soon as a brand id is known. An unknown label is a precondition
    /// failure reported explicitly, never silently defaulted.
    pub fn summarize(&self, brand_id: u32, feature_label: &str) -> Result<SelectionOutcome> {
        let feature = catalog::feature_for_label(feature_label)
            .ok_or_else(|| Error::UnknownFeature(feature_label.to_string()))?;

        let chart = match self.snapshot.flavor_chart(brand_id) {
            Some(chart) => chart,
            None => return Ok(SelectionOutcome::NoFlavorData { brand_id }),
        };

        Ok(SelectionOutcome::Summarized(FlavorReport {
            brand_id,
            feature_label: feature.label.to_string(),
            feature_axis: feature.axis,
            feature_value: flavor::rounded_axis_value(chart, feature.axis),
            headline: flavor::headline(chart),
            radar: radar::radar_dataset(chart),
        }))
    }

    /// Run the full cascade for one set of selections
    ///
    /// Each level's selected id must be among the options computed for that
    /// level; anything else means the caller skipped the cascade.
    pub fn evaluate(&self, selection: &Selection) -> Result<SelectionOutcome> {
        if !self.area_options().contains_id(selection.area_id) {
            return Err(Error::InvalidInput(format!(
                "area {} is not a selectable option",
                selection.area_id
            )));
        }

        let breweries = self.brewery_options(selection.area_id);
        if breweries.is_empty() {
            return Ok(SelectionOutcome::NoBreweries {
                area_id: selection.area_id,
            });
        }
        if !breweries.contains_id(selection.brewery_id) {
            return Err(Error::InvalidInput(format!(
                "brewery {} is not a selectable option under area {}",
                selection.brewery_id, selection.area_id
            )));
        }

        let brands = self.brand_options(selection.brewery_id);
        if brands.is_empty() {
            return Ok(SelectionOutcome::NoBrands {
                brewery_id: selection.brewery_id,
            });
        }
        if !brands.contains_id(selection.brand_id) {
            return Err(Error::InvalidInput(format!(
                "brand {} is not a selectable option under brewery {}",
                selection.brand_id, selection.brewery_id
            )));
        }

        self.summarize(selection.brand_id, &selection.feature_label)
    }
}
