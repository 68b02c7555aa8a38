//! Cascade option endpoints
//!
//! One endpoint per cascade level, each returning the selectable options
//! computed from the session snapshot, plus the static feature catalog. An
//! empty option list is a normal response; the client decides how to present
//! the dead end.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::options::OptionSet;
use crate::pipeline::SelectionPipeline;
use crate::AppState;
use sakenavi_common::models::FlavorAxis;

/// Query parameters for the brewery level
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreweryQuery {
    pub area_id: u32,
}

/// Query parameters for the brand level
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandQuery {
    pub brewery_id: u32,
}

/// Option list response for one cascade level
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub options: OptionSet,
}

/// One feature catalog entry as served over HTTP
#[derive(Debug, Serialize)]
pub struct FeatureResponse {
    pub label: &'static str,
    pub english: &'static str,
    pub axis: FlavorAxis,
    pub description: &'static str,
}

/// GET /api/areas
pub async fn list_areas(State(state): State<AppState>) -> Json<OptionsResponse> {
    let pipeline = SelectionPipeline::new(&state.snapshot);
    Json(OptionsResponse {
        options: pipeline.area_options(),
    })
}

/// GET /api/breweries?areaId=N
pub async fn list_breweries(
    State(state): State<AppState>,
    Query(query): Query<BreweryQuery>,
) -> Json<OptionsResponse> {
    let pipeline = SelectionPipeline::new(&state.snapshot);
    Json(OptionsResponse {
        options: pipeline.brewery_options(query.area_id),
    })
}

/// GET /api/brands?breweryId=N
pub async fn list_brands(
    State(state): State<AppState>,
    Query(query): Query<BrandQuery>,
) -> Json<OptionsResponse> {
    let pipeline = SelectionPipeline::new(&state.snapshot);
    Json(OptionsResponse {
        options: pipeline.brand_options(query.brewery_id),
    })
}

/// GET /api/features
///
/// The fixed flavor feature catalog, in canonical order, with the
/// description shown next to each selectable feature.
pub async fn list_features() -> Json<Vec<FeatureResponse>> {
    Json(
        catalog::FEATURES
            .iter()
            .map(|feature| FeatureResponse {
                label: feature.label,
                english: feature.english,
                axis: feature.axis,
                description: feature.description,
            })
            .collect(),
    )
}
