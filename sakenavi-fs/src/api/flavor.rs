//! Flavor summary endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::pipeline::{SelectionOutcome, SelectionPipeline};
use crate::AppState;

/// Query parameters for the flavor summary
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorSummaryQuery {
    pub brand_id: u32,
    /// Flavor feature display label, exact catalog match
    pub feature: String,
}

/// GET /api/flavor-summary?brandId=N&feature=LABEL
///
/// Returns `{"state": "summarized", ...}` with the rounded feature value,
/// headline, and radar dataset, or `{"state": "noFlavorData", ...}` when the
/// brand has no flavor chart. An unknown feature label is a 400.
pub async fn flavor_summary(
    State(state): State<AppState>,
    Query(query): Query<FlavorSummaryQuery>,
) -> ApiResult<Json<SelectionOutcome>> {
    let pipeline = SelectionPipeline::new(&state.snapshot);
    let outcome = pipeline.summarize(query.brand_id, &query.feature)?;
    Ok(Json(outcome))
}
