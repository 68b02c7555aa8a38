//! sakenavi-fs library interface
//!
//! Exposes the cascade pipeline, summarization core, and router for
//! integration testing.

pub mod api;
pub mod catalog;
pub mod error;
pub mod flavor;
pub mod options;
pub mod pipeline;
pub mod radar;
pub mod services;
pub mod snapshot;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::snapshot::ReferenceSnapshot;

/// Application state shared across handlers
///
/// The snapshot is fetched once at startup and shared immutably; handlers
/// never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Session reference data snapshot
    pub snapshot: Arc<ReferenceSnapshot>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(snapshot: ReferenceSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/areas", get(api::list_areas))
        .route("/api/breweries", get(api::list_breweries))
        .route("/api/brands", get(api::list_brands))
        .route("/api/features", get(api::list_features))
        .route("/api/flavor-summary", get(api::flavor_summary))
        .merge(api::health_routes())
        .with_state(state)
}
