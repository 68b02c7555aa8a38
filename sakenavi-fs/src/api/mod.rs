//! HTTP API handlers for sakenavi-fs

pub mod flavor;
pub mod health;
pub mod options;

pub use flavor::flavor_summary;
pub use health::health_routes;
pub use options::{list_areas, list_brands, list_breweries, list_features};
