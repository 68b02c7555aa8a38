//! # Sakenavi Common Library
//!
//! Shared code for Sakenavi services:
//! - Sakenowa record models (areas, breweries, brands, flavor charts)
//! - Error types
//! - Configuration loading

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
