//! External service clients

pub mod sakenowa_client;

pub use sakenowa_client::{SakenowaClient, SakenowaError};
