//! Error types for the OMDb browser
//!
//! This module defines all error types used throughout the library.
//! OmdbError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Message shown for every failure that is not a catalog-reported one
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to fetch data.";

/// Error type for OMDb catalog operations
#[derive(Error, Debug)]
pub enum OmdbError {
    /// HTTP request failed (includes timeouts)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected shape
    #[error("Failed to decode JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response was JSON but its content could not be interpreted
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The catalog answered with `Response: "False"`
    #[error("{0}")]
    CatalogError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Search input cannot be sent to the catalog
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Invalid catalog identifier provided
    #[error("Invalid IMDb ID: {0:?}")]
    InvalidId(String),

    /// No API key was configured
    #[error("OMDb API key is not configured")]
    MissingApiKey,

    /// The catalog rejected the API key (HTTP 401)
    #[error("Unauthorized - check the OMDb API key")]
    Unauthorized,
}

impl OmdbError {
    /// Whether the catalog itself reported this failure.
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, OmdbError::CatalogError(_))
    }

    /// User-facing message for a failed fetch.
    ///
    /// Catalog failures are surfaced verbatim; everything else collapses
    /// into [`TRANSPORT_FAILURE_MESSAGE`].
    pub fn failure_message(&self) -> String {
        match self {
            OmdbError::CatalogError(message) => message.clone(),
            _ => TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Serialize OmdbError as a string for Tauri compatibility
impl Serialize for OmdbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for OMDb operations
pub type Result<T> = std::result::Result<T, OmdbError>;
