//! OMDb Browser Core Library
//!
//! This crate provides the query orchestration behind a paginated film
//! catalog browser backed by the OMDb API.
//!
//! # Features
//! - Search titles by free text, content type and page
//! - Stale-response suppression: only the latest input's answer is shown
//! - Pagination bounds derived from the catalog's total
//! - Detail lookups for a single title
//! - Policy knobs for blank searches and filter/page interaction

pub mod catalog;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod state;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, OmdbCatalog};
pub use client::{ClientConfig, OmdbClient};
pub use config::{EmptySearchPolicy, QueryPolicy};
pub use controller::QueryController;
pub use error::{OmdbError, Result, TRANSPORT_FAILURE_MESSAGE};
pub use orchestrator::{FetchDecision, Orchestrator, RequestGate, RequestToken, Settlement};
pub use state::{QueryState, ViewModel};
pub use types::{
    ContentType, DetailOutcome, FilmDetail, LoadingState, QueryInput, QueryOutcome, ResultItem,
    SearchPage, SearchRequest, PAGE_SIZE,
};
