//! JSON parsers for OMDb catalog responses
//!
//! - `search`: Parse search-mode responses
//! - `detail`: Parse detail-mode responses

pub mod detail;
pub mod search;

// Re-export main parsing functions
pub use detail::parse_detail_response;
pub use search::{parse_search_response, parse_total_results};
