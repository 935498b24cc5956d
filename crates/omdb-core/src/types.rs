//! Data types for the OMDb browser
//!
//! This module contains the core data structures used throughout the library.
//! All types implement Serialize and Deserialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

use crate::config::EmptySearchPolicy;

/// Number of items the catalog returns per search page
pub const PAGE_SIZE: u64 = 10;

/// Number of pages needed to show `total_results` items.
///
/// Zero results means zero pages.
pub fn total_pages(total_results: u64) -> u32 {
    u32::try_from(total_results.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Content-type filter understood by the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// No filter
    #[default]
    All,
    /// Feature films only
    Movie,
    /// TV series only
    Series,
}

impl ContentType {
    /// Keyword used by the catalog for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::All => "all",
            ContentType::Movie => "movie",
            ContentType::Series => "series",
        }
    }

    /// Value for the `type` query parameter; `All` omits the parameter.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            ContentType::All => None,
            other => Some(other.as_str()),
        }
    }
}

/// The user-controlled half of the query state.
///
/// A clone of this is the snapshot that tags every outgoing search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    /// Free-text search term, exactly as typed
    pub search_term: String,
    /// Content-type filter
    pub type_filter: ContentType,
    /// Requested page (1-based)
    pub page: u32,
}

impl Default for QueryInput {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            type_filter: ContentType::All,
            page: 1,
        }
    }
}

/// Single entry of a search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Catalog-unique IMDb identifier (e.g. "tt0372784")
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year or year range (e.g. "2005" or "2008–2013")
    pub year: String,
    /// Poster image URL, "N/A" when the catalog has none
    pub poster_url: String,
}

impl ResultItem {
    /// Whether the catalog supplied a usable poster
    pub fn has_poster(&self) -> bool {
        !self.poster_url.is_empty() && self.poster_url != "N/A"
    }
}

/// One page of search results as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Items on this page, in catalog order
    pub items: Vec<ResultItem>,
    /// Total matches across all pages
    pub total_results: u64,
}

impl SearchPage {
    /// Create a new search page
    pub fn new(items: Vec<ResultItem>, total_results: u64) -> Self {
        Self {
            items,
            total_results,
        }
    }

    /// Page count derived from `total_results`
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_results)
    }
}

/// A fully resolved search the catalog client can encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Term sent as `s=`, already trimmed
    pub term: String,
    /// Filter sent as `type=`
    pub content_type: ContentType,
    /// Page sent as `page=`
    pub page: u32,
}

impl SearchRequest {
    /// Resolve a query snapshot into a request under the given policy.
    ///
    /// Returns `None` when the policy says a blank term means "no query".
    pub fn from_input(input: &QueryInput, policy: EmptySearchPolicy) -> Option<Self> {
        let trimmed = input.search_term.trim();
        let term = if trimmed.is_empty() {
            match policy {
                EmptySearchPolicy::TreatAsNoQuery => return None,
                EmptySearchPolicy::FallbackToTypeKeyword => input.type_filter.as_str(),
            }
        } else {
            trimmed
        };

        Some(Self {
            term: term.to_string(),
            content_type: input.type_filter,
            page: input.page.max(1),
        })
    }
}

/// Outcome of the current search cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Nothing issued yet, or the term is blank
    #[default]
    Idle,
    /// A request for the current snapshot is in flight
    Loading,
    /// The catalog answered (possibly with zero items)
    Success {
        items: Vec<ResultItem>,
        total_results: u64,
    },
    /// The catalog or the transport failed
    Failure { message: String },
}

impl QueryOutcome {
    /// Coarse state for the presentation layer
    pub fn loading_state(&self) -> LoadingState {
        match self {
            QueryOutcome::Idle => LoadingState::Idle,
            QueryOutcome::Loading => LoadingState::Loading,
            QueryOutcome::Success { .. } => LoadingState::Ready,
            QueryOutcome::Failure { .. } => LoadingState::Failed,
        }
    }

    /// Error text, only present for failures
    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryOutcome::Failure { message } => Some(message),
            _ => None,
        }
    }
}

/// Coarse loading indicator derived from an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Full record of a single title (detail mode)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDetail {
    /// IMDb identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year or year range
    pub year: String,
    /// Poster image URL
    pub poster_url: Option<String>,
    /// Full plot summary
    pub plot: Option<String>,
    /// Comma-separated genres as reported by the catalog
    pub genre: Option<String>,
    /// Director(s)
    pub director: Option<String>,
    /// Runtime (e.g. "140 min")
    pub runtime: Option<String>,
    /// Main cast
    pub actors: Option<String>,
    /// Catalog type ("movie", "series", "episode", ...)
    pub content_type: Option<String>,
    /// Release date
    pub released: Option<String>,
}

/// Outcome of the detail-view lane
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailOutcome {
    /// No title selected
    #[default]
    Idle,
    /// Detail for `id` is in flight
    Loading { id: String },
    /// Detail loaded
    Success { film: FilmDetail },
    /// Detail failed to load
    Failure { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(23), 3);
    }

    #[test]
    fn test_content_type_serialization() {
        let json = serde_json::to_string(&ContentType::Series).unwrap();
        assert_eq!(json, "\"series\"");

        let parsed: ContentType = serde_json::from_str("\"movie\"").unwrap();
        assert_eq!(parsed, ContentType::Movie);
    }

    #[test]
    fn test_content_type_query_value() {
        assert_eq!(ContentType::All.query_value(), None);
        assert_eq!(ContentType::Movie.query_value(), Some("movie"));
        assert_eq!(ContentType::Series.query_value(), Some("series"));
    }

    #[test]
    fn test_query_input_default() {
        let input = QueryInput::default();
        assert_eq!(input.search_term, "");
        assert_eq!(input.type_filter, ContentType::All);
        assert_eq!(input.page, 1);
    }

    #[test]
    fn test_search_request_trims_term() {
        let input = QueryInput {
            search_term: "  batman  ".to_string(),
            type_filter: ContentType::Movie,
            page: 2,
        };
        let request = SearchRequest::from_input(&input, EmptySearchPolicy::TreatAsNoQuery).unwrap();
        assert_eq!(request.term, "batman");
        assert_eq!(request.content_type, ContentType::Movie);
        assert_eq!(request.page, 2);
    }

    #[test]
    fn test_search_request_blank_term_no_query() {
        let input = QueryInput {
            search_term: "   ".to_string(),
            ..QueryInput::default()
        };
        assert!(SearchRequest::from_input(&input, EmptySearchPolicy::TreatAsNoQuery).is_none());
    }

    #[test]
    fn test_search_request_blank_term_falls_back_to_type() {
        let input = QueryInput {
            search_term: String::new(),
            type_filter: ContentType::Series,
            page: 1,
        };
        let request =
            SearchRequest::from_input(&input, EmptySearchPolicy::FallbackToTypeKeyword).unwrap();
        assert_eq!(request.term, "series");

        let all = QueryInput::default();
        let request =
            SearchRequest::from_input(&all, EmptySearchPolicy::FallbackToTypeKeyword).unwrap();
        assert_eq!(request.term, "all");
    }

    #[test]
    fn test_query_outcome_accessors() {
        let failure = QueryOutcome::Failure {
            message: "Movie not found!".to_string(),
        };
        assert_eq!(failure.loading_state(), LoadingState::Failed);
        assert_eq!(failure.error_message(), Some("Movie not found!"));

        let empty = QueryOutcome::Success {
            items: Vec::new(),
            total_results: 0,
        };
        assert_eq!(empty.loading_state(), LoadingState::Ready);
        assert_eq!(empty.error_message(), None);
    }

    #[test]
    fn test_query_outcome_serialization_is_tagged() {
        let json = serde_json::to_value(QueryOutcome::Loading).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "loading" }));

        let json = serde_json::to_value(QueryOutcome::Failure {
            message: "oops".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "state": "failure", "message": "oops" }));
    }

    #[test]
    fn test_result_item_has_poster() {
        let mut item = ResultItem {
            id: "tt0372784".to_string(),
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            poster_url: "https://example.com/p.jpg".to_string(),
        };
        assert!(item.has_poster());
        item.poster_url = "N/A".to_string();
        assert!(!item.has_poster());
    }
}
