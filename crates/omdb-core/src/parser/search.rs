//! Search response parser for the OMDb catalog
//!
//! Parses JSON from search-mode requests (`s=`) into a [`SearchPage`].

use serde::Deserialize;

use crate::error::{OmdbError, Result};
use crate::types::{ResultItem, SearchPage};

/// Fallback text when the catalog reports a failure without an `Error` field
pub(crate) const UNKNOWN_CATALOG_ERROR: &str = "Unknown catalog error";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSearchResponse {
    response: String,
    #[serde(default)]
    search: Vec<RawSearchItem>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    title: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    poster: String,
}

/// Check the catalog's `Response` flag.
///
/// `"True"` passes, `"False"` becomes `CatalogError` carrying the verbatim
/// `Error` text, anything else is a parse error.
pub(crate) fn check_response_flag(flag: &str, error: Option<String>) -> Result<()> {
    match flag {
        "True" => Ok(()),
        "False" => Err(OmdbError::CatalogError(
            error.unwrap_or_else(|| UNKNOWN_CATALOG_ERROR.to_string()),
        )),
        other => Err(OmdbError::ParseError(format!(
            "unexpected Response flag {:?}",
            other
        ))),
    }
}

/// Parse `totalResults`, which the catalog encodes as a string.
///
/// # Examples
/// ```
/// use omdb_core::parser::parse_total_results;
///
/// assert_eq!(parse_total_results("23").unwrap(), 23);
/// assert!(parse_total_results("lots").is_err());
/// ```
pub fn parse_total_results(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| OmdbError::ParseError(format!("invalid totalResults {:?}", raw)))
}

/// Parse a search-mode catalog response.
///
/// # Arguments
/// * `json` - Raw response body
///
/// # Returns
/// * `Ok(SearchPage)` with the page items and total match count
/// * `Err(OmdbError::CatalogError)` if the catalog answered `Response: "False"`
/// * `Err(OmdbError::JsonError | OmdbError::ParseError)` for malformed bodies
pub fn parse_search_response(json: &str) -> Result<SearchPage> {
    let raw: RawSearchResponse = serde_json::from_str(json)?;
    check_response_flag(&raw.response, raw.error)?;

    let total_results = match raw.total_results.as_deref() {
        Some(value) => parse_total_results(value)?,
        None => raw.search.len() as u64,
    };

    let items = raw
        .search
        .into_iter()
        .map(|item| ResultItem {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: item.poster,
        })
        .collect();

    Ok(SearchPage::new(items, total_results))
}
