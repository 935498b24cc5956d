//! Detail response parser for the OMDb catalog
//!
//! Parses JSON from detail-mode requests (`i=<id>&plot=full`).

use serde::Deserialize;

use crate::error::Result;
use crate::parser::search::check_response_flag;
use crate::types::FilmDetail;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDetailResponse {
    response: String,
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    year: String,
    poster: Option<String>,
    plot: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    runtime: Option<String>,
    actors: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    released: Option<String>,
}

/// Drop the catalog's "N/A" placeholder and blank values.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != "N/A"
    })
}

/// Parse a detail-mode catalog response.
///
/// # Returns
/// * `Ok(FilmDetail)` with "N/A" fields mapped to `None`
/// * `Err(OmdbError::CatalogError)` if the catalog answered `Response: "False"`
pub fn parse_detail_response(json: &str) -> Result<FilmDetail> {
    let raw: RawDetailResponse = serde_json::from_str(json)?;
    check_response_flag(&raw.response, raw.error)?;

    Ok(FilmDetail {
        id: raw.imdb_id,
        title: raw.title,
        year: raw.year,
        poster_url: present(raw.poster),
        plot: present(raw.plot),
        genre: present(raw.genre),
        director: present(raw.director),
        runtime: present(raw.runtime),
        actors: present(raw.actors),
        content_type: present(raw.kind),
        released: present(raw.released),
    })
}
