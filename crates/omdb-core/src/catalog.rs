//! Catalog API
//!
//! [`Catalog`] is the seam the query controller talks to. [`OmdbCatalog`]
//! implements it over the HTTP client and the JSON parsers.

use std::future::Future;
use std::sync::Arc;

use crate::client::{ClientConfig, OmdbClient};
use crate::error::{OmdbError, Result};
use crate::parser::{parse_detail_response, parse_search_response};
use crate::types::{FilmDetail, SearchPage, SearchRequest};

/// Remote film catalog as seen by the controller.
///
/// Implementations must be shareable across tasks; each call is one
/// independent request.
pub trait Catalog: Send + Sync + 'static {
    /// Run a search-mode query.
    fn search(&self, request: &SearchRequest) -> impl Future<Output = Result<SearchPage>> + Send;

    /// Load the full record of a single title.
    fn film(&self, imdb_id: &str) -> impl Future<Output = Result<FilmDetail>> + Send;
}

impl<T: Catalog> Catalog for Arc<T> {
    fn search(&self, request: &SearchRequest) -> impl Future<Output = Result<SearchPage>> + Send {
        (**self).search(request)
    }

    fn film(&self, imdb_id: &str) -> impl Future<Output = Result<FilmDetail>> + Send {
        (**self).film(imdb_id)
    }
}

/// OMDb-backed catalog
///
/// # Example
/// ```no_run
/// use omdb_core::{Catalog, ClientConfig, ContentType, OmdbCatalog, SearchRequest};
///
/// # async fn example() -> Result<(), omdb_core::OmdbError> {
/// let catalog = OmdbCatalog::with_config(ClientConfig::with_api_key("your-key"))?;
/// let request = SearchRequest {
///     term: "Batman".to_string(),
///     content_type: ContentType::Movie,
///     page: 1,
/// };
/// let page = catalog.search(&request).await?;
/// println!("{} results", page.total_results);
/// # Ok(())
/// # }
/// ```
pub struct OmdbCatalog {
    client: OmdbClient,
}

impl OmdbCatalog {
    /// Create a catalog from client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: OmdbClient::with_config(config)?,
        })
    }
}

impl Catalog for OmdbCatalog {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        if request.term.trim().is_empty() {
            return Err(OmdbError::InvalidQuery("search term cannot be empty".to_string()));
        }

        let url = self.client.search_url(request);
        let body = self.client.fetch(&url).await?;
        parse_search_response(&body)
    }

    async fn film(&self, imdb_id: &str) -> Result<FilmDetail> {
        let id = imdb_id.trim();
        if id.is_empty() {
            return Err(OmdbError::InvalidId(imdb_id.to_string()));
        }

        let url = self.client.detail_url(id);
        let body = self.client.fetch(&url).await?;
        parse_detail_response(&body)
    }
}
