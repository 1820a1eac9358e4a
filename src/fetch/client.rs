//! HTTP client for downloading the remote source documents.

use super::types::{missing_sources, RawDocument, SourceDocuments, SourceLocations};
use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, USER_AGENT};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::collections::BTreeMap;

/// Client for fetching JSON source documents
pub struct PayloadClient {
    client: Client,
}

impl PayloadClient {
    /// Create a new client
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Fetch a single document and parse its body as JSON
    ///
    /// # Errors
    /// * `FetchError::RequestFailed` - transport error
    /// * `FetchError::BadStatus` - any non-success HTTP status
    /// * `FetchError::InvalidJson` - body is not valid JSON
    pub fn fetch_json(&self, name: &str, url: &str) -> Result<RawDocument, FetchError> {
        info!("Getting {}...", name);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                name: name.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        debug!("Received {} bytes for {}", body.len(), name);

        serde_json::from_str(&body).map_err(|source| FetchError::InvalidJson {
            name: name.to_string(),
            source,
        })
    }

    /// Fetch every location, stopping at the first failure
    ///
    /// Locations are fetched in name order.
    pub fn fetch_all(
        &self,
        locations: &SourceLocations,
    ) -> Result<BTreeMap<String, RawDocument>, FetchError> {
        locations
            .iter()
            .map(|(name, url)| Ok((name.clone(), self.fetch_json(name, url)?)))
            .collect()
    }

    /// Fetch the four documents the payload is built from
    ///
    /// All required names are checked before any request is made.
    pub fn fetch_sources(&self, locations: &SourceLocations) -> Result<SourceDocuments, FetchError> {
        if let Some(name) = missing_sources(locations).first() {
            return Err(FetchError::MissingSource(name.to_string()));
        }

        let fetched = self.fetch_all(locations)?;
        SourceDocuments::from_fetched(fetched)
    }
}

/// Check that a source location is an http(s) URL
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
