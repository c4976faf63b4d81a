//! HTTP fetcher for the recently viewed listing.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{LibraryError, LibraryResult};

/// Source of the raw listing document.
#[async_trait]
pub trait LibrarySource: Send + Sync {
    /// Fetch the listing body as text.
    ///
    /// # Errors
    ///
    /// Returns an error when the listing cannot be retrieved.
    async fn recently_viewed(&self) -> LibraryResult<String>;
}

/// Fetches the listing with a single GET; no retries.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    client: Client,
    endpoint: Url,
}

impl LibraryClient {
    /// Wrap an HTTP client and the listing endpoint.
    #[must_use]
    pub const fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn http_error(&self, source: reqwest::Error) -> LibraryError {
        LibraryError::Http {
            url: self.endpoint.to_string(),
            source,
        }
    }
}

#[async_trait]
impl LibrarySource for LibraryClient {
    async fn recently_viewed(&self) -> LibraryResult<String> {
        debug!(url = %self.endpoint, "requesting recently viewed listing");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static("application/xml"))
            .send()
            .await
            .map_err(|source| self.http_error(source))?
            .error_for_status()
            .map_err(|source| self.http_error(source))?;

        let body = response
            .text()
            .await
            .map_err(|source| self.http_error(source))?;
        debug!(bytes = body.len(), "listing received");
        Ok(body)
    }
}
