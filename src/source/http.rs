//! HTTP text source

use super::{Retrieved, TextSource};
use crate::error::{ErrorCode, ErrorExt, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Text fetched when no URL is configured
pub const DEFAULT_URL: &str = "https://gutenberg.net.au/ebooks01/0100021.txt";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches text with a single GET request
///
/// A non-success status is reported as [`Retrieved::NoContent`]; only
/// transport failures are errors.
pub struct HttpTextSource {
    client: Client,
    url: String,
}

impl HttpTextSource {
    /// Create a source for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder().timeout(timeout).build().to_retrieval_error(
            ErrorCode::RETRIEVAL_CLIENT_SETUP,
            "failed to create HTTP client",
            &url,
        )?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn fetch(&self) -> Result<Retrieved> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .to_retrieval_error(ErrorCode::RETRIEVAL_TRANSPORT, "request failed", &self.url)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Failed to retrieve the text from {}. Status: {}",
                self.url, status
            );
            return Ok(Retrieved::NoContent {
                reason: format!("HTTP status {}", status),
            });
        }

        let body = response
            .text()
            .await
            .to_retrieval_error(
                ErrorCode::RETRIEVAL_TRANSPORT,
                "failed to read response body",
                &self.url,
            )?;
        debug!("Retrieved {} bytes from {}", body.len(), self.url);

        Ok(Retrieved::from_text(body))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
