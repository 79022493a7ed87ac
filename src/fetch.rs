//! Image byte fetching with one bounded fallback retry.

use async_trait::async_trait;
use thiserror::Error;

/// Suffix appended for the fallback attempt: the host serves a scaled
/// variant under this query that often still carries EXIF.
pub const DEFAULT_FALLBACK_SUFFIX: &str = "?format=750w";

/// Accept header sent with image requests.
pub const IMAGE_ACCEPT: &str = "image/jpeg,image/jpg,image/*,*/*";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Source of raw image bytes. The contract is "bytes in, or failure";
/// implementations hold no per-call state, so retrying is cheap.
#[async_trait]
pub trait BytesFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP GET fetcher over a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BytesFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, IMAGE_ACCEPT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Fetch `url`; on any failure retry exactly once against `url + suffix`.
/// The second failure is returned as-is.
pub async fn fetch_with_fallback(
    fetcher: &dyn BytesFetcher,
    url: &str,
    suffix: &str,
) -> Result<Vec<u8>, FetchError> {
    match fetcher.fetch(url).await {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            let fallback = format!("{url}{suffix}");
            log::debug!("fetch failed for {url} ({err}), retrying {fallback}");
            fetcher.fetch(&fallback).await
        }
    }
}
