pub mod http_fetcher;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Image request returned status {0}")]
    Status(u16),
    #[error("Image body is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Retrieves the raw bytes of an image addressed by URL.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
