//! Port definition for the image-load primitive.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult = std::result::Result<(), FetchError>;

/// Errors reported by the image-load primitive.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),
    /// The host answered with a non-success status.
    #[error("http status {0}")]
    Status(u16),
}

/// Port for verifying that an image URL is actually loadable.
///
/// The resolver treats this as an opaque two-outcome collaborator:
/// a URL either loads or it does not. No timeout is imposed at the
/// port level; implementations bring their own.
#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Attempts to load the image at `url`.
    async fn fetch(&self, url: &str) -> FetchResult;
}
