//! Domain error types.

use thiserror::Error;

/// Errors surfaced by the resolver.
///
/// Resolution itself is total; the only failure path is a preload whose
/// underlying load reported an error while fallback was disabled.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The image-load primitive reported a failure and the caller
    /// disabled fallback to the local reference.
    #[error("image load failed: {url}")]
    LoadFailed {
        /// The remote URL that failed to load.
        url: String,
    },
}
