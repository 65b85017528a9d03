//! Image URL handling infrastructure.
//!
//! This module provides:
//! - Logical-reference to static-host URL resolution
//! - Bounded URL memoization with FIFO eviction
//! - A failed-URL set backing fallback-to-local behavior
//! - An HTTP adapter for the image-load port

mod http_fetcher;
mod resolver;
mod url_cache;

pub use http_fetcher::HttpImageFetcher;
pub use resolver::{ImageResolver, ResolverStats};
pub use url_cache::BoundedUrlCache;
