//! Infrastructure layer with external service adapters.

/// Resolver configuration.
pub mod config;
/// Image URL resolution, caching and fetching.
pub mod image;

pub use config::{ConfigError, ResolverConfig};
pub use image::{BoundedUrlCache, HttpImageFetcher, ImageResolver, ResolverStats};
