//! paperpod-images - Image URL resolution and caching for the PaperPod client.
//!
//! This crate maps logical image references (local paths or bare
//! filenames) onto the PaperPod static-image host, with rule-based
//! category routing, resize/quality query hints, bounded URL
//! memoization, and a fallback set that remembers URLs known to have
//! failed so repeat lookups short-circuit to the local reference.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters and the resolver itself.
pub mod infrastructure;

pub use domain::{
    DEFAULT_QUALITY, FetchError, FetchResult, ImageCategory, ImageFetchPort, ResolveError,
    ResolveOptions,
};
pub use infrastructure::{
    BoundedUrlCache, ConfigError, HttpImageFetcher, ImageResolver, ResolverConfig, ResolverStats,
};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
