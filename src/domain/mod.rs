//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{DEFAULT_QUALITY, ImageCategory, ResolveOptions};
pub use errors::ResolveError;
pub use ports::{FetchError, FetchResult, ImageFetchPort};
