//! Resolution options.

use super::category::ImageCategory;

/// Quality value that is implied when no `quality` parameter is sent.
pub const DEFAULT_QUALITY: u8 = 80;

/// Per-call configuration for URL resolution.
///
/// All fields carry their stated defaults via [`Default`], so callers
/// typically use struct-update syntax over `ResolveOptions::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Forces a serving category. `None` selects rule-based classification
    /// of the filename.
    pub category: Option<ImageCategory>,
    /// When true, a URL previously observed to fail resolves back to the
    /// stripped local reference instead of the remote URL.
    pub fallback: bool,
    /// When true, successful resolutions are memoized in the URL cache.
    pub cache_enabled: bool,
    /// Encoded as a `quality` query parameter when different from
    /// [`DEFAULT_QUALITY`].
    pub quality: u8,
    /// Encoded as a `width` query parameter when present.
    pub width: Option<u32>,
    /// Encoded as a `height` query parameter when present.
    pub height: Option<u32>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            category: None,
            fallback: true,
            cache_enabled: true,
            quality: DEFAULT_QUALITY,
            width: None,
            height: None,
        }
    }
}

impl ResolveOptions {
    /// Options pinned to a fixed category, other fields at their defaults.
    #[must_use]
    pub fn for_category(category: ImageCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Sets target dimensions, encoded as `width`/`height` parameters.
    #[must_use]
    pub const fn sized(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}
