//! Image URL resolution with memoization and fallback-on-failure.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures_util::future::join_all;
use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::domain::entities::{DEFAULT_QUALITY, ImageCategory, ResolveOptions};
use crate::domain::errors::ResolveError;
use crate::domain::ports::ImageFetchPort;
use crate::infrastructure::config::ResolverConfig;

use super::url_cache::BoundedUrlCache;

/// Well-known logical names resolved by [`ImageResolver::critical_icon_set`].
///
/// Tab-bar entries and playback controls resolve under `icons/`; the
/// built-in category covers under `large/`.
const CRITICAL_ICONS: [&str; 8] = [
    "tab-home.svg",
    "tab-discover.svg",
    "tab-profile.svg",
    "play.svg",
    "pause.svg",
    "prev.svg",
    "next.svg",
    "icon-comment.svg",
];

const CRITICAL_COVERS: [&str; 4] = [
    "default-cover.png",
    "cover-cs.png",
    "cover-physics.png",
    "cover-economics.png",
];

/// Read-only snapshot of resolver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverStats {
    /// Current number of memoized URLs.
    pub cache_size: usize,
    /// Number of URLs recorded as failed.
    pub failed_count: usize,
    /// Configured cache capacity.
    pub max_cache_size: usize,
}

impl std::fmt::Display for ResolverStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} URLs cached, {} failed",
            self.cache_size, self.max_cache_size, self.failed_count
        )
    }
}

/// Resolves logical image references to static-host URLs.
///
/// One instance lives for the whole app session. Resolution is
/// synchronous and does no network I/O; only the preload operations
/// await the fetch port. Cache and failed-set are interior state
/// behind sync locks, so `resolve` never suspends.
pub struct ImageResolver {
    config: ResolverConfig,
    cache: RwLock<BoundedUrlCache>,
    failed: RwLock<HashSet<String>>,
    fetcher: Arc<dyn ImageFetchPort>,
}

impl ImageResolver {
    /// Creates a resolver from explicit configuration and a fetch port.
    #[must_use]
    pub fn new(config: ResolverConfig, fetcher: Arc<dyn ImageFetchPort>) -> Self {
        let cache = RwLock::new(BoundedUrlCache::new(config.max_cache_size));
        Self {
            config,
            cache,
            failed: RwLock::new(HashSet::new()),
            fetcher,
        }
    }

    /// Creates a resolver with default configuration.
    #[must_use]
    pub fn with_defaults(fetcher: Arc<dyn ImageFetchPort>) -> Self {
        Self::new(ResolverConfig::default(), fetcher)
    }

    /// Resolves a logical reference to a usable URL string.
    ///
    /// Total over its inputs: an empty or malformed reference degenerates
    /// to a URL with an empty filename segment rather than an error.
    /// A cache hit short-circuits before the failed-set check; callers
    /// rely on hits returning the remote URL even for URLs later
    /// recorded as failed.
    #[must_use]
    pub fn resolve(&self, reference: &str, options: &ResolveOptions) -> String {
        let filename = strip_reference(reference);
        let category = options
            .category
            .unwrap_or_else(|| ImageCategory::classify(filename));

        let url = self.build_url(filename, category, options);

        if options.cache_enabled {
            if let Some(hit) = self.cache.read().get(&url) {
                return hit.clone();
            }
        }

        if options.fallback && self.failed.read().contains(&url) {
            debug!(url = %url, "URL known to fail, falling back to local reference");
            return filename.to_string();
        }

        if options.cache_enabled {
            self.cache
                .write()
                .insert_with_eviction(url.clone(), url.clone());
            trace!(url = %url, "Memoized resolved URL");
        }

        url
    }

    /// Resolves a reference, then verifies the URL through the fetch port.
    ///
    /// On load failure the URL is recorded as failed; the call then
    /// completes with the stripped local reference when fallback is
    /// enabled, or fails otherwise. No timeout is imposed here.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::LoadFailed`] when the load fails and
    /// `options.fallback` is false.
    pub async fn preload_one(
        &self,
        reference: &str,
        options: &ResolveOptions,
    ) -> Result<String, ResolveError> {
        // Preloads always probe the remote URL, prior failures
        // notwithstanding, so a recovered image clears naturally.
        let probe_options = ResolveOptions {
            fallback: false,
            ..options.clone()
        };
        let url = self.resolve(reference, &probe_options);

        match self.fetcher.fetch(&url).await {
            Ok(()) => {
                trace!(url = %url, "Preload succeeded");
                Ok(url)
            }
            Err(err) => {
                debug!(url = %url, error = %err, "Preload failed, recording URL");
                self.failed.write().insert(url.clone());
                if options.fallback {
                    Ok(strip_reference(reference).to_string())
                } else {
                    Err(ResolveError::LoadFailed { url })
                }
            }
        }
    }

    /// Preloads a batch concurrently, never failing as a whole.
    ///
    /// Each individual failure is downgraded to the stripped local
    /// reference; the result order matches the input order.
    pub async fn preload_many(&self, references: &[&str], options: &ResolveOptions) -> Vec<String> {
        let loads = references.iter().map(|reference| async move {
            match self.preload_one(reference, options).await {
                Ok(url) => url,
                Err(_) => strip_reference(reference).to_string(),
            }
        });
        join_all(loads).await
    }

    /// Resolves the fixed set of UI-critical images by logical name.
    ///
    /// Convenience aggregation over [`resolve`](Self::resolve) with
    /// preset categories; no new logic.
    #[must_use]
    pub fn critical_icon_set(&self) -> HashMap<&'static str, String> {
        let mut set = HashMap::with_capacity(CRITICAL_ICONS.len() + CRITICAL_COVERS.len());

        let icon_opts = ResolveOptions::for_category(ImageCategory::Icons);
        for name in CRITICAL_ICONS {
            set.insert(name, self.resolve(name, &icon_opts));
        }

        let cover_opts = ResolveOptions::for_category(ImageCategory::Large);
        for name in CRITICAL_COVERS {
            set.insert(name, self.resolve(name, &cover_opts));
        }

        set
    }

    /// Returns true if `url` was recorded as failed by an earlier preload.
    #[must_use]
    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.read().contains(url)
    }

    /// Clears the URL cache and the failed set. Idempotent.
    pub fn reset(&self) {
        self.cache.write().clear();
        self.failed.write().clear();
        info!("Resolver cache and failed-set cleared");
    }

    /// Read-only snapshot of cache and failed-set sizes.
    #[must_use]
    pub fn cache_stats(&self) -> ResolverStats {
        ResolverStats {
            cache_size: self.cache.read().len(),
            failed_count: self.failed.read().len(),
            max_cache_size: self.config.max_cache_size,
        }
    }

    fn build_url(&self, filename: &str, category: ImageCategory, options: &ResolveOptions) -> String {
        let url = format!(
            "{}/{}/{}",
            self.config.base_url,
            category.segment(),
            filename
        );

        // Fixed parameter order: width, height, quality.
        let mut params = Vec::new();
        if let Some(width) = options.width {
            params.push(format!("width={width}"));
        }
        if let Some(height) = options.height {
            params.push(format!("height={height}"));
        }
        if options.quality != DEFAULT_QUALITY {
            params.push(format!("quality={}", options.quality));
        }

        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params.join("&"))
        }
    }
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field("config", &self.config)
            .field("stats", &self.cache_stats())
            .finish_non_exhaustive()
    }
}

/// Reduces a path-like reference to its bare filename, dropping
/// directory prefixes and the conventional `images/` marker.
fn strip_reference(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
