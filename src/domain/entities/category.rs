//! Image category classification.

/// Remote path segment an image is served from.
///
/// The static-image host organizes files into three fixed subdirectories;
/// the variants map one-to-one onto those directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    /// Full-width artwork: podcast covers, the app logo, splash imagery.
    Large,
    /// Small UI glyphs: tab-bar icons, playback controls, SVG assets.
    Icons,
    /// Everything else served from the static host.
    Assets,
}

/// Filenames always served from `large/`, checked before any icon heuristic.
/// Cover art and logo images for the built-in podcast categories.
const LARGE_FILES: [&str; 7] = [
    "logo.png",
    "logo.svg",
    "splash.png",
    "default-cover.png",
    "cover-cs.png",
    "cover-physics.png",
    "cover-economics.png",
];

/// Substrings that mark a filename as a UI glyph even without "icon" in
/// its name (playback controls, tab-bar entries, common button labels).
const ICON_LABEL_HINTS: [&str; 7] = ["play", "pause", "arrow", "tab-", "star", "share", "comment"];

impl ImageCategory {
    /// Classifies a bare filename into its serving category.
    ///
    /// Matching is case-insensitive. The large allow-list is consulted
    /// first, then the icon heuristics; first match wins, everything
    /// else lands in `Assets`.
    #[must_use]
    pub fn classify(filename: &str) -> Self {
        let lower = filename.to_ascii_lowercase();

        if LARGE_FILES.contains(&lower.as_str()) {
            return Self::Large;
        }

        if lower.contains("icon")
            || lower.ends_with(".svg")
            || ICON_LABEL_HINTS.iter().any(|hint| lower.contains(hint))
        {
            return Self::Icons;
        }

        Self::Assets
    }

    /// Returns the remote subdirectory name for this category.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Icons => "icons",
            Self::Assets => "assets",
        }
    }
}

impl std::fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("logo.png" ; "logo")]
    #[test_case("splash.png" ; "splash")]
    #[test_case("default-cover.png" ; "default_cover")]
    #[test_case("cover-physics.png" ; "category_cover")]
    #[test_case("LOGO.PNG" ; "uppercase")]
    #[test_case("Cover-Economics.png" ; "mixed_case")]
    fn large_allow_list(filename: &str) {
        assert_eq!(ImageCategory::classify(filename), ImageCategory::Large);
    }

    #[test_case("user-icon.png" ; "icon_substring")]
    #[test_case("browse.svg" ; "svg_extension")]
    #[test_case("play.png" ; "playback_label")]
    #[test_case("pause.png" ; "pause_label")]
    #[test_case("tab-home.png" ; "tab_bar_label")]
    #[test_case("share-filled.png" ; "share_label")]
    #[test_case("ICON-close.PNG" ; "uppercase_icon")]
    fn icon_heuristics(filename: &str) {
        assert_eq!(ImageCategory::classify(filename), ImageCategory::Icons);
    }

    #[test_case("banner.png" ; "banner")]
    #[test_case("paper-thumbnail.jpg" ; "thumbnail")]
    #[test_case("avatar-default.webp" ; "avatar")]
    #[test_case("" ; "empty")]
    fn everything_else_is_assets(filename: &str) {
        assert_eq!(ImageCategory::classify(filename), ImageCategory::Assets);
    }

    #[test]
    fn large_list_wins_over_icon_heuristics() {
        // logo.svg ends in .svg but sits on the large allow-list.
        assert_eq!(ImageCategory::classify("logo.svg"), ImageCategory::Large);
    }

    #[test]
    fn segment_names_match_remote_directories() {
        assert_eq!(ImageCategory::Large.segment(), "large");
        assert_eq!(ImageCategory::Icons.segment(), "icons");
        assert_eq!(ImageCategory::Assets.segment(), "assets");
    }
}
