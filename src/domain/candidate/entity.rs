// src/domain/candidate/entity.rs
//
// Icon Candidate Value Objects
//
// Pure, immutable data describing what a page declares about its icons.
// Candidates are knowledge about possible icons, not fetched images.

use serde::{Deserialize, Serialize};

use super::invariants::rank_candidates;

/// Which structural pattern in the markup produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// `<link rel="apple-touch-icon">`, including the precomposed variant
    AppleTouchIcon,

    /// Icon link carrying an explicit, usable size attribute
    SizedIcon,

    /// Icon/shortcut-icon link without a usable size attribute
    GenericIcon,

    /// `<link rel="manifest">`; expanded later by the fallback chain
    Manifest,

    /// `<meta property="og:image">`
    OgImage,
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconKind::AppleTouchIcon => write!(f, "apple-touch-icon"),
            IconKind::SizedIcon => write!(f, "sized-icon"),
            IconKind::GenericIcon => write!(f, "generic-icon"),
            IconKind::Manifest => write!(f, "manifest"),
            IconKind::OgImage => write!(f, "og-image"),
        }
    }
}

/// A discovered, not-yet-validated reference to a potential icon image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCandidate {
    /// Absolute resource location. Relative hrefs are resolved against the
    /// page's base URL before a candidate is constructed, never stored
    /// relative.
    pub url: String,

    /// Declared or inferred edge length in pixels; 0 when unknown
    pub size_hint: u32,

    /// The pattern that produced this candidate
    pub kind: IconKind,
}

impl IconCandidate {
    pub fn new(url: impl Into<String>, size_hint: u32, kind: IconKind) -> Self {
        Self {
            url: url.into(),
            size_hint,
            kind,
        }
    }
}

/// Everything one page fetch taught us: the page title plus its ranked icon
/// candidates.
///
/// Constructed once per resolution request and immutable thereafter. Not
/// persisted by this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Trimmed `<title>` text; `None` when absent or the fetch failed
    pub title: Option<String>,

    /// Candidates sorted by `size_hint` descending, stable on ties by
    /// discovery order. Kind never participates in the ordering: an
    /// og-image with synthetic size 200 outranks a declared 180px
    /// apple-touch-icon, and callers depend on that.
    pub candidates: Vec<IconCandidate>,
}

impl SiteInfo {
    /// Builds a `SiteInfo`, enforcing the candidate ordering and
    /// dedup-by-url invariants on the way in.
    pub fn new(title: Option<String>, candidates: Vec<IconCandidate>) -> Self {
        Self {
            title: title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            candidates: rank_candidates(candidates),
        }
    }

    /// The fail-soft result: no title, no candidates.
    pub fn empty() -> Self {
        Self {
            title: None,
            candidates: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_info_trims_title_and_drops_blank() {
        let info = SiteInfo::new(Some("  Example Site \n".to_string()), Vec::new());
        assert_eq!(info.title.as_deref(), Some("Example Site"));

        let blank = SiteInfo::new(Some("   ".to_string()), Vec::new());
        assert_eq!(blank.title, None);
    }

    #[test]
    fn test_site_info_sorts_candidates_by_size_descending() {
        let info = SiteInfo::new(
            None,
            vec![
                IconCandidate::new("https://ex.com/small.png", 32, IconKind::GenericIcon),
                IconCandidate::new("https://ex.com/big.png", 192, IconKind::SizedIcon),
                IconCandidate::new("https://ex.com/touch.png", 180, IconKind::AppleTouchIcon),
            ],
        );

        let sizes: Vec<u32> = info.candidates.iter().map(|c| c.size_hint).collect();
        assert_eq!(sizes, vec![192, 180, 32]);
    }

    #[test]
    fn test_og_image_outranks_smaller_declared_icons() {
        // Synthetic og size 200 beats a declared 180 apple-touch-icon.
        // This ordering is load-bearing for callers; kind must not break it.
        let info = SiteInfo::new(
            None,
            vec![
                IconCandidate::new("https://ex.com/touch.png", 180, IconKind::AppleTouchIcon),
                IconCandidate::new("https://ex.com/og.png", 200, IconKind::OgImage),
            ],
        );

        assert_eq!(info.candidates[0].kind, IconKind::OgImage);
        assert_eq!(info.candidates[1].kind, IconKind::AppleTouchIcon);
    }

    #[test]
    fn test_empty_site_info() {
        let info = SiteInfo::empty();
        assert_eq!(info.title, None);
        assert!(info.candidates.is_empty());
    }

    #[test]
    fn test_icon_kind_display() {
        assert_eq!(IconKind::AppleTouchIcon.to_string(), "apple-touch-icon");
        assert_eq!(IconKind::SizedIcon.to_string(), "sized-icon");
        assert_eq!(IconKind::GenericIcon.to_string(), "generic-icon");
        assert_eq!(IconKind::Manifest.to_string(), "manifest");
        assert_eq!(IconKind::OgImage.to_string(), "og-image");
    }
}
