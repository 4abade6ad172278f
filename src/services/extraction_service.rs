// src/services/extraction_service.rs
//
// Extraction Service
//
// Scans page markup for the five icon candidate patterns and the page
// title. Pure text processing: no network access, no shared state.
//
// The scan is tag-oriented: candidate tags are located first, then their
// attributes are read individually, so the patterns are independent of
// attribute order within a tag. The regex strategy is an implementation
// detail behind `extract`; callers never see it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{
    max_declared_edge, resolve_href, IconCandidate, IconKind, SiteInfo,
    APPLE_TOUCH_DEFAULT_SIZE, GENERIC_DEFAULT_SIZE, MIN_DECLARED_SIZE, OG_IMAGE_SIZE,
};

// Tag finders. Attribute inspection happens per-tag afterwards.
static LINK_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<link\b[^>]*>").unwrap());
static META_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<meta\b[^>]*>").unwrap());

// First <title> element; text content only, entities left as-is
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>([^<]+)</title>").unwrap());

// name="value" | name='value' | name=value
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)([a-zA-Z-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

// dimension pairs embedded in a URL path: 32x32, 180x180
static PATH_DIMS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{2,4})x(\d{2,4})").unwrap());

// trailing digit segment before the extension: icon-192.png, favicon_96.ico
static PATH_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_](\d{2,3})\.\w+$").unwrap());

/// Candidate Extractor: `extract(html, base_url)` is the whole surface.
#[derive(Debug, Default)]
pub struct ExtractionService;

impl ExtractionService {
    pub fn new() -> Self {
        Self
    }

    /// Scans markup for the page title and every icon candidate pattern.
    ///
    /// Never fails: one pattern matching nothing (or matching garbage)
    /// does not stop the others, and a totally unparseable page yields an
    /// empty candidate list with no title. Every candidate URL is resolved
    /// to absolute form; hrefs that cannot be resolved are dropped.
    pub fn extract(&self, html: &str, base_url: &str) -> SiteInfo {
        let title = extract_title(html);
        let mut candidates: Vec<IconCandidate> = Vec::new();
        let mut manifest_seen = false;

        for tag_match in LINK_TAG_RE.find_iter(html) {
            let tag = tag_match.as_str();
            let rel = rel_tokens(tag);
            let Some(href) = attr_value(tag, "href").filter(|h| !h.is_empty()) else {
                continue;
            };

            if rel.iter().any(|t| t.starts_with("apple-touch-icon")) {
                // Pattern 1: apple-touch-icon, precomposed included
                let size = attr_value(tag, "sizes")
                    .as_deref()
                    .and_then(max_declared_edge)
                    .unwrap_or(APPLE_TOUCH_DEFAULT_SIZE);
                if let Some(url) = resolve_href(base_url, &href) {
                    candidates.push(IconCandidate::new(url, size, IconKind::AppleTouchIcon));
                }
            } else if rel.iter().any(|t| t == "manifest") {
                // Pattern 4: one manifest reference, expanded later by the
                // fallback chain
                if manifest_seen {
                    continue;
                }
                if let Some(url) = resolve_href(base_url, &href) {
                    candidates.push(IconCandidate::new(url, 0, IconKind::Manifest));
                    manifest_seen = true;
                }
            } else if rel.iter().any(|t| t == "icon") {
                match attr_value(tag, "sizes").as_deref().and_then(max_declared_edge) {
                    // Pattern 2: explicit size, kept only at >= 32
                    Some(size) if size >= MIN_DECLARED_SIZE => {
                        if let Some(url) = resolve_href(base_url, &href) {
                            candidates.push(IconCandidate::new(url, size, IconKind::SizedIcon));
                        }
                    }
                    // declared but too small to be worth probing
                    Some(_) => {}
                    // Pattern 3: no usable size attribute; infer from the URL
                    None => {
                        if let Some(url) = resolve_href(base_url, &href) {
                            let size =
                                infer_size_from_url(&url).unwrap_or(GENERIC_DEFAULT_SIZE);
                            candidates.push(IconCandidate::new(url, size, IconKind::GenericIcon));
                        }
                    }
                }
            }
        }

        // Pattern 5: one og:image with a fixed synthetic size
        if let Some(content) = first_og_image(html) {
            if let Some(url) = resolve_href(base_url, &content) {
                candidates.push(IconCandidate::new(url, OG_IMAGE_SIZE, IconKind::OgImage));
            }
        }

        SiteInfo::new(title, candidates)
    }
}

fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Lowercased whitespace-separated rel tokens of a tag.
fn rel_tokens(tag: &str) -> Vec<String> {
    attr_value(tag, "rel")
        .map(|rel| {
            rel.to_ascii_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// First value of the named attribute within a single tag, any quote style.
fn attr_value(tag: &str, name: &str) -> Option<String> {
    for caps in ATTR_RE.captures_iter(tag) {
        if caps[1].eq_ignore_ascii_case(name) {
            let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4));
            return value.map(|m| m.as_str().trim().to_string());
        }
    }
    None
}

/// First og:image meta content in document order.
fn first_og_image(html: &str) -> Option<String> {
    for tag_match in META_TAG_RE.find_iter(html) {
        let tag = tag_match.as_str();
        let is_og_image = attr_value(tag, "property")
            .or_else(|| attr_value(tag, "name"))
            .map(|p| p.eq_ignore_ascii_case("og:image"))
            .unwrap_or(false);
        if is_og_image {
            if let Some(content) = attr_value(tag, "content").filter(|c| !c.is_empty()) {
                return Some(content);
            }
        }
    }
    None
}

/// Edge length hinted by digits in the URL path: a WxH pair anywhere, or a
/// 2-3 digit segment right before the extension.
fn infer_size_from_url(url: &str) -> Option<u32> {
    let path = url.split(['?', '#']).next().unwrap_or(url);

    if let Some(caps) = PATH_DIMS_RE.captures(path) {
        let w: u32 = caps[1].parse().ok()?;
        let h: u32 = caps[2].parse().ok()?;
        return Some(w.max(h));
    }

    PATH_SUFFIX_RE
        .captures(path)
        .and_then(|caps| caps[1].parse().ok())
}
