// src/domain/href.rs
//
// Href Resolution Rules
//
// Every candidate URL is made absolute before it enters the pipeline.
// The same rules apply to markup hrefs and to manifest icon entries.

use url::Url;

/// Resolves an href found in markup against the URL of the page it came from.
///
/// Rules, in order:
/// - absolute `http(s)://` hrefs pass through unchanged
/// - protocol-relative `//host/path` hrefs are pinned to `https:`
/// - root-relative `/path` hrefs are joined to the page origin
/// - anything else is joined to the page directory (path up to and
///   including the last `/`)
///
/// Returns `None` for empty hrefs or an unparseable base URL.
pub fn resolve_href(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    if href.starts_with("//") {
        return Some(format!("https:{}", href));
    }

    if href.starts_with('/') {
        return Some(format!("{}{}", page_origin(base_url)?, href));
    }

    Some(format!("{}{}", page_directory(base_url)?, href))
}

/// The scheme://host[:port] part of a page URL, without a trailing slash.
pub fn page_origin(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;
    let origin = parsed.origin();
    if !matches!(origin, url::Origin::Tuple(..)) {
        return None;
    }
    Some(origin.ascii_serialization())
}

/// The page URL truncated to its directory: origin plus the path up to and
/// including the last `/`.
pub fn page_directory(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;
    let path = parsed.path();
    let dir_end = path.rfind('/')? + 1;
    Some(format!("{}{}", page_origin(page_url)?, &path[..dir_end]))
}

/// The host part of a URL, if any.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .map(|host| host.to_string())
}

/// Strips a leading `www.` label. Third-party icon services index sites by
/// their bare domain.
pub fn bare_domain(domain: &str) -> String {
    let domain = domain.trim();
    if domain.len() > 4 && domain[..4].eq_ignore_ascii_case("www.") {
        domain[4..].to_string()
    } else {
        domain.to_string()
    }
}
