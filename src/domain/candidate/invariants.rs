// src/domain/candidate/invariants.rs
//
// Candidate ordering and size rules.
//
// Invariants that must hold for every candidate list handed to the
// fallback chain:
//
// 1. URLs are absolute (resolved before construction)
// 2. One candidate per URL; the first discovery wins
// 3. Sorted by size_hint descending; ties keep discovery order
// 4. Kind never participates in the ordering

use super::entity::IconCandidate;

/// Assumed edge length for an apple-touch-icon without a size attribute.
pub const APPLE_TOUCH_DEFAULT_SIZE: u32 = 180;

/// Smallest declared size worth keeping for an explicitly sized icon link.
pub const MIN_DECLARED_SIZE: u32 = 32;

/// Assumed edge length for an icon link with no usable size information.
pub const GENERIC_DEFAULT_SIZE: u32 = 32;

/// Synthetic edge length for og:image candidates. Deliberately above the
/// apple-touch default so social images rank first among parsed candidates,
/// even though the chain defers probing them.
pub const OG_IMAGE_SIZE: u32 = 200;

/// Smallest declared edge for a manifest icon entry to be considered.
pub const MANIFEST_MIN_SIZE: u32 = 48;

/// Drops candidates whose URL was already seen, keeping the first
/// occurrence.
pub fn dedup_candidates(candidates: Vec<IconCandidate>) -> Vec<IconCandidate> {
    let mut seen: Vec<String> = Vec::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|candidate| {
            if seen.iter().any(|url| url == &candidate.url) {
                false
            } else {
                seen.push(candidate.url.clone());
                true
            }
        })
        .collect()
}

/// Dedups and orders a raw discovery list: size_hint descending, stable on
/// ties so discovery order survives.
pub fn rank_candidates(candidates: Vec<IconCandidate>) -> Vec<IconCandidate> {
    let mut ranked = dedup_candidates(candidates);
    ranked.sort_by(|a, b| b.size_hint.cmp(&a.size_hint));
    ranked
}

/// The largest edge declared in a `sizes`-style list ("48x48 96x96").
/// Tokens that are not WxH pairs ("any") are ignored.
pub fn max_declared_edge(sizes: &str) -> Option<u32> {
    sizes
        .split_whitespace()
        .filter_map(|token| {
            let (w, h) = token.split_once(|c: char| c == 'x' || c == 'X')?;
            let w: u32 = w.trim().parse().ok()?;
            let h: u32 = h.trim().parse().ok()?;
            Some(w.max(h))
        })
        .max()
}
