// src/domain/payload/invariants.rs
//
// Icon content validation.
//
// A ValidatedPayload may only be built here, and only after:
// 1. Content type matches the mime whitelist
// 2. Byte length clears the caller-supplied floor
// 3. Raster content decodes with both dimensions >= MIN_EDGE_PX
//
// Vector (svg) content skips the decode: dimension checks are meaningless
// for it.

use super::entity::ValidatedPayload;

/// Content types accepted as icons. Matched case-insensitively as
/// substrings, so charset parameters and similar suffixes still match.
pub const MIME_WHITELIST: [&str; 7] = [
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/x-icon",
    "image/vnd.microsoft.icon",
];

/// Smallest acceptable edge for a decodable raster icon.
pub const MIN_EDGE_PX: u32 = 16;

/// The canonical whitelist entry matching a raw Content-Type header, or
/// `None` when the type is not acceptable.
pub fn whitelisted_mime(content_type: &str) -> Option<&'static str> {
    let normalized = content_type.to_ascii_lowercase();
    MIME_WHITELIST
        .iter()
        .find(|mime| normalized.contains(**mime))
        .copied()
}

/// Decides whether fetched content is an acceptable icon.
pub fn validate_icon_content(content_type: &str, bytes: &[u8], min_bytes: usize) -> bool {
    let Some(mime) = whitelisted_mime(content_type) else {
        return false;
    };

    if bytes.len() < min_bytes {
        return false;
    }

    if mime == "image/svg+xml" {
        return true;
    }

    match image::load_from_memory(bytes) {
        Ok(decoded) => decoded.width() >= MIN_EDGE_PX && decoded.height() >= MIN_EDGE_PX,
        Err(_) => false,
    }
}

/// Runs the full validation and, on success, builds the payload with its
/// canonical mime type.
pub fn validated_payload(
    content_type: &str,
    bytes: Vec<u8>,
    min_bytes: usize,
) -> Option<ValidatedPayload> {
    if !validate_icon_content(content_type, &bytes, min_bytes) {
        return None;
    }
    let mime = whitelisted_mime(content_type)?;
    Some(ValidatedPayload::new(mime.to_string(), bytes))
}
