// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod candidate;
pub mod href;
pub mod payload;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Candidate Domain
pub use candidate::{
    dedup_candidates, max_declared_edge, rank_candidates, IconCandidate, IconKind, SiteInfo,
    APPLE_TOUCH_DEFAULT_SIZE, GENERIC_DEFAULT_SIZE, MANIFEST_MIN_SIZE, MIN_DECLARED_SIZE,
    OG_IMAGE_SIZE,
};

// Payload Domain
pub use payload::{
    validate_icon_content, validated_payload, whitelisted_mime, ProbeFailureReason, ProbeOutcome,
    ValidatedPayload, MIME_WHITELIST, MIN_EDGE_PX,
};

// Href Resolution
pub use href::{bare_domain, host_of, page_directory, page_origin, resolve_href};
