// src/domain/payload/mod.rs
pub mod entity;
pub mod invariants;

pub use entity::{ProbeFailureReason, ProbeOutcome, ValidatedPayload};
pub use invariants::{
    validate_icon_content, validated_payload, whitelisted_mime, MIME_WHITELIST, MIN_EDGE_PX,
};
