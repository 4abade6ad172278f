// src/domain/candidate/mod.rs
pub mod entity;
pub mod invariants;

pub use entity::{IconCandidate, IconKind, SiteInfo};
pub use invariants::{
    dedup_candidates, max_declared_edge, rank_candidates, APPLE_TOUCH_DEFAULT_SIZE,
    GENERIC_DEFAULT_SIZE, MANIFEST_MIN_SIZE, MIN_DECLARED_SIZE, OG_IMAGE_SIZE,
};
