// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// DTOs are the wire representations crossing the delegation bridge.
// They are simple, serializable structs; conversion FROM domain entities
// only (never TO, except candidate lists handed back for resolution).

use serde::{Deserialize, Serialize};

use crate::domain::{IconCandidate, IconKind, SiteInfo};

// ============================================================================
// PAGE INFO DTOs
// ============================================================================

/// One icon candidate as it crosses the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCandidateDto {
    pub url: String,
    pub size_hint: u32,
    pub kind: IconKind,
}

impl From<IconCandidate> for IconCandidateDto {
    fn from(candidate: IconCandidate) -> Self {
        Self {
            url: candidate.url,
            size_hint: candidate.size_hint,
            kind: candidate.kind,
        }
    }
}

impl From<IconCandidateDto> for IconCandidate {
    fn from(dto: IconCandidateDto) -> Self {
        IconCandidate::new(dto.url, dto.size_hint, dto.kind)
    }
}

/// Reply to a page fetch: title plus ranked candidates. The default value
/// (no title, no candidates) doubles as the fail-soft reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfoDto {
    pub title: Option<String>,
    pub candidates: Vec<IconCandidateDto>,
}

impl From<SiteInfo> for PageInfoDto {
    fn from(info: SiteInfo) -> Self {
        Self {
            title: info.title,
            candidates: info
                .candidates
                .into_iter()
                .map(IconCandidateDto::from)
                .collect(),
        }
    }
}
