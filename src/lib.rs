// src/lib.rs
// NavHub - New tab dashboard backend
//
// Architecture:
// - Domain-centric: candidates and payloads are value objects with
//   explicit invariants
// - Fail-soft: icon resolution always succeeds with an optional result;
//   no error value escapes the pipeline's outer boundary
// - Single network unit: every fetch goes through the injected
//   ResourceFetcher port
// - Application layer: DTOs, commands, and the delegation bridge for
//   network-restricted callers

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain (value objects and invariants)
// ============================================================================

pub use domain::{
    bare_domain,
    dedup_candidates,
    max_declared_edge,
    page_directory,
    page_origin,
    rank_candidates,
    resolve_href,
    validate_icon_content,
    // Candidate
    IconCandidate,
    IconKind,
    ProbeFailureReason,
    ProbeOutcome,
    SiteInfo,
    // Payload
    ValidatedPayload,
    MIME_WHITELIST,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_log_handlers, DomainEvent, EventBus, IconResolutionExhausted, IconResolved,
    SiteInfoFetched,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ExtractionService, IconResolutionService, PageService, ProbeConfig, ProbeService,
    ResolutionTuning,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{FetchedResource, HttpResourceFetcher, ResourceFetcher};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, BridgeHandle, BridgeServer, IconCandidateDto, PageInfoDto};
