// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// Events are facts, not commands; they carry only the data needed to react.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// PAGE FETCH EVENTS
// ============================================================================

/// Emitted after a page was fetched and scanned for icon candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfoFetched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub page_url: String,
    pub title: Option<String>,
    pub candidate_count: usize,
}

impl SiteInfoFetched {
    pub fn new(page_url: String, title: Option<String>, candidate_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            page_url,
            title,
            candidate_count,
        }
    }
}

impl DomainEvent for SiteInfoFetched {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SiteInfoFetched"
    }
}

// ============================================================================
// ICON RESOLUTION EVENTS
// ============================================================================

/// Emitted when the fallback chain produced a validated icon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub domain: String,
    /// The source that won the chain walk
    pub source_url: String,
    pub mime_type: String,
    pub byte_count: usize,
    /// Sources attempted before this one succeeded
    pub sources_attempted: usize,
}

impl IconResolved {
    pub fn new(
        domain: String,
        source_url: String,
        mime_type: String,
        byte_count: usize,
        sources_attempted: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            domain,
            source_url,
            mime_type,
            byte_count,
            sources_attempted,
        }
    }
}

impl DomainEvent for IconResolved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "IconResolved"
    }
}

/// Emitted when every source in the fallback chain soft-failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconResolutionExhausted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub domain: String,
    pub sources_attempted: usize,
}

impl IconResolutionExhausted {
    pub fn new(domain: String, sources_attempted: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            domain,
            sources_attempted,
        }
    }
}

impl DomainEvent for IconResolutionExhausted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "IconResolutionExhausted"
    }
}
