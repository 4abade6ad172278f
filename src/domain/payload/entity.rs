// src/domain/payload/entity.rs
//
// Validated Icon Payload
//
// The only image representation that leaves the pipeline. Construction is
// crate-private: a payload exists only after content passed the whitelist,
// byte-floor, and dimension checks (see invariants).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// A fetched icon that survived validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPayload {
    mime_type: String,
    bytes: Vec<u8>,
}

impl ValidatedPayload {
    /// Crate-private: only the validator constructs payloads.
    pub(crate) fn new(mime_type: String, bytes: Vec<u8>) -> Self {
        Self { mime_type, bytes }
    }

    /// Canonical whitelist mime type, parameters stripped.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_count(&self) -> usize {
        self.bytes.len()
    }

    /// The portable form handed to callers: a base64 data URI.
    pub fn as_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Outcome of probing a single icon source.
///
/// Failures here are routine, expected events; they only advance the
/// fallback chain and are never surfaced to the top-level caller.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Success(ValidatedPayload),
    SoftFailure(ProbeFailureReason),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&ValidatedPayload> {
        match self {
            ProbeOutcome::Success(payload) => Some(payload),
            ProbeOutcome::SoftFailure(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<ValidatedPayload> {
        match self {
            ProbeOutcome::Success(payload) => Some(payload),
            ProbeOutcome::SoftFailure(_) => None,
        }
    }
}

/// Why a single source failed. Drives logging only; the chain treats every
/// variant the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFailureReason {
    /// Network unreachable or the attempt timed out
    Transport,

    /// Non-success HTTP status
    Protocol,

    /// Wrong type, below the byte floor, or failed the dimension check
    Content,

    /// Malformed manifest or markup
    Parse,
}

impl std::fmt::Display for ProbeFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeFailureReason::Transport => write!(f, "transport"),
            ProbeFailureReason::Protocol => write!(f, "protocol"),
            ProbeFailureReason::Content => write!(f, "content"),
            ProbeFailureReason::Parse => write!(f, "parse"),
        }
    }
}
