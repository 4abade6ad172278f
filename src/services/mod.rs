// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod extraction_service;
pub mod icon_resolution_service;
pub mod page_service;
pub mod probe_service;

#[cfg(test)]
mod extraction_service_tests;

// Re-export all services and their types
pub use extraction_service::ExtractionService;

pub use icon_resolution_service::{IconResolutionService, ResolutionTuning};

pub use page_service::{PageService, PAGE_FETCH_TIMEOUT};

pub use probe_service::{ProbeConfig, ProbeService};
