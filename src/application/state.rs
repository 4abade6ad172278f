// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::integrations::ResourceFetcher;
use crate::services::{ExtractionService, IconResolutionService, PageService, ProbeService};

/// Application state shared by every command handler.
/// All fields are Arc-wrapped for thread-safe sharing across requests.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub page_service: Arc<PageService>,
    pub icon_resolution_service: Arc<IconResolutionService>,
}

impl AppState {
    /// Wires the full pipeline over one injected fetcher.
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let extraction = Arc::new(ExtractionService::new());
        let probe = Arc::new(ProbeService::new(Arc::clone(&fetcher)));

        let page_service = Arc::new(PageService::new(
            Arc::clone(&fetcher),
            extraction,
            Arc::clone(&event_bus),
        ));
        let icon_resolution_service = Arc::new(IconResolutionService::new(
            probe,
            Arc::clone(&event_bus),
        ));

        Self {
            event_bus,
            page_service,
            icon_resolution_service,
        }
    }
}
