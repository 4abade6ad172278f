// src/services/page_service.rs
//
// Page Service
//
// Fetches a page and turns its markup into SiteInfo (title + ranked icon
// candidates). Fail-soft by contract: a fetch or parse problem yields an
// empty SiteInfo, never an error. The title is read even from error
// responses; servers routinely put a usable title on their error pages.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::SiteInfo;
use crate::events::{EventBus, SiteInfoFetched};
use crate::integrations::ResourceFetcher;
use crate::services::extraction_service::ExtractionService;

/// Pages get a longer deadline than icon probes: markup is the one fetch
/// worth waiting for.
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct PageService {
    fetcher: Arc<dyn ResourceFetcher>,
    extraction: Arc<ExtractionService>,
    event_bus: Arc<EventBus>,
}

impl PageService {
    pub fn new(
        fetcher: Arc<dyn ResourceFetcher>,
        extraction: Arc<ExtractionService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            fetcher,
            extraction,
            event_bus,
        }
    }

    /// Fetches `url` and extracts everything the pipeline can learn from
    /// its markup.
    pub async fn fetch_site_info(&self, url: &str) -> SiteInfo {
        let fetched = match self.fetcher.fetch(url, PAGE_FETCH_TIMEOUT).await {
            Ok(fetched) => fetched,
            Err(err) => {
                log::warn!("page fetch {} failed: {}", url, err);
                return SiteInfo::empty();
            }
        };

        let html = String::from_utf8_lossy(&fetched.bytes);
        let info = self.extraction.extract(&html, url);

        self.event_bus.emit(SiteInfoFetched::new(
            url.to_string(),
            info.title.clone(),
            info.candidates.len(),
        ));

        info
    }
}
