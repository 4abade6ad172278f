// src/events/handlers/log_handler.rs
//
// Log Handler Registration
//
// Wires the pipeline's domain events to the log facade. This is the only
// observer the backend registers itself; embedders may subscribe their own.

use crate::events::bus::EventBus;
use crate::events::types::{IconResolutionExhausted, IconResolved, SiteInfoFetched};

/// Subscribes a logging handler for every pipeline event type.
pub fn register_log_handlers(bus: &EventBus) {
    bus.subscribe::<SiteInfoFetched, _>(|event| {
        log::info!(
            "fetched {} (title: {:?}, {} candidates)",
            event.page_url,
            event.title,
            event.candidate_count
        );
    });

    bus.subscribe::<IconResolved, _>(|event| {
        log::info!(
            "icon for {} resolved from {} ({}, {} bytes, {} sources tried)",
            event.domain,
            event.source_url,
            event.mime_type,
            event.byte_count,
            event.sources_attempted
        );
    });

    bus.subscribe::<IconResolutionExhausted, _>(|event| {
        log::warn!(
            "no icon for {} after {} sources",
            event.domain,
            event.sources_attempted
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_one_handler_per_event_type() {
        let bus = EventBus::new();
        register_log_handlers(&bus);

        assert_eq!(bus.subscriber_count::<SiteInfoFetched>(), 1);
        assert_eq!(bus.subscriber_count::<IconResolved>(), 1);
        assert_eq!(bus.subscriber_count::<IconResolutionExhausted>(), 1);
    }
}
