// src/events/bus/event_bus.rs
//
// Core event bus implementation.
//
// Synchronous and deterministic: handlers execute immediately, in
// subscription order, on the emitting thread. Services emit facts;
// observers (logging, future UI notification) subscribe.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Central coordination point for domain events.
///
/// Lets services emit events and observers subscribe without direct
/// dependencies on each other.
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe to a specific event type.
    ///
    /// Handlers are executed in the order they are subscribed.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            }
        });

        let mut handlers = self.handlers.write().unwrap();
        handlers
            .entry(TypeId::of::<E>())
            .or_insert_with(Vec::new)
            .push(wrapped);
    }

    /// Emit an event, executing all handlers for its type in subscription
    /// order before returning.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers = self.handlers.read().unwrap();
        let event_handlers = handlers.get(&TypeId::of::<E>());

        log::debug!(
            "[event] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            event_handlers.map(|h| h.len()).unwrap_or(0)
        );

        if let Some(event_handlers) = event_handlers {
            for handler in event_handlers {
                handler(&event as &dyn Any);
            }
        }
    }

    /// Number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let handlers = self.handlers.read().unwrap();
        handlers
            .get(&TypeId::of::<E>())
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Shared-reference clone; all clones observe the same subscriptions.
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::{IconResolutionExhausted, IconResolved};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn resolved_event() -> IconResolved {
        IconResolved::new(
            "ex.com".to_string(),
            "https://ex.com/icon.png".to_string(),
            "image/png".to_string(),
            2048,
            1,
        )
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<IconResolved, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(resolved_event());

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for i in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<IconResolutionExhausted, _>(move |_| {
                seq.write().unwrap().push(i);
            });
        }

        bus.emit(IconResolutionExhausted::new("ex.com".to_string(), 9));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<IconResolved>(), 0);

        bus.subscribe::<IconResolved, _>(|_| {});
        bus.subscribe::<IconResolved, _>(|_| {});
        assert_eq!(bus.subscriber_count::<IconResolved>(), 2);

        // Different event type is tracked separately
        assert_eq!(bus.subscriber_count::<IconResolutionExhausted>(), 0);
    }

    #[test]
    fn test_handlers_receive_event_data() {
        let bus = EventBus::new();
        let seen_domain = Arc::new(RwLock::new(String::new()));
        let seen = Arc::clone(&seen_domain);

        bus.subscribe::<IconResolved, _>(move |event| {
            *seen.write().unwrap() = event.domain.clone();
        });

        bus.emit(resolved_event());

        assert_eq!(*seen_domain.read().unwrap(), "ex.com");
    }
}
