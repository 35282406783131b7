// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Event Bus Implementation - Pub/Sub for Reading Progress Events
//
// In-memory fan-out over a tokio broadcast channel. Events published with no
// subscribers are dropped; nothing is replayed.

use crate::domain::events::PolymathEvent;
use crate::domain::knowledge_domain::DomainId;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<PolymathEvent>>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity.
    /// Slow receivers that fall more than `capacity` events behind lose the oldest.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Create event bus with default capacity (256)
    pub fn with_default_capacity() -> Self {
        Self::new(256)
    }

    pub fn publish(&self, event: PolymathEvent) {
        debug!("Publishing event: {:?}", event);

        let receiver_count = self.sender.send(event).unwrap_or(0);
        if receiver_count == 0 {
            debug!("No subscribers listening to event");
        }
    }

    pub fn subscribe(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.sender.subscribe(),
        }
    }

    /// Subscribe to events for a single domain only
    pub fn subscribe_domain(&self, domain_id: DomainId) -> DomainEventReceiver {
        DomainEventReceiver {
            receiver: self.sender.subscribe(),
            domain_id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

fn map_recv_error(e: broadcast::error::RecvError) -> EventBusError {
    match e {
        broadcast::error::RecvError::Closed => EventBusError::Closed,
        broadcast::error::RecvError::Lagged(n) => {
            warn!("Event receiver lagged by {} events", n);
            EventBusError::Lagged(n)
        }
    }
}

pub struct EventReceiver {
    receiver: broadcast::Receiver<PolymathEvent>,
}

impl EventReceiver {
    /// Receive the next event (waits until one is available)
    pub async fn recv(&mut self) -> Result<PolymathEvent, EventBusError> {
        self.receiver.recv().await.map_err(map_recv_error)
    }

    /// Try to receive an event without blocking
    pub fn try_recv(&mut self) -> Result<PolymathEvent, EventBusError> {
        self.receiver.try_recv().map_err(|e| match e {
            broadcast::error::TryRecvError::Empty => EventBusError::Empty,
            broadcast::error::TryRecvError::Closed => EventBusError::Closed,
            broadcast::error::TryRecvError::Lagged(n) => {
                warn!("Event receiver lagged by {} events", n);
                EventBusError::Lagged(n)
            }
        })
    }
}

/// Receiver that skips events about other domains
pub struct DomainEventReceiver {
    receiver: broadcast::Receiver<PolymathEvent>,
    domain_id: DomainId,
}

impl DomainEventReceiver {
    pub async fn recv(&mut self) -> Result<PolymathEvent, EventBusError> {
        loop {
            let event = self.receiver.recv().await.map_err(map_recv_error)?;
            if event.domain_id() == &self.domain_id {
                return Ok(event);
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EventBusError {
    #[error("Event bus is closed")]
    Closed,

    #[error("No events available")]
    Empty,

    #[error("Receiver lagged by {0} events (events were dropped)")]
    Lagged(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_domain::{DomainStatus, StudySlot};
    use crate::domain::session::SessionId;
    use chrono::Utc;

    fn status_event(domain_id: &str) -> PolymathEvent {
        PolymathEvent::DomainStatusAdvanced {
            domain_id: DomainId::new(domain_id),
            from: DomainStatus::Untouched,
            to: DomainStatus::Surveying,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_publish_subscribe() {
        let event_bus = EventBus::new(10);
        let mut receiver = event_bus.subscribe();

        event_bus.publish(PolymathEvent::SessionLogged {
            session_id: SessionId::new(),
            domain_id: DomainId::new("02.04"),
            book_title: "The Selfish Gene".to_string(),
            slot: StudySlot::Foundation,
            books_read: 1,
            timestamp: Utc::now(),
        });

        match receiver.recv().await.unwrap() {
            PolymathEvent::SessionLogged { domain_id, books_read, .. } => {
                assert_eq!(domain_id.as_str(), "02.04");
                assert_eq!(books_read, 1);
            }
            other => panic!("Wrong event type received: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_domain_filtering() {
        let event_bus = EventBus::new(10);
        let mut receiver = event_bus.subscribe_domain(DomainId::new("15.01"));

        event_bus.publish(status_event("07.09"));
        event_bus.publish(status_event("15.01"));

        let received = receiver.recv().await.unwrap();
        assert_eq!(received.domain_id().as_str(), "15.01");
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let event_bus = EventBus::new(10);
        let mut receiver1 = event_bus.subscribe();
        let mut receiver2 = event_bus.subscribe();
        assert_eq!(event_bus.subscriber_count(), 2);

        event_bus.publish(status_event("01.02"));

        let _ = receiver1.recv().await.unwrap();
        let _ = receiver2.recv().await.unwrap();
    }

    #[test]
    fn test_try_recv_empty() {
        let event_bus = EventBus::default();
        let mut receiver = event_bus.subscribe();
        assert!(matches!(receiver.try_recv(), Err(EventBusError::Empty)));
    }

    #[test]
    fn test_lagged_receiver() {
        let event_bus = EventBus::new(2);
        let mut receiver = event_bus.subscribe();
        for id in ["01.01", "01.02", "01.03"] {
            event_bus.publish(status_event(id));
        }
        assert!(matches!(receiver.try_recv(), Err(EventBusError::Lagged(1))));
    }
}
