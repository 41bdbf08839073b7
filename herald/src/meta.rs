use std::{sync::Arc, time::SystemTime};

use uuid::Uuid;

use crate::EventId;

/// Metadata created for every `publish` call.
///
/// - `id`: unique identifier for this publication.
/// - `timestamp`: creation time in nanoseconds since Unix epoch (truncated to `u64`).
/// - `publisher`: name of the [`Publisher`](crate::Publisher) that emitted the event.
/// - `correlation_id`: optional id to link related events together.
///
/// Herald attaches no meaning to `correlation_id`; it is passed to subscribers
/// untouched. A subscriber may, for example, use the `id` of the event it is
/// handling as the correlation id of events it publishes in turn.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meta {
    id: EventId,
    timestamp: u64,
    publisher: Arc<str>,
    correlation_id: Option<EventId>,
}

impl Meta {
    /// Construct metadata for a given publisher name and optional correlation id.
    ///
    /// A system clock set before the Unix epoch yields a timestamp of zero.
    pub fn new(publisher: Arc<str>, correlation_id: Option<EventId>) -> Self {
        Self {
            id: Uuid::new_v4().as_u128(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default(),
            publisher,
            correlation_id,
        }
    }

    /// Unique identifier for this publication.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Timestamp in nanoseconds since Unix epoch (u64 truncation).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Name of the publisher that emitted the event.
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Optional value of correlation data.
    /// It might be a parent event id, but it's up to the user to define its meaning.
    pub fn correlation_id(&self) -> Option<EventId> {
        self.correlation_id
    }
}
