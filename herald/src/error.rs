use std::sync::Arc;

use crate::{EventType, SubscriberId};

/// Errors reported by Herald.
///
/// Registration errors come out of
/// [`RegistryBuilder::build`](crate::RegistryBuilder::build) and abort the
/// construction of the registry. Delivery errors come out of
/// [`Publisher::publish`](crate::Publisher::publish) and name the subscriber
/// that stopped delivery. Publishing an event nobody subscribed to is not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Subscriber for '{0}' has an empty name.")]
    InvalidSubscriberName(EventType),

    #[error("Subscriber with name '{0}' already exists.")]
    SubscriberAlreadyExists(SubscriberId),

    #[error("Subscriber '{subscriber}' handles '{event_type}', which was never declared.")]
    UndeclaredEventType {
        subscriber: SubscriberId,
        event_type: EventType,
    },

    #[error("Subscriber '{subscriber}' failed to handle '{event_type}': {source}")]
    SubscriberFailed {
        subscriber: SubscriberId,
        event_type: EventType,
        #[source]
        source: Box<Error>,
    },

    #[error("Subscriber '{subscriber}' panicked while handling '{event_type}': {message}")]
    SubscriberPanicked {
        subscriber: SubscriberId,
        event_type: EventType,
        message: Arc<str>,
    },

    #[error("Error external to Herald occured: {0}")]
    External(Arc<str>),
}

impl Error {
    /// Wraps a subscriber-side failure message.
    pub fn external(message: impl Into<Arc<str>>) -> Self {
        Error::External(message.into())
    }

    /// `true` for errors raised while building a registry.
    pub fn is_registration(&self) -> bool {
        matches!(
            self,
            Error::InvalidSubscriberName(_)
                | Error::SubscriberAlreadyExists(_)
                | Error::UndeclaredEventType { .. }
        )
    }

    /// The subscriber that stopped delivery, for delivery errors.
    pub fn subscriber(&self) -> Option<&SubscriberId> {
        match self {
            Error::SubscriberFailed { subscriber, .. }
            | Error::SubscriberPanicked { subscriber, .. } => Some(subscriber),
            _ => None,
        }
    }

    /// The event type whose delivery failed, for delivery errors.
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            Error::SubscriberFailed { event_type, .. }
            | Error::SubscriberPanicked { event_type, .. } => Some(*event_type),
            _ => None,
        }
    }
}
