use std::{
    any::Any,
    borrow::Cow,
    panic::{AssertUnwindSafe, catch_unwind, resume_unwind},
    sync::Arc,
};

use crate::{
    Error, Event, EventId, Meta, PanicPolicy, Registry, Result, SubscriberEntry,
    internal::Route,
};

const DEFAULT_PUBLISHER_NAME: &str = "publisher";

/// Delivers events to the subscribers registered for their exact type.
///
/// - `publish(&event)` resolves the event's concrete type, looks it up in the
///   [`Registry`] and notifies each matching subscriber, in registration
///   order, before returning.
/// - `publish_dyn(&dyn Event)` does the same for type-erased events; the
///   runtime type of the value decides the route.
/// - Publishing an event nobody subscribed to is a no-op returning `Ok(0)`.
/// - The first subscriber error stops delivery of that event. Subscribers
///   already notified are not rolled back.
///
/// Publishers are cheap to clone and share one registry.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use herald::{Event, Meta, Publisher, Registry};
///
/// struct Greeting(String);
/// impl Event for Greeting {}
///
/// let registry = Registry::builder()
///     .subscribe_fn("greeter", |g: &Greeting, meta: &Meta| {
///         println!("{} (from {})", g.0, meta.publisher());
///         Ok(())
///     })
///     .build()?;
///
/// let publisher = Publisher::new(Arc::new(registry)).with_name("frontdesk");
/// assert_eq!(publisher.publish(&Greeting("hello".into()))?, 1);
/// # Ok::<(), herald::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Publisher {
    name: Arc<str>,
    registry: Arc<Registry>,
}

impl Publisher {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            name: Arc::from(DEFAULT_PUBLISHER_NAME),
            registry,
        }
    }

    /// Set the name recorded as [`Meta::publisher`] on every publication.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Notify every subscriber of `E` and return how many were notified.
    ///
    /// # Errors
    ///
    /// [`Error::SubscriberFailed`] or [`Error::SubscriberPanicked`] naming the
    /// subscriber that stopped delivery.
    pub fn publish<E: Event>(&self, event: &E) -> Result<usize> {
        self.dispatch(event, event.name(), None)
    }

    /// Like [`publish`](Publisher::publish), routing by the runtime type of `event`.
    pub fn publish_dyn(&self, event: &dyn Event) -> Result<usize> {
        let name = event.name();
        let event: &dyn Any = event;
        self.dispatch(event, name, None)
    }

    /// Like [`publish`](Publisher::publish), tagging the publication with a correlation id.
    pub fn publish_correlated<E: Event>(&self, event: &E, correlation_id: EventId) -> Result<usize> {
        self.dispatch(event, event.name(), Some(correlation_id))
    }

    fn dispatch(
        &self,
        event: &dyn Any,
        event_name: Cow<'static, str>,
        correlation_id: Option<EventId>,
    ) -> Result<usize> {
        let Some(route) = self.registry.route(event.type_id()) else {
            self.log_unroutable(&event_name);
            return Ok(0);
        };

        let meta = Meta::new(self.name.clone(), correlation_id);
        tracing::trace!(
            publisher = %self.name,
            event = %event_name,
            event_id = %meta.id(),
            subscribers = route.len(),
            "Publishing event"
        );

        for entry in &route.entries {
            self.notify(route, entry, event, &meta)?;
        }
        Ok(route.len())
    }

    fn notify(
        &self,
        route: &Route,
        entry: &SubscriberEntry,
        event: &dyn Any,
        meta: &Meta,
    ) -> Result<()> {
        tracing::trace!(
            subscriber = %entry.id(),
            event_type = %route.event_type,
            "Notifying subscriber"
        );

        let outcome = catch_unwind(AssertUnwindSafe(|| entry.handler.handle(event, meta)));
        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => {
                tracing::warn!(
                    subscriber = %entry.id(),
                    event_type = %route.event_type,
                    error = %source,
                    "Subscriber failed, remaining delivery aborted"
                );
                Err(Error::SubscriberFailed {
                    subscriber: entry.id().clone(),
                    event_type: route.event_type,
                    source: Box::new(source),
                })
            }
            Err(payload) if self.registry.config().panic_policy == PanicPolicy::Propagate => {
                resume_unwind(payload)
            }
            Err(payload) => {
                let message = panic_message(&*payload);
                tracing::error!(
                    subscriber = %entry.id(),
                    event_type = %route.event_type,
                    panic = %message,
                    "Subscriber panicked, remaining delivery aborted"
                );
                Err(Error::SubscriberPanicked {
                    subscriber: entry.id().clone(),
                    event_type: route.event_type,
                    message,
                })
            }
        }
    }

    fn log_unroutable(&self, event_name: &str) {
        if self.registry.config().warn_on_unroutable {
            tracing::warn!(publisher = %self.name, event = %event_name, "No subscribers for event");
        } else {
            tracing::debug!(publisher = %self.name, event = %event_name, "No subscribers for event");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Arc<str> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Arc::from(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        Arc::from(s.as_str())
    } else {
        Arc::from("non-string panic payload")
    }
}
