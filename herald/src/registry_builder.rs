use std::{borrow::Cow, collections::HashSet};

use crate::{
    Config, Error, Event, EventType, Meta, Registry, Result, Subscriber, SubscriberEntry,
};

/// Collects subscriber registrations and validates them into a [`Registry`].
///
/// Registration order is the invocation order: subscribers of the same event
/// type are notified in the order they were added here.
///
/// Nothing is checked until [`build`](RegistryBuilder::build), which reports
/// the first invalid registration.
///
/// # Example
///
/// ```rust
/// use herald::{Event, Meta, Registry};
///
/// struct Deployed { service: String }
/// impl Event for Deployed {}
///
/// let registry = Registry::builder()
///     .declare::<Deployed>()
///     .subscribe_fn("announce", |e: &Deployed, _: &Meta| {
///         println!("{} is live", e.service);
///         Ok(())
///     })
///     .build()?;
/// # Ok::<(), herald::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: Config,
    declared: Vec<EventType>,
    entries: Vec<SubscriberEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Add `E` to the catalog of known event types.
    ///
    /// Declaring is optional unless [`Config::require_declared_events`] is set.
    pub fn declare<E: Event>(mut self) -> Self {
        let event_type = EventType::of::<E>();
        if !self.declared.contains(&event_type) {
            self.declared.push(event_type);
        }
        self
    }

    /// Register a long-lived subscriber under its own name.
    pub fn subscribe<S: Subscriber>(self, subscriber: S) -> Self {
        self.entry(SubscriberEntry::new(subscriber))
    }

    /// Register a long-lived subscriber under an explicit name.
    pub fn subscribe_named<S: Subscriber>(
        self,
        name: impl Into<Cow<'static, str>>,
        subscriber: S,
    ) -> Self {
        self.entry(SubscriberEntry::named(name, subscriber))
    }

    /// Register a factory; every notification gets a freshly built subscriber.
    pub fn subscribe_factory<S, F>(self, factory: F) -> Self
    where
        S: Subscriber,
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.entry(SubscriberEntry::from_factory(factory))
    }

    /// Register a closure reacting to events of type `E`.
    pub fn subscribe_fn<E, F>(self, name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        E: Event,
        F: Fn(&E, &Meta) -> Result<()> + Send + Sync + 'static,
    {
        self.entry(SubscriberEntry::from_fn(name, f))
    }

    pub fn entry(mut self, entry: SubscriberEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = SubscriberEntry>,
    {
        self.entries.extend(entries);
        self
    }

    /// Validate all registrations and build the registry.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSubscriberName`] for an empty or blank name.
    /// - [`Error::SubscriberAlreadyExists`] when a name is used twice.
    /// - [`Error::UndeclaredEventType`] when [`Config::require_declared_events`]
    ///   is set and a subscriber handles an event type never declared.
    pub fn build(self) -> Result<Registry> {
        let mut names = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.id().trim().is_empty() {
                return Err(Error::InvalidSubscriberName(entry.event_type()));
            }
            if !names.insert(entry.id().clone()) {
                return Err(Error::SubscriberAlreadyExists(entry.id().clone()));
            }
            if self.config.require_declared_events && !self.declared.contains(&entry.event_type())
            {
                return Err(Error::UndeclaredEventType {
                    subscriber: entry.id().clone(),
                    event_type: entry.event_type(),
                });
            }
        }

        let mut registry = Registry::with_config(self.config);
        for event_type in self.declared {
            registry.declare(event_type);
        }
        for entry in self.entries {
            tracing::debug!(
                subscriber = %entry.id(),
                event_type = %entry.event_type(),
                lifecycle = ?entry.lifecycle(),
                "Subscriber registered"
            );
            registry.insert(entry);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;
    impl Event for Ping {}

    struct Pong;
    impl Event for Pong {}

    struct PingLogger;
    impl Subscriber for PingLogger {
        type Event = Ping;
        fn notify(&self, _: &Ping, _: &Meta) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_build_groups_by_event_type() {
        let registry = RegistryBuilder::new()
            .subscribe(PingLogger)
            .subscribe_fn("pong-a", |_: &Pong, _: &Meta| Ok(()))
            .subscribe_fn("ping-b", |_: &Ping, _: &Meta| Ok(()))
            .build()
            .unwrap();

        let pings: Vec<_> = registry.subscribers_for::<Ping>().map(|s| s.name()).collect();
        let pongs: Vec<_> = registry.subscribers_for::<Pong>().map(|s| s.name()).collect();
        assert_eq!(pings, ["PingLogger", "ping-b"]);
        assert_eq!(pongs, ["pong-a"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RegistryBuilder::new()
            .subscribe(PingLogger)
            .subscribe_fn("PingLogger", |_: &Pong, _: &Meta| Ok(()))
            .build();
        assert!(matches!(
            result,
            Err(Error::SubscriberAlreadyExists(id)) if id == "PingLogger"
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = RegistryBuilder::new()
            .subscribe_named("  ", PingLogger)
            .build();
        assert!(matches!(
            result,
            Err(Error::InvalidSubscriberName(et)) if et.is::<Ping>()
        ));
    }

    #[test]
    fn test_undeclared_event_rejected_when_required() {
        let result = RegistryBuilder::new()
            .with_config(Config::default().with_require_declared_events(true))
            .declare::<Pong>()
            .subscribe(PingLogger)
            .build();
        assert!(matches!(
            result,
            Err(Error::UndeclaredEventType { subscriber, event_type })
                if subscriber == "PingLogger" && event_type.is::<Ping>()
        ));
    }

    #[test]
    fn test_undeclared_event_allowed_by_default() {
        let registry = RegistryBuilder::new().subscribe(PingLogger).build().unwrap();
        assert!(!registry.is_declared(EventType::of::<Ping>()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_declared_without_subscribers() {
        let registry = RegistryBuilder::new()
            .declare::<Pong>()
            .declare::<Pong>()
            .build()
            .unwrap();
        assert!(registry.is_declared(EventType::of::<Pong>()));
        assert!(registry.is_empty());
        assert_eq!(registry.subscribers_for::<Pong>().count(), 0);
    }
}
