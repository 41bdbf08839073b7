use std::{borrow::Cow, fmt};

use crate::{
    Event, EventType, Meta, Result, Subscriber, SubscriberId,
    internal::{Factory, Handler, Singleton},
    subscriber::FnSubscriber,
};

/// How a registered subscriber instance is obtained for each notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// One instance, owned by the registry, serves every notification.
    Singleton,
    /// A new instance is built for every notification.
    PerNotification,
}

/// A type-erased subscriber registration: the event type it handles, its id,
/// and the reaction itself.
///
/// Entries are what a [`Registry`](crate::Registry) is built from. Build them
/// directly to hand a registry a static, enumerable list of subscribers:
///
/// ```rust
/// use herald::{Event, Meta, Registry, Result, Subscriber, SubscriberEntry};
///
/// struct Tick;
/// impl Event for Tick {}
///
/// struct Clock;
/// impl Subscriber for Clock {
///     type Event = Tick;
///     fn notify(&self, _: &Tick, _: &Meta) -> Result<()> { Ok(()) }
/// }
///
/// let registry = Registry::from_entries([
///     SubscriberEntry::new(Clock),
///     SubscriberEntry::from_fn("tick-printer", |_: &Tick, _: &Meta| Ok(())),
/// ])?;
/// assert_eq!(registry.len(), 2);
/// # Ok::<(), herald::Error>(())
/// ```
pub struct SubscriberEntry {
    id: SubscriberId,
    event_type: EventType,
    lifecycle: Lifecycle,
    pub(crate) handler: Box<dyn Handler>,
}

impl SubscriberEntry {
    /// Register `subscriber` under its own [`Subscriber::name`].
    pub fn new<S: Subscriber>(subscriber: S) -> Self {
        let name = subscriber.name();
        Self::named(name, subscriber)
    }

    /// Register `subscriber` under an explicit name.
    pub fn named<S: Subscriber>(name: impl Into<Cow<'static, str>>, subscriber: S) -> Self {
        let name: Cow<'static, str> = name.into();
        Self {
            id: SubscriberId::new(&*name),
            event_type: EventType::of::<S::Event>(),
            lifecycle: Lifecycle::Singleton,
            handler: Box::new(Singleton(subscriber)),
        }
    }

    /// Register a factory building a fresh subscriber for every notification.
    ///
    /// The factory is called once here to read the subscriber's name.
    pub fn from_factory<S, F>(factory: F) -> Self
    where
        S: Subscriber,
        F: Fn() -> S + Send + Sync + 'static,
    {
        let name = factory().name();
        Self {
            id: SubscriberId::new(&*name),
            event_type: EventType::of::<S::Event>(),
            lifecycle: Lifecycle::PerNotification,
            handler: Box::new(Factory::new(factory)),
        }
    }

    /// Register a closure reacting to events of type `E`.
    pub fn from_fn<E, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        E: Event,
        F: Fn(&E, &Meta) -> Result<()> + Send + Sync + 'static,
    {
        let name: Cow<'static, str> = name.into();
        Self::named(name.clone(), FnSubscriber::<E, F>::new(name, f))
    }

    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

impl fmt::Debug for SubscriberEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberEntry")
            .field("id", &self.id)
            .field("event_type", &self.event_type)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;
    impl Event for Ping {}

    struct PingLogger;
    impl Subscriber for PingLogger {
        type Event = Ping;
        fn notify(&self, _: &Ping, _: &Meta) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_entry_uses_subscriber_name() {
        let entry = SubscriberEntry::new(PingLogger);
        assert_eq!(entry.id(), &"PingLogger");
        assert_eq!(entry.event_type(), EventType::of::<Ping>());
        assert_eq!(entry.lifecycle(), Lifecycle::Singleton);
    }

    #[test]
    fn test_named_entry_overrides_name() {
        let entry = SubscriberEntry::named("ping-log", PingLogger);
        assert_eq!(entry.id().name(), "ping-log");
    }

    #[test]
    fn test_factory_entry_is_per_notification() {
        let entry = SubscriberEntry::from_factory(|| PingLogger);
        assert_eq!(entry.id(), &"PingLogger");
        assert_eq!(entry.lifecycle(), Lifecycle::PerNotification);
    }

    #[test]
    fn test_fn_entry_infers_event_type() {
        let entry = SubscriberEntry::from_fn("closure", |_: &Ping, _: &Meta| Ok(()));
        assert_eq!(entry.id(), &"closure");
        assert!(entry.event_type().is::<Ping>());
    }
}
