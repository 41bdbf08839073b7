use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
};

use crate::{
    Config, Event, EventType, RegistryBuilder, Result, SubscriberEntry, SubscriberId,
    internal::Route,
};

/// Index from event type to the subscribers interested in it.
///
/// Built once by a [`RegistryBuilder`] (or [`Registry::from_entries`]) and
/// read-only afterwards. A registry is `Send + Sync`; wrap it in an `Arc` to
/// share it between publishers.
///
/// Lookups use the exact [`TypeId`] of the event: a subscriber of `A` never
/// sees a `B`, however similar the two types are.
///
/// For a given event type, subscribers are kept (and invoked) in the order
/// they were registered.
#[derive(Debug, Default)]
pub struct Registry {
    config: Config,
    routes: HashMap<TypeId, Route>,
    order: Vec<EventType>,
    declared: HashSet<EventType>,
    len: usize,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from a static list of entries, with default config.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SubscriberEntry>,
    {
        RegistryBuilder::new().entries(entries).build()
    }

    pub(crate) fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub(crate) fn declare(&mut self, event_type: EventType) {
        self.declared.insert(event_type);
    }

    /// Append an already validated entry to its route.
    pub(crate) fn insert(&mut self, entry: SubscriberEntry) {
        let event_type = entry.event_type();
        let route = self.routes.entry(event_type.id()).or_insert_with(|| {
            self.order.push(event_type);
            Route::new(event_type)
        });
        route.push(entry);
        self.len += 1;
    }

    pub(crate) fn route(&self, type_id: TypeId) -> Option<&Route> {
        self.routes.get(&type_id)
    }

    /// Ids of the subscribers of `E`, in invocation order.
    pub fn subscribers_for<E: Event>(&self) -> impl Iterator<Item = &SubscriberId> {
        self.subscribers_of(EventType::of::<E>())
    }

    /// Ids of the subscribers of `event_type`, in invocation order.
    pub fn subscribers_of(&self, event_type: EventType) -> impl Iterator<Item = &SubscriberId> {
        self.route(event_type.id()).into_iter().flat_map(Route::ids)
    }

    /// Event types with at least one subscriber, in order of first registration.
    pub fn event_types(&self) -> impl Iterator<Item = EventType> + '_ {
        self.order.iter().copied()
    }

    pub fn is_declared(&self, event_type: EventType) -> bool {
        self.declared.contains(&event_type)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes
            .values()
            .flat_map(Route::ids)
            .any(|id| id.name() == name)
    }

    /// Number of subscribers of `event_type`.
    pub fn count_of(&self, event_type: EventType) -> usize {
        self.route(event_type.id()).map_or(0, Route::len)
    }

    /// Total number of registered subscribers.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::Meta;

    struct Ping;
    impl Event for Ping {}

    struct Pong;
    impl Event for Pong {}

    struct Unused;
    impl Event for Unused {}

    fn registry() -> Registry {
        Registry::from_entries([
            SubscriberEntry::from_fn("pong-1", |_: &Pong, _: &Meta| Ok(())),
            SubscriberEntry::from_fn("ping-1", |_: &Ping, _: &Meta| Ok(())),
            SubscriberEntry::from_fn("pong-2", |_: &Pong, _: &Meta| Ok(())),
        ])
        .unwrap()
    }

    #[test]
    fn test_event_types_in_first_registration_order() {
        let types: Vec<_> = registry().event_types().collect();
        assert_eq!(types, [EventType::of::<Pong>(), EventType::of::<Ping>()]);
    }

    #[test]
    fn test_counts() {
        let registry = registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.count_of(EventType::of::<Pong>()), 2);
        assert_eq!(registry.count_of(EventType::of::<Ping>()), 1);
        assert_eq!(registry.count_of(EventType::of::<Unused>()), 0);
    }

    #[test]
    fn test_contains_by_name() {
        let registry = registry();
        assert!(registry.contains("ping-1"));
        assert!(!registry.contains("ping-2"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.subscribers_for::<Ping>().count(), 0);
        assert_eq!(registry.event_types().count(), 0);
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let registry = Arc::new(registry());
        assert_send_sync(&registry);
    }
}
