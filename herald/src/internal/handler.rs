use std::{any::Any, marker::PhantomData};

use crate::{Meta, Result, Subscriber};

/// Type-erased reaction stored in a route.
///
/// The route a handler lives in is keyed by the `TypeId` of its subscriber's
/// event type, so the downcast in `handle` always succeeds for events the
/// publisher hands over.
pub(crate) trait Handler: Send + Sync {
    fn handle(&self, event: &dyn Any, meta: &Meta) -> Result<()>;
}

/// One long-lived subscriber instance.
pub(crate) struct Singleton<S>(pub S);

impl<S: Subscriber> Handler for Singleton<S> {
    fn handle(&self, event: &dyn Any, meta: &Meta) -> Result<()> {
        match event.downcast_ref::<S::Event>() {
            Some(event) => self.0.notify(event, meta),
            None => {
                tracing::error!(subscriber = %self.0.name(), "Event routed to the wrong subscriber");
                Ok(())
            }
        }
    }
}

/// A fresh subscriber instance per notification.
pub(crate) struct Factory<F, S> {
    factory: F,
    _subscriber: PhantomData<fn() -> S>,
}

impl<F, S> Factory<F, S>
where
    S: Subscriber,
    F: Fn() -> S + Send + Sync + 'static,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _subscriber: PhantomData,
        }
    }
}

impl<F, S> Handler for Factory<F, S>
where
    S: Subscriber,
    F: Fn() -> S + Send + Sync + 'static,
{
    fn handle(&self, event: &dyn Any, meta: &Meta) -> Result<()> {
        Singleton((self.factory)()).handle(event, meta)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::Event;

    struct Ping(u32);
    impl Event for Ping {}

    struct Pong;
    impl Event for Pong {}

    struct Counter(Arc<AtomicUsize>);
    impl Subscriber for Counter {
        type Event = Ping;
        fn notify(&self, event: &Ping, _meta: &Meta) -> Result<()> {
            self.0.fetch_add(event.0 as usize, Ordering::SeqCst);
            Ok(())
        }
    }

    fn meta() -> Meta {
        Meta::new(Arc::from("test"), None)
    }

    #[test]
    fn test_singleton_downcasts_matching_event() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = Singleton(Counter(hits.clone()));
        handler.handle(&Ping(3), &meta()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_singleton_ignores_foreign_event() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = Singleton(Counter(hits.clone()));
        handler.handle(&Pong, &meta()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_factory_builds_instance_per_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let built = Arc::new(AtomicUsize::new(0));
        let (h, b) = (hits.clone(), built.clone());
        let handler = Factory::new(move || {
            b.fetch_add(1, Ordering::SeqCst);
            Counter(h.clone())
        });
        handler.handle(&Ping(1), &meta()).unwrap();
        handler.handle(&Ping(1), &meta()).unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
