use std::borrow::Cow;

use crate::{Event, Meta, Result, internal::short_type_name};

/// Core trait implemented by user-defined subscribers.
///
/// A subscriber reacts to exactly one event type, named by its associated
/// `Event` type. The publisher hands it every published value of that exact
/// type and nothing else.
///
/// Subscribers take `&self`: they are expected to be stateless across
/// notifications. Registered with
/// [`RegistryBuilder::subscribe`](crate::RegistryBuilder::subscribe), one
/// instance lives as long as the registry. Registered with
/// [`RegistryBuilder::subscribe_factory`](crate::RegistryBuilder::subscribe_factory),
/// a fresh instance is built for every notification.
///
/// # Example
///
/// ```rust
/// use herald::{Event, Meta, Result, Subscriber};
///
/// struct OrderPlaced { total: u64 }
/// impl Event for OrderPlaced {}
///
/// struct Invoicer;
///
/// impl Subscriber for Invoicer {
///     type Event = OrderPlaced;
///
///     fn notify(&self, event: &OrderPlaced, meta: &Meta) -> Result<()> {
///         println!("invoice {} (from {})", event.total, meta.publisher());
///         Ok(())
///     }
/// }
/// ```
pub trait Subscriber: Send + Sync + 'static {
    type Event: Event;

    /// React to a single event.
    ///
    /// Return `Ok(())` when handling succeeds. An error stops delivery of this
    /// event to the subscribers registered after this one and is returned
    /// from `publish`, wrapped in
    /// [`Error::SubscriberFailed`](crate::Error::SubscriberFailed).
    fn notify(&self, event: &Self::Event, meta: &Meta) -> Result<()>;

    /// Name used as the subscriber's id in the registry.
    ///
    /// Defaults to the type name without its module path. Override it when
    /// the same subscriber type is registered more than once.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<Self>()))
    }
}

/// Adapter turning a closure into a [`Subscriber`].
///
/// Built by [`SubscriberEntry::from_fn`](crate::SubscriberEntry::from_fn).
pub(crate) struct FnSubscriber<E, F> {
    name: Cow<'static, str>,
    f: F,
    _event: std::marker::PhantomData<fn(&E)>,
}

impl<E, F> FnSubscriber<E, F>
where
    E: Event,
    F: Fn(&E, &Meta) -> Result<()> + Send + Sync + 'static,
{
    pub fn new(name: Cow<'static, str>, f: F) -> Self {
        Self {
            name,
            f,
            _event: std::marker::PhantomData,
        }
    }
}

impl<E, F> Subscriber for FnSubscriber<E, F>
where
    E: Event,
    F: Fn(&E, &Meta) -> Result<()> + Send + Sync + 'static,
{
    type Event = E;

    fn notify(&self, event: &E, meta: &Meta) -> Result<()> {
        (self.f)(event, meta)
    }

    fn name(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}
