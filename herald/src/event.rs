use std::{any::Any, borrow::Cow};

use crate::internal::short_type_name;

/// Marker trait for notification events dispatched by Herald.
///
/// Implement this for every payload type you want to publish. Each concrete
/// type is its own [`EventType`](crate::EventType): the publisher routes an
/// event by the exact runtime type of the value, never by a supertype or a
/// trait it implements.
///
/// Events must be `Send + Sync + 'static` because the registry that routes
/// them is shareable across threads, and `Any` because routing is keyed by
/// [`std::any::TypeId`]. The trait is object safe, so heterogeneous streams
/// of `Box<dyn Event>` can be published with
/// [`Publisher::publish_dyn`](crate::Publisher::publish_dyn).
///
/// # Event Names
///
/// The `name()` method returns a human-readable name for the event, used for
/// logging. The default implementation returns the type name without its
/// module path.
///
/// When using `#[derive(Event)]`, `name()` returns the struct name, or the
/// variant name for enums (e.g., "Charged").
pub trait Event: Any + Send + Sync + 'static {
    /// Returns a human-readable name for this event.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<Self>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: #[derive(Event)] can't be tested here because the macro generates
    // `impl herald::Event` which doesn't resolve within the herald crate itself.
    // The derive macro is tested in `tests/derive.rs`.

    struct ManualEvent;

    impl Event for ManualEvent {}

    #[test]
    fn test_manual_event_default_name() {
        assert_eq!(ManualEvent.name(), "ManualEvent");
    }

    #[allow(dead_code)]
    enum EnumEvent {
        Foo,
        Bar(i32),
    }

    impl Event for EnumEvent {
        fn name(&self) -> Cow<'static, str> {
            Cow::Borrowed(match self {
                EnumEvent::Foo => "Foo",
                EnumEvent::Bar(_) => "Bar",
            })
        }
    }

    #[test]
    fn test_manual_enum_event_name() {
        assert_eq!(EnumEvent::Foo.name(), "Foo");
        assert_eq!(EnumEvent::Bar(42).name(), "Bar");
    }

    #[test]
    fn test_dyn_event_keeps_concrete_name() {
        let boxed: Box<dyn Event> = Box::new(ManualEvent);
        assert_eq!(boxed.name(), "ManualEvent");
    }
}
