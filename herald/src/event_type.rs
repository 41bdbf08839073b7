use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{Event, internal::short_type_name};

/// Runtime identity of an event's concrete type.
///
/// This is the routing key of the [`Registry`](crate::Registry). It plays the
/// role a topic plays in a broker, except that it is derived from the Rust
/// type itself: every value of `E` has `EventType::of::<E>()`, fixed for its
/// whole lifetime.
///
/// Equality and hashing use only the [`TypeId`]. The type name is carried for
/// logs and error messages.
#[derive(Debug, Clone, Copy)]
pub struct EventType {
    id: TypeId,
    name: &'static str,
}

impl EventType {
    /// The event type of `E`.
    pub fn of<E: Event>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type path, as reported by `std::any::type_name`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without the module path.
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }

    pub fn is<E: Event>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }
}

impl PartialEq for EventType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventType {}

impl Hash for EventType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
