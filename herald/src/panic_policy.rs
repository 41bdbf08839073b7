use std::fmt;

/// What the publisher does when a subscriber panics.
///
/// - `Catch`: the panic is caught, delivery of the current event stops and
///   `publish` returns [`Error::SubscriberPanicked`](crate::Error::SubscriberPanicked).
/// - `Propagate`: the panic unwinds through `publish` to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanicPolicy {
    #[default]
    Catch,
    Propagate,
}

impl PanicPolicy {
    pub fn is_catch(&self) -> bool {
        matches!(self, PanicPolicy::Catch)
    }

    pub fn is_propagate(&self) -> bool {
        matches!(self, PanicPolicy::Propagate)
    }
}

impl fmt::Display for PanicPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanicPolicy::Catch => write!(f, "Catch"),
            PanicPolicy::Propagate => write!(f, "Propagate"),
        }
    }
}
