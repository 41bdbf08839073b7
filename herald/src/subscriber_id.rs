use std::{hash::Hash, ops::Deref, sync::Arc};

/// Name under which a subscriber is registered.
///
/// Ids are unique within a [`Registry`](crate::Registry) and are reported in
/// [`Error::SubscriberFailed`](crate::Error::SubscriberFailed) so the caller
/// of `publish` knows which subscriber broke delivery.
///
/// Ids are cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriberId(Arc<str>);

impl SubscriberId {
    pub(crate) fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the subscriber's name as registered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for SubscriberId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for SubscriberId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SubscriberId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_name() {
        let a = SubscriberId::new("audit");
        let b = SubscriberId::new(String::from("audit"));
        assert_eq!(a, b);
        assert_eq!(a, "audit");
        assert_ne!(a, SubscriberId::new("metrics"));
    }

    #[test]
    fn test_display_and_deref() {
        let id = SubscriberId::new("audit");
        assert_eq!(id.to_string(), "audit");
        assert_eq!(id.len(), 5);
        assert_eq!(id.name(), "audit");
    }
}
