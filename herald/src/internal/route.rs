use crate::{EventType, SubscriberEntry, SubscriberId};

/// All subscribers of one event type, in registration order.
#[derive(Debug)]
pub(crate) struct Route {
    pub event_type: EventType,
    pub entries: Vec<SubscriberEntry>,
}

impl Route {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: SubscriberEntry) {
        debug_assert_eq!(entry.event_type(), self.event_type);
        self.entries.push(entry);
    }

    pub fn ids(&self) -> impl Iterator<Item = &SubscriberId> {
        self.entries.iter().map(SubscriberEntry::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
