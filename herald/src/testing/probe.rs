use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

use super::{CallLog, lock};
use crate::{Envelope, Event, Meta, Result, Subscriber};

/// Recording subscriber.
///
/// Every notification is stored as an [`Envelope`]. Clones share the same
/// recordings: register one clone, keep another for assertions.
pub struct Probe<E: Event + Clone> {
    name: Arc<str>,
    envelopes: Arc<Mutex<Vec<Envelope<E>>>>,
    log: Option<CallLog>,
}

impl<E: Event + Clone> Probe<E> {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            envelopes: Arc::new(Mutex::new(Vec::new())),
            log: None,
        }
    }

    /// Also record each notification in a shared [`CallLog`].
    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    pub fn envelopes(&self) -> Vec<Envelope<E>> {
        lock(&self.envelopes).clone()
    }

    pub fn events(&self) -> Vec<E> {
        lock(&self.envelopes)
            .iter()
            .map(|envelope| envelope.event.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Envelope<E>> {
        lock(&self.envelopes).last().cloned()
    }

    pub fn count(&self) -> usize {
        lock(&self.envelopes).len()
    }

    pub fn clear(&self) {
        lock(&self.envelopes).clear();
    }
}

impl<E: Event + Clone> Clone for Probe<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            envelopes: self.envelopes.clone(),
            log: self.log.clone(),
        }
    }
}

impl<E: Event + Clone> Subscriber for Probe<E> {
    type Event = E;

    fn notify(&self, event: &E, meta: &Meta) -> Result<()> {
        if let Some(log) = &self.log {
            log.record(&self.name);
        }
        lock(&self.envelopes).push(Envelope::from((event, meta)));
        Ok(())
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(self.name.to_string())
    }
}
