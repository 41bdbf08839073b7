use std::sync::{Arc, Mutex};

use super::lock;

/// Ordered record of subscriber invocations, shared by several probes.
///
/// Probes of different event types can write to the same log, which makes
/// it possible to assert on the global invocation order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, name: &str) {
        lock(&self.calls).push(name.to_owned());
    }

    /// Subscriber names, in the order they were notified.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.calls).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}
