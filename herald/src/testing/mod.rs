//! Subscribers for asserting on event delivery in tests.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! herald = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! let log = CallLog::new();
//! let first = Probe::<Deployed>::new("first").with_log(&log);
//! let registry = Registry::builder()
//!     .subscribe(first.clone())
//!     .subscribe(Failing::<Deployed>::new("broken", "disk full"))
//!     .build()?;
//!
//! let err = Publisher::new(Arc::new(registry)).publish(&event).unwrap_err();
//! assert_eq!(err.subscriber().unwrap(), "broken");
//! assert_eq!(first.count(), 1);
//! assert_eq!(log.calls(), ["first"]);
//! ```

mod call_log;
mod failing;
mod probe;

pub use call_log::CallLog;
pub use failing::Failing;
pub use probe::Probe;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// A panicking subscriber must not make the recordings of others unreadable.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
