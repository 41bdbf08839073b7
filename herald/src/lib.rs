//! Herald - in-process event dispatcher
//!
//! A small, synchronous publish/subscribe core: publishers emit typed
//! notification events, subscribers react to the event types they declare,
//! and neither side knows about the other.
//!
//! - Every event type is a plain Rust type implementing [`Event`].
//! - Every [`Subscriber`] names exactly one event type (its associated `Event`).
//! - A [`Registry`] indexes subscribers by [`EventType`], once, at startup.
//! - A [`Publisher`] routes each event by its exact runtime type and notifies
//!   the matching subscribers in registration order before returning.
//!
//! ```rust
//! use std::sync::Arc;
//! use herald::{Event, Meta, Publisher, Registry, Result, Subscriber};
//!
//! struct UserSignedUp { user: String }
//! impl Event for UserSignedUp {}
//!
//! struct WelcomeMail;
//! impl Subscriber for WelcomeMail {
//!     type Event = UserSignedUp;
//!     fn notify(&self, event: &UserSignedUp, _meta: &Meta) -> Result<()> {
//!         println!("welcome, {}", event.user);
//!         Ok(())
//!     }
//! }
//!
//! let registry = Registry::builder().subscribe(WelcomeMail).build()?;
//! let publisher = Publisher::new(Arc::new(registry));
//! publisher.publish(&UserSignedUp { user: "kenneth".into() })?;
//! # Ok::<(), herald::Error>(())
//! ```
//!
//! See `examples/notifiers.rs`.

mod config;
mod entry;
mod envelope;
mod error;
mod event;
mod event_type;
mod meta;
mod panic_policy;
mod publisher;
mod registry;
mod registry_builder;
mod subscriber;
mod subscriber_id;

mod internal;

#[cfg(any(test, feature = "test-harness"))]
pub mod testing;

pub use config::Config;
pub use entry::{Lifecycle, SubscriberEntry};
pub use envelope::Envelope;
pub use error::Error;
pub use event::Event;
pub use event_type::EventType;
pub use meta::Meta;
pub use panic_policy::PanicPolicy;
pub use publisher::Publisher;
pub use registry::Registry;
pub use registry_builder::RegistryBuilder;
pub use subscriber::Subscriber;
pub use subscriber_id::SubscriberId;

#[cfg(feature = "macros")]
pub use herald_macros::Event;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type EventId = u128;
