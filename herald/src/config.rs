use crate::PanicPolicy;

/// Registry and dispatch configuration.
///
/// Use the builder methods to customize, or [`Default`] for sensible defaults.
///
/// # Examples
///
/// ```rust
/// use herald::{Config, PanicPolicy};
///
/// let config = Config::default()
///     .with_panic_policy(PanicPolicy::Propagate) // Let panics reach the caller
///     .with_require_declared_events(true);       // Reject undeclared event types
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How a panicking subscriber is reported.
    /// Default: [`PanicPolicy::Catch`]
    pub panic_policy: PanicPolicy,

    /// When set, every subscriber must handle an event type previously passed
    /// to [`RegistryBuilder::declare`](crate::RegistryBuilder::declare).
    /// Default: false
    pub require_declared_events: bool,

    /// Log publications nobody subscribed to at `warn` instead of `debug`.
    /// Default: false
    pub warn_on_unroutable: bool,
}

impl Config {
    pub fn with_panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.panic_policy = policy;
        self
    }

    /// Require all subscribed event types to be declared up front.
    ///
    /// Useful when the set of events is a closed catalog: a subscriber for an
    /// event nobody ever publishes is then reported at startup.
    pub fn with_require_declared_events(mut self, require: bool) -> Self {
        self.require_declared_events = require;
        self
    }

    pub fn with_warn_on_unroutable(mut self, warn: bool) -> Self {
        self.warn_on_unroutable = warn;
        self
    }
}
