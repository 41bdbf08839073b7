use crate::{Event, Meta};

/// Event plus the metadata of the `publish` call that carried it.
///
/// - `event`: the user-defined payload implementing `Event`.
/// - `meta`: [`Meta`] describing who published the event and when.
///
/// Subscribers receive the event and its meta separately; envelopes are what
/// recording subscribers (see the `testing` module) keep around.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "E: serde::Serialize",
        deserialize = "E: serde::Deserialize<'de>"
    ))
)]
pub struct Envelope<E: Event> {
    pub meta: Meta,
    pub event: E,
}

impl<E: Event> Envelope<E> {
    pub fn new(event: E, meta: Meta) -> Self {
        Self { meta, event }
    }
}

impl<E: Event + Clone> From<(&E, &Meta)> for Envelope<E> {
    fn from((event, meta): (&E, &Meta)) -> Self {
        Envelope::<E> {
            meta: meta.clone(),
            event: event.clone(),
        }
    }
}
