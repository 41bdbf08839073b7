use std::{borrow::Cow, marker::PhantomData, sync::Arc};

use crate::{Error, Event, Meta, Result, Subscriber};

/// Subscriber that fails every notification with [`Error::External`].
pub struct Failing<E> {
    name: Arc<str>,
    message: Arc<str>,
    _event: PhantomData<fn(&E)>,
}

impl<E: Event> Failing<E> {
    pub fn new(name: impl Into<Arc<str>>, message: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            _event: PhantomData,
        }
    }
}

impl<E: Event> Subscriber for Failing<E> {
    type Event = E;

    fn notify(&self, _event: &E, _meta: &Meta) -> Result<()> {
        Err(Error::External(self.message.clone()))
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(self.name.to_string())
    }
}
