//! Notifiers Example
//!
//! Two notifiers publish two different event types through one shared
//! publisher. Four subscribers react, two per event type, without either
//! side knowing about the other.
//!
//! - `SubscriberOneA` / `SubscriberOneB` react to `NotifyEventOne` only.
//! - `SubscriberTwoA` / `SubscriberTwoB` react to `NotifyEventTwo` only.
//! - `SubscriberTwoB` is registered with a factory: a fresh instance is built
//!   for every notification, the others live as long as the registry.
//!
//! Run with `cargo run --example notifiers`.

use std::sync::Arc;

use herald::*;

#[derive(Event, Debug)]
struct NotifyEventOne {
    meta_data_one: String,
}

#[derive(Event, Debug)]
struct NotifyEventTwo {
    meta_data_two: String,
    user: String,
}

struct NotifierOne {
    publisher: Publisher,
}

impl NotifierOne {
    fn new(publisher: Publisher) -> Self {
        Self {
            publisher: publisher.with_name("NotifierOne"),
        }
    }

    fn do_something_and_notify(&self) -> Result<()> {
        self.publisher.publish(&NotifyEventOne {
            meta_data_one: format!("notification from {}", self.publisher.name()),
        })?;
        Ok(())
    }
}

struct NotifierTwo {
    publisher: Publisher,
}

impl NotifierTwo {
    fn new(publisher: Publisher) -> Self {
        Self {
            publisher: publisher.with_name("NotifierTwo"),
        }
    }

    fn do_something_and_notify(&self) -> Result<()> {
        self.publisher.publish(&NotifyEventTwo {
            meta_data_two: format!("notification from {}", self.publisher.name()),
            user: "kenneth".into(),
        })?;
        Ok(())
    }
}

struct SubscriberOneA;

impl Subscriber for SubscriberOneA {
    type Event = NotifyEventOne;

    fn notify(&self, event: &NotifyEventOne, _meta: &Meta) -> Result<()> {
        println!(
            "{} is notified with values :'{}'",
            self.name(),
            event.meta_data_one
        );
        Ok(())
    }
}

struct SubscriberOneB;

impl Subscriber for SubscriberOneB {
    type Event = NotifyEventOne;

    fn notify(&self, event: &NotifyEventOne, _meta: &Meta) -> Result<()> {
        println!(
            "{} is notified with values :'{}'",
            self.name(),
            event.meta_data_one
        );
        Ok(())
    }
}

struct SubscriberTwoA;

impl Subscriber for SubscriberTwoA {
    type Event = NotifyEventTwo;

    fn notify(&self, event: &NotifyEventTwo, _meta: &Meta) -> Result<()> {
        println!(
            "{} is notified with values :'{}' and '{}'",
            self.name(),
            event.meta_data_two,
            event.user
        );
        Ok(())
    }
}

struct SubscriberTwoB;

impl Subscriber for SubscriberTwoB {
    type Event = NotifyEventTwo;

    fn notify(&self, event: &NotifyEventTwo, _meta: &Meta) -> Result<()> {
        println!(
            "{} is notified with values :'{}' and '{}'",
            self.name(),
            event.meta_data_two,
            event.user
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let registry = Registry::builder()
        .declare::<NotifyEventOne>()
        .declare::<NotifyEventTwo>()
        .with_config(Config::default().with_require_declared_events(true))
        .subscribe(SubscriberOneA)
        .subscribe(SubscriberOneB)
        .subscribe(SubscriberTwoA)
        .subscribe_factory(|| SubscriberTwoB)
        .build()?;

    let publisher = Publisher::new(Arc::new(registry));

    let notifier_one = NotifierOne::new(publisher.clone());
    let notifier_two = NotifierTwo::new(publisher);

    notifier_one.do_something_and_notify()?;
    notifier_two.do_something_and_notify()?;
    Ok(())
}
