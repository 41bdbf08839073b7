//! The `testing` helpers, used the way a downstream crate would.

use std::sync::Arc;

use herald::{
    Event, Publisher, Registry,
    testing::{CallLog, Failing, Probe},
};

#[derive(Event, Debug, Clone, PartialEq)]
struct Deployed {
    service: String,
}

#[derive(Event, Debug, Clone, PartialEq)]
struct RolledBack {
    service: String,
}

fn deployed(service: &str) -> Deployed {
    Deployed {
        service: service.into(),
    }
}

#[test]
fn test_global_order_across_event_types() {
    let log = CallLog::new();
    let deploy_a = Probe::<Deployed>::new("deploy-a").with_log(&log);
    let rollback = Probe::<RolledBack>::new("rollback").with_log(&log);
    let deploy_b = Probe::<Deployed>::new("deploy-b").with_log(&log);
    let registry = Registry::builder()
        .subscribe(deploy_a.clone())
        .subscribe(rollback.clone())
        .subscribe(deploy_b.clone())
        .build()
        .unwrap();
    let publisher = Publisher::new(Arc::new(registry)).with_name("ci");

    publisher.publish(&deployed("api")).unwrap();
    publisher
        .publish(&RolledBack {
            service: "api".into(),
        })
        .unwrap();

    assert_eq!(log.calls(), ["deploy-a", "deploy-b", "rollback"]);
    assert_eq!(deploy_a.events(), [deployed("api")]);
    assert_eq!(deploy_a.last().unwrap().meta.publisher(), "ci");
    assert_eq!(rollback.count(), 1);
}

#[test]
fn test_failing_subscriber_cuts_delivery() {
    let log = CallLog::new();
    let before = Probe::<Deployed>::new("before").with_log(&log);
    let after = Probe::<Deployed>::new("after").with_log(&log);
    let registry = Registry::builder()
        .subscribe(before.clone())
        .subscribe(Failing::<Deployed>::new("broken", "disk full"))
        .subscribe(after.clone())
        .build()
        .unwrap();

    let err = Publisher::new(Arc::new(registry))
        .publish(&deployed("api"))
        .unwrap_err();

    assert_eq!(err.subscriber().unwrap(), "broken");
    assert!(err.to_string().contains("disk full"));
    assert_eq!(log.calls(), ["before"]);
    assert_eq!(after.count(), 0);
}
