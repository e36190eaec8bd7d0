use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counting(counter: &Rc<Cell<u32>>) -> Subscription {
    let counter = Rc::clone(counter);
    Subscription::new(move || counter.set(counter.get() + 1))
}

#[test]
fn dropping_subscription_releases_once() {
    let released = Rc::new(Cell::new(0));
    {
        let _sub = counting(&released);
        assert_eq!(released.get(), 0);
    }
    assert_eq!(released.get(), 1);
}

#[test]
fn explicit_release_does_not_release_again_on_drop() {
    let released = Rc::new(Cell::new(0));
    let sub = counting(&released);
    sub.release();
    assert_eq!(released.get(), 1);
}

#[test]
fn release_all_empties_set() {
    let released = Rc::new(Cell::new(0));
    let mut subs = Subscriptions::new();
    for _ in 0..5 {
        subs.push(counting(&released));
    }
    assert_eq!(subs.len(), 5);

    subs.release_all();
    assert!(subs.is_empty());
    assert_eq!(released.get(), 5);

    subs.release_all();
    assert_eq!(released.get(), 5);
}

#[test]
fn release_all_runs_in_attach_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut subs = Subscriptions::new();
    for name in ["resize", "mousedown", "wheel"] {
        let order = Rc::clone(&order);
        subs.push(Subscription::new(move || order.borrow_mut().push(name)));
    }
    subs.release_all();
    assert_eq!(*order.borrow(), vec!["resize", "mousedown", "wheel"]);
}

#[test]
fn dropping_set_releases_everything() {
    let released = Rc::new(Cell::new(0));
    {
        let mut subs = Subscriptions::new();
        subs.push(counting(&released));
        subs.push(counting(&released));
    }
    assert_eq!(released.get(), 2);
}

#[test]
fn debug_reports_active_state() {
    let sub = Subscription::new(|| {});
    assert!(format!("{sub:?}").contains("active: true"));
}
