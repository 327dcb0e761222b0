//! Integration tests for connecting callbacks through a window.

use std::cell::RefCell;
use std::rc::Rc;

use trellis::actions::{ACTION_MOVE_LEFT, ACTION_NAV_BACK, ACTION_PREVIOUS_MENU};
use trellis::prelude::*;

fn setup() -> (Window, Rc<RefCell<Vec<&'static str>>>) {
    let mut window = Window::new();
    window.set_geometry(&WindowConfig::new(640, 360, 2, 2)).unwrap();
    (window, Rc::default())
}

fn record(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> Callback {
    let log = log.clone();
    Callback::new(move || log.borrow_mut().push(label))
}

struct Approve;

impl ControlHooks for Approve {
    fn pre_connect(&mut self, _callback: &Callback, _host: HostId) -> ConnectDecision {
        true.into()
    }
}

struct Reject;

impl ControlHooks for Reject {
    fn pre_connect(&mut self, _callback: &Callback, _host: HostId) -> ConnectDecision {
        false.into()
    }
}

#[test]
fn test_dispatch_in_registration_order() {
    let (mut window, log) = setup();
    let button = window.insert(BasicControl::button().with_hooks(Approve));

    window.connect(button, record(&log, "first"));
    window.connect(button, record(&log, "second"));
    window.on_control(button);

    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn test_disconnect_without_callback_removes_all() {
    let (mut window, log) = setup();
    window.connect(ACTION_MOVE_LEFT, record(&log, "a"));
    window.connect(ACTION_MOVE_LEFT, record(&log, "b"));

    window.disconnect(ACTION_MOVE_LEFT, None).unwrap();
    window.on_action(ACTION_MOVE_LEFT);

    assert!(log.borrow().is_empty());
    assert_eq!(
        window.disconnect(ACTION_MOVE_LEFT, None),
        Err(Error::NotConnected {
            key: EventKey::Action(ACTION_MOVE_LEFT),
            callback: false,
        })
    );
}

#[test]
fn test_disconnect_unknown_callback() {
    let (mut window, log) = setup();
    window.connect(ACTION_NAV_BACK, record(&log, "kept"));
    let stranger = record(&log, "stranger");

    let err = window.disconnect(ACTION_NAV_BACK, Some(&stranger)).unwrap_err();
    assert_eq!(
        err,
        Error::NotConnected {
            key: EventKey::Action(ACTION_NAV_BACK),
            callback: true,
        }
    );
    window.on_action(ACTION_NAV_BACK);
    assert_eq!(*log.borrow(), vec!["kept"]);
}

#[test]
fn test_rejecting_hook_in_event_list() {
    let (mut window, log) = setup();
    let open = window.insert(BasicControl::button());
    let locked = window.insert(BasicControl::button().with_hooks(Reject));
    let callback = record(&log, "pressed");

    window.connect_event_list([open, locked], &callback);
    window.on_control(open);
    window.on_control(locked);

    assert_eq!(*log.borrow(), vec!["pressed"]);
    assert!(window.events().is_connected(open));
    assert!(!window.events().is_connected(locked));
}

#[test]
fn test_escape_closes_without_dispatch() {
    let (mut window, log) = setup();
    window.connect(ACTION_PREVIOUS_MENU, record(&log, "escape"));

    window.on_action(ACTION_PREVIOUS_MENU);

    assert!(window.is_closed());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_removal_leaves_connections() {
    let (mut window, log) = setup();
    let button = window.insert(BasicControl::button());
    window.place_control(button, Cell::new(0, 0)).unwrap();
    window.connect(button, record(&log, "still here"));

    window.remove_control(button).unwrap();
    window.on_control(button);

    assert_eq!(*log.borrow(), vec!["still here"]);
}
