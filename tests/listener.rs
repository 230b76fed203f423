use std::{cell::RefCell, rc::Rc};
use vdom_reconcile::{Component, Element, Event, Listener, ListenerOptions};

use recording_host_::{Call, NodeId, RecordingHost};

type Host = RecordingHost;

fn button(listener: &Listener<Host>) -> Component<Host> {
	Element::new("button").with(listener.clone()).into()
}

#[test]
fn wrapper_is_created_once_per_listener_instance() {
	let host = RecordingHost::new();
	let listener = Listener::<Host>::on("click", |_| ());
	assert!(!listener.is_bound());

	let mut previous = button(&listener);
	previous.reconcile(&host, None);
	for _ in 0..3 {
		let mut next = button(&listener);
		next.reconcile(&host, Some(&previous));
		previous = next;
	}

	assert!(listener.is_bound());
	assert_eq!(host.calls().iter().filter(|call| **call == Call::CreateWrapper).count(), 1);
	assert_eq!(host.listener_names(previous.node().unwrap()), vec!["click".to_owned()]);
}

#[test]
fn separate_instances_get_separate_wrappers() {
	let host = RecordingHost::new();
	let a = Listener::<Host>::on("click", |_| ());
	let b = Listener::<Host>::on("click", |_| ());
	assert!(!a.ptr_eq(&b));
	assert!(a.ptr_eq(&a.clone()));

	let mut component: Component<Host> = Element::new("div").with((a, b)).into();
	component.reconcile(&host, None);

	assert_eq!(host.calls().iter().filter(|call| **call == Call::CreateWrapper).count(), 2);
	assert_eq!(host.listener_names(component.node().unwrap()).len(), 2);
}

#[test]
fn options_are_applied_before_the_callback() {
	let host = RecordingHost::new();
	let received = Rc::new(RefCell::new(Vec::<NodeId>::new()));
	let listener = Listener::<Host>::new("submit", ListenerOptions::new().prevent_default().stop_propagation(), {
		let received = Rc::clone(&received);
		move |event: Event<Host>| {
			assert!(event.event.default_prevented.get());
			assert!(event.event.propagation_stopped.get());
			received.borrow_mut().push(event.target.unwrap());
		}
	});
	assert!(listener.options().prevents_default());
	assert!(listener.options().stops_propagation());

	let mut form: Component<Host> = Element::new("form").with(listener).into();
	form.reconcile(&host, None);
	let node = form.node().unwrap();

	let event = host.dispatch(node, "submit");
	assert!(event.default_prevented.get());
	assert!(event.propagation_stopped.get());
	assert_eq!(*received.borrow(), vec![node]);
}

#[test]
fn default_options_leave_the_event_alone() {
	let host = RecordingHost::new();
	let calls = Rc::new(RefCell::new(0));
	let listener = Listener::<Host>::on("click", {
		let calls = Rc::clone(&calls);
		move |_| *calls.borrow_mut() += 1
	});

	let mut component = button(&listener);
	component.reconcile(&host, None);

	let event = host.dispatch(component.node().unwrap(), "click");
	assert!(!event.default_prevented.get());
	assert!(!event.propagation_stopped.get());
	assert_eq!(*calls.borrow(), 1);

	host.dispatch(component.node().unwrap(), "keydown");
	assert_eq!(*calls.borrow(), 1);
}
