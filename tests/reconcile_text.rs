use vdom_reconcile::{text, Component, Element};

use recording_host_::{Call, RecordingHost};

type Host = RecordingHost;

#[test]
fn first_render_creates_a_text_node() {
	let host = RecordingHost::new();
	let mut component = text::<Host>("hello");
	component.reconcile(&host, None);

	let node = component.node().unwrap();
	assert_eq!(host.text(node).as_deref(), Some("hello"));
	assert_eq!(host.take_calls(), vec![Call::CreateText("hello".into())]);
}

#[test]
fn unchanged_text_is_not_written() {
	let host = RecordingHost::new();
	let mut old = text::<Host>("hello");
	old.reconcile(&host, None);
	host.take_calls();

	let mut new = text("hello");
	new.reconcile(&host, Some(&old));

	assert_eq!(new.node(), old.node());
	assert_eq!(host.take_calls(), Vec::<Call>::new());
}

#[test]
fn changed_text_is_written_once() {
	let host = RecordingHost::new();
	let mut old = text::<Host>("hi");
	old.reconcile(&host, None);
	host.take_calls();

	let mut new = text("hello");
	new.reconcile(&host, Some(&old));

	let node = new.node().unwrap();
	assert_eq!(Some(node), old.node());
	assert_eq!(host.take_calls(), vec![Call::SetText(node, "hello".into())]);
	assert_eq!(host.text(node).as_deref(), Some("hello"));
}

#[test]
fn previous_element_is_not_reused() {
	let host = RecordingHost::new();
	let mut old: Component<Host> = Element::new("span").into();
	old.reconcile(&host, None);
	host.take_calls();

	let mut new = text("hello");
	new.reconcile(&host, Some(&old));

	assert_ne!(new.node(), old.node());
	assert_eq!(host.take_calls(), vec![Call::CreateText("hello".into())]);
}

#[test]
fn unreconciled_previous_text_is_not_reused() {
	let host = RecordingHost::new();
	let old = text::<Host>("hello");

	let mut new = text("hello");
	new.reconcile(&host, Some(&old));

	assert!(new.node().is_some());
	assert_eq!(host.take_calls(), vec![Call::CreateText("hello".into())]);
}
