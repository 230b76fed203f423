use std::{cell::Cell, rc::Rc};
use vdom_reconcile::{markup::attribute, render, text, Component, Composite, Element};

use recording_host_::{Call, RecordingHost};

type Host = RecordingHost;

#[test]
fn unmounted_composite_has_no_node() {
	let composite = Composite::<Host>::new(|| text("never rendered"));
	assert!(!composite.is_mounted());
	assert_eq!(composite.node(), None);
}

#[test]
fn alternating_body_kinds_replace_the_node() {
	let host = RecordingHost::new();
	let container = host.container();
	let as_element = Rc::new(Cell::new(true));

	let composite = Composite::<Host>::new({
		let as_element = Rc::clone(&as_element);
		move || {
			if as_element.get() {
				Element::new("div").with("element").into()
			} else {
				text("text")
			}
		}
	});

	render(&host, &mut Component::Composite(composite.clone()), &container);
	assert!(composite.is_mounted());
	let mut current = composite.node().unwrap();
	assert_eq!(host.children(container), vec![current]);
	assert_eq!(host.tag_name(current).as_deref(), Some("div"));

	for _ in 0..4 {
		as_element.set(!as_element.get());
		host.take_calls();
		composite.reconcile_body(&host);

		let next = composite.node().unwrap();
		assert_ne!(next, current);
		assert!(host.calls().contains(&Call::ReplaceChild {
			parent: container,
			new: next,
			old: current,
		}));
		assert_eq!(host.children(container), vec![next]);
		current = next;
	}
}

#[test]
fn rerender_updates_the_body_in_place() {
	let host = RecordingHost::new();
	let container = host.container();
	let count = Rc::new(Cell::new(0));

	let composite = Composite::<Host>::new({
		let count = Rc::clone(&count);
		move || Element::new("p").with((attribute("data-count", count.get().to_string()), count.get().to_string())).into()
	});
	render(&host, &mut composite.clone().into(), &container);
	let p = composite.node().unwrap();
	let text_node = host.children(p)[0];

	count.set(1);
	host.take_calls();
	composite.reconcile_body(&host);

	assert_eq!(composite.node(), Some(p));
	assert_eq!(
		host.take_calls(),
		vec![
			Call::SetAttribute(p, "data-count".into(), "1".into()),
			Call::SetText(text_node, "1".into()),
			Call::ReplaceChild {
				parent: p,
				new: text_node,
				old: text_node,
			},
			Call::ReplaceChild {
				parent: container,
				new: p,
				old: p,
			},
		]
	);
}

#[test]
fn same_composite_as_child_rerenders_its_body() {
	let host = RecordingHost::new();
	let count = Rc::new(Cell::new(0));
	let child = Composite::<Host>::new({
		let count = Rc::clone(&count);
		move || text(count.get().to_string())
	});
	let parent = || -> Component<Host> { Element::new("div").with(child.clone()).into() };

	let mut old = parent();
	old.reconcile(&host, None);
	let div = old.node().unwrap();
	let text_node = host.children(div)[0];
	assert_eq!(child.node(), Some(text_node));

	count.set(1);
	host.take_calls();
	let mut new = parent();
	new.reconcile(&host, Some(&old));

	assert_eq!(child.node(), Some(text_node));
	assert_eq!(host.text(text_node).as_deref(), Some("1"));
	assert_eq!(
		host.take_calls(),
		vec![
			Call::SetText(text_node, "1".into()),
			Call::ReplaceChild {
				parent: div,
				new: text_node,
				old: text_node,
			},
		]
	);
}

#[test]
fn composite_moving_forward_in_a_shrinking_list_stays_attached() {
	let host = RecordingHost::new();
	let count = Rc::new(Cell::new(0));
	let counter = Composite::<Host>::new({
		let count = Rc::clone(&count);
		move || Element::new("span").with(count.get().to_string()).into()
	});

	let mut old: Component<Host> = Element::new("div").with(("banner", counter.clone())).into();
	old.reconcile(&host, None);
	let div = old.node().unwrap();
	let banner = host.children(div)[0];
	let old_counter = counter.node().unwrap();
	assert_eq!(host.children(div), vec![banner, old_counter]);

	let mut new: Component<Host> = Element::new("div").with(counter.clone()).into();
	new.reconcile(&host, Some(&old));

	let counter_node = counter.node().unwrap();
	assert_eq!(host.children(div), vec![counter_node]);
	assert_eq!(host.parent(counter_node), Some(div));
	assert_eq!(host.parent(banner), None);
	assert_eq!(host.parent(old_counter), None);

	count.set(1);
	counter.reconcile_body(&host);
	let span = host.children(div)[0];
	assert_eq!(Some(span), counter.node());
	assert_eq!(host.text(host.children(span)[0]).as_deref(), Some("1"));
}

#[test]
fn new_composite_reuses_the_previous_composites_body() {
	let host = RecordingHost::new();
	let labelled = |label: &'static str| -> Component<Host> { Composite::<Host>::new(move || Element::new("b").with(label).into()).into() };

	let mut old: Component<Host> = Element::new("div").with(labelled("old")).into();
	old.reconcile(&host, None);
	let div = old.node().unwrap();
	let b = host.children(div)[0];
	let label = host.children(b)[0];

	host.take_calls();
	let mut new: Component<Host> = Element::new("div").with(labelled("new")).into();
	new.reconcile(&host, Some(&old));

	assert_eq!(host.children(div), vec![b]);
	assert_eq!(host.text(label).as_deref(), Some("new"));
	assert!(!host.calls().iter().any(|call| matches!(call, Call::CreateElement { .. } | Call::CreateText(_))));
}

#[test]
fn composite_replacing_a_plain_element_reconciles_against_it() {
	let host = RecordingHost::new();
	let mut old: Component<Host> = Element::new("section").with(Element::new("b").with("plain")).into();
	old.reconcile(&host, None);
	let section = old.node().unwrap();
	let b = host.children(section)[0];

	let composite = Composite::<Host>::new(|| Element::new("b").with("composed").into());
	let mut new: Component<Host> = Element::new("section").with(composite.clone()).into();
	new.reconcile(&host, Some(&old));

	assert_eq!(composite.node(), Some(b));
	assert_eq!(host.text(host.children(b)[0]).as_deref(), Some("composed"));
}
