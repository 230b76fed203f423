use crate::host::{HostEvent, HostTree};
use core::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
};
use std::rc::Rc;
use tracing::{instrument, trace};

/// How a [`Listener`]'s wrapper treats the raw event before handing it to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListenerOptions {
	prevent_default: bool,
	stop_propagation: bool,
}
impl ListenerOptions {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			prevent_default: false,
			stop_propagation: false,
		}
	}

	/// Call [***preventDefault***](https://developer.mozilla.org/en-US/docs/Web/API/Event/preventDefault) before the callback.
	#[must_use]
	pub const fn prevent_default(self) -> Self {
		Self {
			prevent_default: true,
			..self
		}
	}

	/// Call [***stopPropagation***](https://developer.mozilla.org/en-US/docs/Web/API/Event/stopPropagation) before the callback.
	#[must_use]
	pub const fn stop_propagation(self) -> Self {
		Self {
			stop_propagation: true,
			..self
		}
	}

	#[must_use]
	pub const fn prevents_default(self) -> bool {
		self.prevent_default
	}

	#[must_use]
	pub const fn stops_propagation(self) -> bool {
		self.stop_propagation
	}
}

/// The normalized event record passed to listener callbacks.
pub struct Event<H: HostTree> {
	pub event: H::Event,
	pub target: Option<H::Node>,
}
impl<H: HostTree> Debug for Event<H>
where
	H::Event: Debug,
{
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Event").field("event", &self.event).field("target", &self.target).finish()
	}
}

/// An event listener on an [`Element`](`crate::Element`).
///
/// Clones share one instance, and with it one host-level wrapper.
/// Keep reusing the same [`Listener`] across renders to avoid creating a new wrapper each time.
pub struct Listener<H: HostTree>(Rc<ListenerInstance<H>>);

struct ListenerInstance<H: HostTree> {
	name: String,
	options: ListenerOptions,
	callback: Rc<dyn Fn(Event<H>)>,
	wrapper: RefCell<Option<H::Wrapper>>,
}

impl<H: HostTree> Clone for Listener<H> {
	fn clone(&self) -> Self {
		Self(Rc::clone(&self.0))
	}
}

impl<H: HostTree> Debug for Listener<H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listener")
			.field("name", &self.0.name)
			.field("options", &self.0.options)
			.field("bound", &self.0.wrapper.borrow().is_some())
			.finish()
	}
}

impl<H: HostTree> Listener<H> {
	pub fn new(name: impl Into<String>, options: ListenerOptions, callback: impl 'static + Fn(Event<H>)) -> Self {
		Self(Rc::new(ListenerInstance {
			name: name.into(),
			options,
			callback: Rc::new(callback),
			wrapper: RefCell::new(None),
		}))
	}

	/// Shorthand for [`Listener::new`] with default [`ListenerOptions`].
	pub fn on(name: impl Into<String>, callback: impl 'static + Fn(Event<H>)) -> Self {
		Self::new(name, ListenerOptions::new(), callback)
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.0.name
	}

	#[must_use]
	pub fn options(&self) -> ListenerOptions {
		self.0.options
	}

	#[must_use]
	pub fn is_bound(&self) -> bool {
		self.0.wrapper.borrow().is_some()
	}

	/// Whether `self` and `other` are the same listener instance.
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	/// Creates the host-level wrapper unless this instance already has one.
	#[instrument(skip(self, host), fields(name = %self.0.name))]
	pub(crate) fn bind_wrapper(&self, host: &H) {
		let mut wrapper = self.0.wrapper.borrow_mut();
		if wrapper.is_some() {
			return;
		}

		let options = self.0.options;
		let callback = Rc::clone(&self.0.callback);
		*wrapper = Some(host.create_wrapper(Rc::new(move |event: H::Event| {
			if options.prevent_default {
				event.prevent_default();
			}
			if options.stop_propagation {
				event.stop_propagation();
			}
			let target = event.target();
			callback(Event { event, target });
		})));
		trace!("Created listener wrapper.");
	}

	pub(crate) fn add_to(&self, host: &H, node: &H::Node) {
		match &*self.0.wrapper.borrow() {
			Some(wrapper) => {
				trace!(name = %self.0.name, "Adding listener.");
				host.add_listener(node, &self.0.name, wrapper);
			}
			None => unreachable!("vdom-reconcile bug: Listener added before its wrapper was bound"),
		}
	}

	pub(crate) fn remove_from(&self, host: &H, node: &H::Node) {
		match &*self.0.wrapper.borrow() {
			Some(wrapper) => {
				trace!(name = %self.0.name, "Removing listener.");
				host.remove_listener(node, &self.0.name, wrapper);
			}
			None => trace!(name = %self.0.name, "Listener was never bound. Nothing to remove."),
		}
	}
}
