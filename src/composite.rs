use crate::{
	component::Component,
	host::{replace_node, HostTree},
};
use core::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
};
use std::rc::Rc;
use tracing::{instrument, trace};

/// A stateful component that defers its structure to a render function.
///
/// This is a handle: Clones refer to the same render function and body.
/// Nothing re-renders automatically. Call [`Composite::reconcile_body`] after changing whatever the render function reads.
pub struct Composite<H: HostTree>(Rc<RefCell<CompositeState<H>>>);

struct CompositeState<H: HostTree> {
	render: Box<dyn FnMut() -> Component<H>>,
	body: Option<Component<H>>,
}

impl<H: HostTree> Clone for Composite<H> {
	fn clone(&self) -> Self {
		Self(Rc::clone(&self.0))
	}
}

impl<H: HostTree> Debug for Composite<H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.0.try_borrow() {
			Ok(state) => f.debug_struct("Composite").field("body", &state.body).finish(),
			Err(_) => f.debug_struct("Composite").field("body", &"<rendering>").finish(),
		}
	}
}

impl<H: HostTree> Composite<H> {
	pub fn new(render: impl 'static + FnMut() -> Component<H>) -> Self {
		Self(Rc::new(RefCell::new(CompositeState {
			render: Box::new(render),
			body: None,
		})))
	}

	/// Whether this composite has rendered a body yet.
	#[must_use]
	pub fn is_mounted(&self) -> bool {
		self.0.borrow().body.is_some()
	}

	/// The current body's host node. [`None`] while unmounted.
	#[must_use]
	pub fn node(&self) -> Option<H::Node> {
		self.0.borrow().body.as_ref().and_then(Component::node)
	}

	/// Whether `self` and `other` are handles to the same composite.
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	/// Renders a new body, reconciles it against the previous one and, if there was one, puts the new node into its place.
	///
	/// # Panics
	///
	/// Iff called from within this composite's own render function.
	#[instrument(skip(self, host))]
	pub fn reconcile_body(&self, host: &H) {
		let mut state = self.0.borrow_mut();
		let state = &mut *state;
		let old_body = state.body.take();
		let mut body = (state.render)();
		body.reconcile(host, old_body.as_ref());
		match &old_body {
			Some(old_body) => {
				if let (Some(new_node), Some(old_node)) = (body.node(), old_body.node()) {
					replace_node(host, &new_node, &old_node);
				}
			}
			None => trace!("Mounted."),
		}
		state.body = Some(body);
	}

	/// Reconciles this composite in place of `old`, as when it appears as a child.
	///
	/// A fresh body is rendered and reconciled against `old`'s body (if `old` is a [`Composite`]) or against `old` itself.
	/// If `old` is this very composite, this is the same as [`Composite::reconcile_body`].
	#[instrument(skip(self, host, old))]
	pub fn reconcile(&self, host: &H, old: Option<&Component<H>>) {
		if let Some(Component::Composite(old)) = old {
			if self.ptr_eq(old) {
				trace!("Same composite as before. Re-rendering its body.");
				return self.reconcile_body(host);
			}
		}

		let mut state = self.0.borrow_mut();
		let state = &mut *state;
		let mut body = (state.render)();
		match old {
			Some(Component::Composite(old)) => body.reconcile(host, old.0.borrow().body.as_ref()),
			old => body.reconcile(host, old),
		}
		state.body = Some(body);
	}
}
