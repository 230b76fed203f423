//! The host tree port: everything the reconciler needs from a real, stateful rendering surface.
//!
//! [`crate::web::Dom`] implements it for the browser [***DOM***](https://developer.mozilla.org/en-US/docs/Web/API/Document_Object_Model).

use core::fmt::Debug;
use std::rc::Rc;
use tracing::{instrument, trace};

/// A scalar value that can be assigned to a host node property.
///
/// Clearing a property is expressed as [`None`] at the port level.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	Bool(bool),
	Number(f64),
	String(String),
}

impl PropertyValue {
	/// Whether `live`, as read back from the host, is what assigning `self` would have produced.
	///
	/// String-typed host properties (like an input's `value`) store numbers and booleans in their string form.
	#[must_use]
	pub fn matches_live(&self, live: &PropertyValue) -> bool {
		match (self, live) {
			(Self::Number(value), Self::String(live)) => value.to_string() == *live,
			(Self::Bool(value), Self::String(live)) => value.to_string() == *live,
			(value, live) => value == live,
		}
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		Self::Number(value.into())
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

/// A raw event as dispatched by the host.
pub trait HostEvent {
	type Node;

	fn prevent_default(&self);
	fn stop_propagation(&self);

	/// The node the event was originally dispatched to, if it is a node.
	fn target(&self) -> Option<Self::Node>;
}

/// Mutation (and a little query) interface over the real rendering surface.
///
/// The host owns real node lifetime. Handles are opaque to the reconciler, which only clones and compares them.
///
/// None of these methods report errors: Implementations either recover (and log) or treat failures as fatal.
pub trait HostTree: Sized + 'static {
	type Node: Clone + PartialEq + Debug + 'static;
	type Event: HostEvent<Node = Self::Node> + 'static;

	/// The host-level form of a bound listener. Its identity must be stable so that it can be unbound again.
	type Wrapper;

	fn create_element(&self, tag_name: &str, namespace: Option<&str>) -> Self::Node;
	fn create_text_node(&self, text: &str) -> Self::Node;
	fn set_text(&self, node: &Self::Node, text: &str);

	fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
	fn remove_attribute(&self, node: &Self::Node, name: &str);

	/// Reads a property live from the host node.
	///
	/// This must reflect host-driven mutation, e.g. ***value*** after user input.
	fn property(&self, node: &Self::Node, name: &str) -> Option<PropertyValue>;

	/// Sets a property, or clears it (to the host's absent representation) if `value` is [`None`].
	fn set_property(&self, node: &Self::Node, name: &str, value: Option<&PropertyValue>);

	fn set_style_property(&self, node: &Self::Node, name: &str, value: &str);
	fn remove_style_property(&self, node: &Self::Node, name: &str);

	fn set_dataset_entry(&self, node: &Self::Node, name: &str, value: &str);

	/// Wraps `handler` into something [`add_listener`](`HostTree::add_listener`) accepts.
	fn create_wrapper(&self, handler: Rc<dyn Fn(Self::Event)>) -> Self::Wrapper;
	fn add_listener(&self, node: &Self::Node, event_name: &str, wrapper: &Self::Wrapper);
	fn remove_listener(&self, node: &Self::Node, event_name: &str, wrapper: &Self::Wrapper);

	fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;
	fn append_child(&self, parent: &Self::Node, child: &Self::Node);
	fn replace_child(&self, parent: &Self::Node, new_child: &Self::Node, old_child: &Self::Node);
	fn remove_child(&self, parent: &Self::Node, child: &Self::Node);
}

/// Puts `new` into `old`'s place in the host tree.
///
/// This is issued even if `new` and `old` are the same node.
/// Detached nodes are left alone.
#[instrument(skip(host))]
pub fn replace_node<H: HostTree>(host: &H, new: &H::Node, old: &H::Node) {
	match host.parent_node(old) {
		Some(parent) => host.replace_child(&parent, new, old),
		None => trace!("Old node is detached. Nothing to replace."),
	}
}

/// Detaches `node` from its parent, if any.
#[instrument(skip(host))]
pub fn remove_node<H: HostTree>(host: &H, node: &H::Node) {
	match host.parent_node(node) {
		Some(parent) => host.remove_child(&parent, node),
		None => trace!("Node is already detached."),
	}
}
