use crate::{
	component::Component,
	host::{remove_node, replace_node, HostTree, PropertyValue},
	listener::Listener,
	markup::Markup,
};
use core::fmt::{self, Debug, Formatter};
use hashbrown::HashMap;
use tracing::{instrument, level_filters::STATIC_MAX_LEVEL, trace, trace_span, warn, Level};

/// Properties whose current value is owned by the host (e.g. through user input) rather than by the last render.
const LIVE_PROPERTIES: [&str; 2] = ["value", "checked"];

/// A virtual host element.
///
/// `tag_name` and `namespace` can't change for an existing host node.
/// Reconciling against an element that differs in either creates a new node (and subtree).
pub struct Element<H: HostTree> {
	pub tag_name: String,
	pub namespace: Option<String>,
	pub attributes: HashMap<String, String>,
	pub properties: HashMap<String, PropertyValue>,
	pub style: HashMap<String, String>,
	/// Only applied when the host node is created. Changes to an already created element are not reflected.
	pub dataset: HashMap<String, String>,
	pub listeners: Vec<Listener<H>>,
	pub children: Vec<Component<H>>,
	node: Option<H::Node>,
}

impl<H: HostTree> Debug for Element<H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag_name", &self.tag_name)
			.field("namespace", &self.namespace)
			.field("attributes", &self.attributes)
			.field("properties", &self.properties)
			.field("style", &self.style)
			.field("dataset", &self.dataset)
			.field("listeners", &self.listeners)
			.field("children", &self.children)
			.field("node", &self.node)
			.finish()
	}
}

impl<H: HostTree> Element<H> {
	pub fn new(tag_name: impl Into<String>) -> Self {
		Self {
			tag_name: tag_name.into(),
			namespace: None,
			attributes: HashMap::new(),
			properties: HashMap::new(),
			style: HashMap::new(),
			dataset: HashMap::new(),
			listeners: Vec::new(),
			children: Vec::new(),
			node: None,
		}
	}

	/// Creates an element in the given namespace, e.g. `http://www.w3.org/2000/svg`.
	pub fn new_ns(namespace: impl Into<String>, tag_name: impl Into<String>) -> Self {
		Self {
			namespace: Some(namespace.into()),
			..Self::new(tag_name)
		}
	}

	/// Applies `markup` to this element.
	#[must_use]
	pub fn with(mut self, markup: impl Markup<H>) -> Self {
		markup.apply(&mut self);
		self
	}

	pub fn add_child(&mut self, child: impl Into<Component<H>>) {
		self.children.push(child.into());
	}

	/// The owned host element, once reconciled.
	#[must_use]
	pub fn node(&self) -> Option<&H::Node> {
		self.node.as_ref()
	}

	/// Updates `old`'s host element in place if it is a reconciled [`Element`] with the same tag name and namespace.
	/// Otherwise, creates a new host element and subtree.
	#[instrument(skip(self, host, old), fields(tag = %self.tag_name))]
	pub fn reconcile(&mut self, host: &H, old: Option<&Component<H>>) {
		for listener in &self.listeners {
			listener.bind_wrapper(host);
		}

		match old {
			Some(Component::Element(old)) if old.tag_name == self.tag_name && old.namespace == self.namespace => match &old.node {
				Some(node) => {
					let node = node.clone();
					self.update(host, old, &node);
					self.node = Some(node);
				}
				None => {
					warn!("Previous <{}> was never reconciled. Creating a new element instead.", old.tag_name);
					self.create(host);
				}
			},
			_ => self.create(host),
		}
	}

	#[allow(clippy::too_many_lines)]
	fn update(&mut self, host: &H, old: &Element<H>, node: &H::Node) {
		{
			let span = trace_span!("Diffing attributes");
			let _enter = span.enter();
			for (name, value) in &self.attributes {
				if old.attributes.get(name) != Some(value) {
					log_set("attribute", name, value);
					host.set_attribute(node, name, value);
				}
			}
			for name in old.attributes.keys() {
				if !self.attributes.contains_key(name) {
					trace!(%name, "Removing attribute.");
					host.remove_attribute(node, name);
				}
			}
		}

		{
			let span = trace_span!("Diffing properties");
			let _enter = span.enter();
			for (name, value) in &self.properties {
				let changed = if LIVE_PROPERTIES.contains(&name.as_str()) {
					!host.property(node, name).map_or(false, |live| value.matches_live(&live))
				} else {
					old.properties.get(name) != Some(value)
				};
				if changed {
					log_set("property", name, value);
					host.set_property(node, name, Some(value));
				}
			}
			for name in old.properties.keys() {
				if !self.properties.contains_key(name) {
					trace!(%name, "Clearing property.");
					host.set_property(node, name, None);
				}
			}
		}

		{
			let span = trace_span!("Applying style");
			let _enter = span.enter();
			for (name, value) in &self.style {
				host.set_style_property(node, name, value);
			}
			for name in old.style.keys() {
				if !self.style.contains_key(name) {
					trace!(%name, "Removing style property.");
					host.remove_style_property(node, name);
				}
			}
		}

		if STATIC_MAX_LEVEL >= Level::WARN && self.dataset != old.dataset {
			warn!("Dataset of <{}> changed on an existing element. Dataset entries are only applied on creation.", self.tag_name);
		}

		{
			let span = trace_span!("Rebinding listeners", old = old.listeners.len(), new = self.listeners.len());
			let _enter = span.enter();
			for listener in &old.listeners {
				listener.remove_from(host, node);
			}
			for listener in &self.listeners {
				listener.add_to(host, node);
			}
		}

		let span = trace_span!("Diffing children", old = old.children.len(), new = self.children.len());
		let _enter = span.enter();
		// Composite handles may be shared between both lists, so their nodes are read before anything is re-rendered.
		let old_nodes: Vec<_> = old.children.iter().map(Component::node).collect();
		for (i, child) in self.children.iter_mut().enumerate() {
			match old.children.get(i) {
				Some(old_child) => {
					child.reconcile(host, Some(old_child));
					if is_same_composite(child, old_child) {
						// Already put into place by `Composite::reconcile_body`.
						continue;
					}
					if let (Some(new_node), Some(old_node)) = (child.node(), &old_nodes[i]) {
						replace_node(host, &new_node, old_node);
					}
				}
				None => {
					child.reconcile(host, None);
					if let Some(child_node) = child.node() {
						host.append_child(node, &child_node);
					}
				}
			}
		}
		for old_node in old_nodes.iter().skip(self.children.len()).flatten() {
			remove_node(host, old_node);
		}
	}

	fn create(&mut self, host: &H) {
		trace!(namespace = ?self.namespace, "Creating element.");
		let node = host.create_element(&self.tag_name, self.namespace.as_deref());

		for (name, value) in &self.attributes {
			log_set("attribute", name, value);
			host.set_attribute(&node, name, value);
		}
		for (name, value) in &self.properties {
			log_set("property", name, value);
			host.set_property(&node, name, Some(value));
		}
		for (name, value) in &self.dataset {
			log_set("dataset entry", name, value);
			host.set_dataset_entry(&node, name, value);
		}
		for (name, value) in &self.style {
			host.set_style_property(&node, name, value);
		}
		for listener in &self.listeners {
			listener.add_to(host, &node);
		}

		for child in &mut self.children {
			child.reconcile(host, None);
			if let Some(child_node) = child.node() {
				host.append_child(&node, &child_node);
			}
		}

		self.node = Some(node);
	}
}

fn is_same_composite<H: HostTree>(new: &Component<H>, old: &Component<H>) -> bool {
	matches!((new, old), (Component::Composite(new), Component::Composite(old)) if new.ptr_eq(old))
}

fn log_set(what: &str, name: &str, value: &impl Debug) {
	if cfg!(feature = "dangerous-logging") {
		trace!(%name, ?value, "Setting {}.", what);
	} else {
		trace!(%name, "Setting {}.", what);
	}
}
