//! Top-level entry points.

use crate::{component::Component, host::HostTree, host::PropertyValue};
use tracing::{instrument, trace, warn};

/// The document a host tree belongs to.
///
/// This is passed explicitly wherever the document as a whole is touched.
pub trait HostEnvironment: HostTree {
	/// Creates a detached ***body*** element.
	fn create_body(&self) -> Self::Node {
		self.create_element("body", None)
	}

	/// Replaces the document's body.
	fn set_body(&self, body: &Self::Node);

	/// Whether the document is still loading, so that a body installed now would be overwritten or duplicated.
	fn is_loading(&self) -> bool;

	/// Runs `task` once the document has finished loading.
	fn when_ready(&self, task: Box<dyn FnOnce(&Self)>);

	fn head(&self) -> Option<Self::Node>;
	fn set_title(&self, title: &str);
}

/// Reconciles `component` from scratch and appends its node to `container`.
#[instrument(skip(host, component))]
pub fn render<H: HostTree>(host: &H, component: &mut Component<H>, container: &H::Node) {
	component.reconcile(host, None);
	match component.node() {
		Some(node) => host.append_child(container, &node),
		None => warn!("Rendered component has no host node. Nothing was mounted."),
	}
}

/// Renders `component` into a new body and makes that the document's body,
/// replacing whatever content the body had before.
///
/// If the document is still loading, the body is installed when it has finished.
#[instrument(skip(env, component))]
pub fn render_as_body<E: HostEnvironment>(env: &E, component: &mut Component<E>) {
	let body = env.create_body();
	render(env, component, &body);
	if env.is_loading() {
		trace!("Document is loading. Deferring body installation.");
		env.when_ready(Box::new(move |env| env.set_body(&body)));
	} else {
		env.set_body(&body);
	}
}

pub fn set_title<E: HostEnvironment>(env: &E, title: &str) {
	env.set_title(title);
}

/// Adds an external stylesheet to the document's head.
#[instrument(skip(env))]
pub fn add_stylesheet<E: HostEnvironment>(env: &E, url: &str) {
	let link = env.create_element("link", None);
	env.set_property(&link, "rel", Some(&PropertyValue::from("stylesheet")));
	env.set_property(&link, "href", Some(&PropertyValue::from(url)));
	match env.head() {
		Some(head) => env.append_child(&head, &link),
		None => warn!("Document has no head. Stylesheet {:?} was not added.", url),
	}
}
