//! The browser host, on top of [`web_sys`].

use crate::{
	host::{HostEvent, HostTree, PropertyValue},
	mount::HostEnvironment,
};
use js_sys::{Function, Reflect};
use std::rc::Rc;
use tracing::{error, instrument, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue, UnwrapThrowExt};

/// A [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document) to render into.
///
/// Failed attribute, property, style, dataset and listener mutations are logged and skipped.
/// Failed node creation and tree mutation throw into JavaScript.
#[derive(Debug, Clone)]
pub struct Dom {
	document: web_sys::Document,
}

impl Dom {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// The current window's document.
	///
	/// # Panics
	///
	/// Throws into JavaScript if there is no window or it has no document.
	#[must_use]
	pub fn from_window() -> Self {
		Self::new(
			web_sys::window()
				.expect_throw("vdom-reconcile: No `window` found.")
				.document()
				.expect_throw("vdom-reconcile: No document found for `window`."),
		)
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}
}

fn as_element(node: &web_sys::Node) -> Option<&web_sys::Element> {
	let element = node.dyn_ref::<web_sys::Element>();
	if element.is_none() {
		error!("Expected `web_sys::Element` but found {:?}.", node);
	}
	element
}

fn style(node: &web_sys::Node) -> Option<web_sys::CssStyleDeclaration> {
	if let Some(html_element) = node.dyn_ref::<web_sys::HtmlElement>() {
		Some(html_element.style())
	} else if let Some(svg_element) = node.dyn_ref::<web_sys::SvgElement>() {
		Some(svg_element.style())
	} else {
		error!("Expected an element with inline style but found {:?}.", node);
		None
	}
}

fn dataset(node: &web_sys::Node) -> Option<web_sys::DomStringMap> {
	if let Some(html_element) = node.dyn_ref::<web_sys::HtmlElement>() {
		Some(html_element.dataset())
	} else if let Some(svg_element) = node.dyn_ref::<web_sys::SvgElement>() {
		Some(svg_element.dataset())
	} else {
		error!("Expected an element with a dataset but found {:?}.", node);
		None
	}
}

impl HostEvent for web_sys::Event {
	type Node = web_sys::Node;

	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}

	fn stop_propagation(&self) {
		web_sys::Event::stop_propagation(self);
	}

	fn target(&self) -> Option<web_sys::Node> {
		web_sys::Event::target(self).and_then(|target| target.dyn_into::<web_sys::Node>().ok())
	}
}

impl HostTree for Dom {
	type Node = web_sys::Node;
	type Event = web_sys::Event;
	type Wrapper = Closure<dyn Fn(web_sys::Event)>;

	fn create_element(&self, tag_name: &str, namespace: Option<&str>) -> web_sys::Node {
		let element = match namespace {
			Some(namespace) => self.document.create_element_ns(Some(namespace), tag_name),
			None => self.document.create_element(tag_name),
		};
		element.expect_throw("vdom-reconcile: Could not create element.").into()
	}

	fn create_text_node(&self, text: &str) -> web_sys::Node {
		self.document.create_text_node(text).into()
	}

	fn set_text(&self, node: &web_sys::Node, text: &str) {
		node.set_node_value(Some(text));
	}

	#[instrument(skip(self))]
	fn set_attribute(&self, node: &web_sys::Node, name: &str, value: &str) {
		if let Some(element) = as_element(node) {
			if let Err(error) = element.set_attribute(name, value) {
				error!("Could not set attribute {:?}: {:?}", name, error);
			}
		}
	}

	#[instrument(skip(self))]
	fn remove_attribute(&self, node: &web_sys::Node, name: &str) {
		if let Some(element) = as_element(node) {
			if let Err(error) = element.remove_attribute(name) {
				warn!("Could not remove attribute {:?}: {:?}", name, error);
			}
		}
	}

	fn property(&self, node: &web_sys::Node, name: &str) -> Option<PropertyValue> {
		let value = match Reflect::get(node, &JsValue::from_str(name)) {
			Ok(value) => value,
			Err(error) => {
				error!("Could not read property {:?}: {:?}", name, error);
				return None;
			}
		};
		if let Some(value) = value.as_bool() {
			Some(PropertyValue::Bool(value))
		} else if let Some(value) = value.as_f64() {
			Some(PropertyValue::Number(value))
		} else {
			value.as_string().map(PropertyValue::String)
		}
	}

	#[instrument(skip(self))]
	fn set_property(&self, node: &web_sys::Node, name: &str, value: Option<&PropertyValue>) {
		let value = match value {
			Some(PropertyValue::Bool(value)) => JsValue::from_bool(*value),
			Some(PropertyValue::Number(value)) => JsValue::from_f64(*value),
			Some(PropertyValue::String(value)) => JsValue::from_str(value),
			None => JsValue::NULL,
		};
		match Reflect::set(node, &JsValue::from_str(name), &value) {
			Ok(true) => (),
			Ok(false) => warn!("Property {:?} was not set.", name),
			Err(error) => error!("Could not set property {:?}: {:?}", name, error),
		}
	}

	#[instrument(skip(self))]
	fn set_style_property(&self, node: &web_sys::Node, name: &str, value: &str) {
		if let Some(style) = style(node) {
			if let Err(error) = style.set_property(name, value) {
				error!("Could not set style property {:?}: {:?}", name, error);
			}
		}
	}

	#[instrument(skip(self))]
	fn remove_style_property(&self, node: &web_sys::Node, name: &str) {
		if let Some(style) = style(node) {
			if let Err(error) = style.remove_property(name) {
				warn!("Could not remove style property {:?}: {:?}", name, error);
			}
		}
	}

	#[instrument(skip(self))]
	fn set_dataset_entry(&self, node: &web_sys::Node, name: &str, value: &str) {
		if let Some(dataset) = dataset(node) {
			if let Err(error) = dataset.set(name, value) {
				error!("Could not set dataset entry {:?}: {:?}", name, error);
			}
		}
	}

	fn create_wrapper(&self, handler: Rc<dyn Fn(web_sys::Event)>) -> Closure<dyn Fn(web_sys::Event)> {
		Closure::wrap(Box::new(move |event: web_sys::Event| handler(event)) as Box<dyn Fn(web_sys::Event)>)
	}

	#[instrument(skip(self, wrapper))]
	fn add_listener(&self, node: &web_sys::Node, event_name: &str, wrapper: &Closure<dyn Fn(web_sys::Event)>) {
		if let Err(error) = node.add_event_listener_with_callback(event_name, wrapper.as_ref().unchecked_ref::<Function>()) {
			error!("Failed to add event listener {:?}: {:?}", event_name, error);
		}
	}

	#[instrument(skip(self, wrapper))]
	fn remove_listener(&self, node: &web_sys::Node, event_name: &str, wrapper: &Closure<dyn Fn(web_sys::Event)>) {
		if let Err(error) = node.remove_event_listener_with_callback(event_name, wrapper.as_ref().unchecked_ref::<Function>()) {
			error!("Failed to remove event listener {:?}: {:?}", event_name, error);
		}
	}

	fn parent_node(&self, node: &web_sys::Node) -> Option<web_sys::Node> {
		node.parent_node()
	}

	fn append_child(&self, parent: &web_sys::Node, child: &web_sys::Node) {
		parent.append_child(child).expect_throw("vdom-reconcile: Could not append child node.");
	}

	fn replace_child(&self, parent: &web_sys::Node, new_child: &web_sys::Node, old_child: &web_sys::Node) {
		parent.replace_child(new_child, old_child).expect_throw("vdom-reconcile: Could not replace child node.");
	}

	fn remove_child(&self, parent: &web_sys::Node, child: &web_sys::Node) {
		parent.remove_child(child).expect_throw("vdom-reconcile: Could not remove child node.");
	}
}

impl HostEnvironment for Dom {
	fn set_body(&self, body: &web_sys::Node) {
		match body.dyn_ref::<web_sys::HtmlElement>() {
			Some(body) => self.document.set_body(Some(body)),
			None => error!("Expected `web_sys::HtmlElement` as body but found {:?}.", body),
		}
	}

	fn is_loading(&self) -> bool {
		self.document.ready_state() == "loading"
	}

	fn when_ready(&self, task: Box<dyn FnOnce(&Self)>) {
		let dom = self.clone();
		let callback = Closure::once_into_js(move || task(&dom));
		if let Err(error) = self.document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref::<Function>()) {
			error!("Failed to wait for `DOMContentLoaded`: {:?}", error);
		}
	}

	fn head(&self) -> Option<web_sys::Node> {
		self.document.head().map(Into::into)
	}

	fn set_title(&self, title: &str) {
		self.document.set_title(title);
	}
}
