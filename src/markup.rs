//! Markup is anything that can be applied to an [`Element`] under construction: children, attributes, properties, style, dataset entries and listeners.
//!
//! Tuples, [`Vec`]s and [`Option`]s of markup apply their members in order, so element constructors can take a single `impl Markup` argument:
//!
//! ```
//! use vdom_reconcile::{markup::{attribute, class, style}, web::Dom, Element};
//!
//! let button = Element::<Dom>::new("button").with((
//! 	attribute("type", "submit"),
//! 	class("primary"),
//! 	style("margin", "0"),
//! 	"Send",
//! ));
//! assert_eq!(button.attributes["class"], "primary");
//! assert_eq!(button.children.len(), 1);
//! ```
//!
//! Later markup overwrites earlier markup of the same name.

use crate::{
	component::Component,
	composite::Composite,
	element::Element,
	host::{HostTree, PropertyValue},
	listener::Listener,
	text::Text,
};

/// Something that can be applied to an [`Element`] under construction.
pub trait Markup<H: HostTree> {
	fn apply(self, element: &mut Element<H>);
}

impl<H: HostTree> Markup<H> for Component<H> {
	fn apply(self, element: &mut Element<H>) {
		element.children.push(self);
	}
}

impl<H: HostTree> Markup<H> for Element<H> {
	fn apply(self, element: &mut Element<H>) {
		element.children.push(Component::Element(self));
	}
}

impl<H: HostTree> Markup<H> for Text<H> {
	fn apply(self, element: &mut Element<H>) {
		element.children.push(Component::Text(self));
	}
}

impl<H: HostTree> Markup<H> for Composite<H> {
	fn apply(self, element: &mut Element<H>) {
		element.children.push(Component::Composite(self));
	}
}

/// Text children.
impl<H: HostTree> Markup<H> for &str {
	fn apply(self, element: &mut Element<H>) {
		element.children.push(Component::Text(Text::new(self)));
	}
}

impl<H: HostTree> Markup<H> for String {
	fn apply(self, element: &mut Element<H>) {
		element.children.push(Component::Text(Text::new(self)));
	}
}

impl<H: HostTree> Markup<H> for Listener<H> {
	fn apply(self, element: &mut Element<H>) {
		element.listeners.push(self);
	}
}

impl<H: HostTree, M: Markup<H>> Markup<H> for Option<M> {
	fn apply(self, element: &mut Element<H>) {
		if let Some(markup) = self {
			markup.apply(element);
		}
	}
}

impl<H: HostTree, M: Markup<H>> Markup<H> for Vec<M> {
	fn apply(self, element: &mut Element<H>) {
		for markup in self {
			markup.apply(element);
		}
	}
}

impl<H: HostTree> Markup<H> for () {
	fn apply(self, _: &mut Element<H>) {}
}

macro_rules! tuple_markup {
	($($name:ident),+) => {
		impl<H: HostTree, $($name: Markup<H>),+> Markup<H> for ($($name,)+) {
			#[allow(non_snake_case)]
			fn apply(self, element: &mut Element<H>) {
				let ($($name,)+) = self;
				$($name.apply(element);)+
			}
		}
	};
}

tuple_markup!(A);
tuple_markup!(A, B);
tuple_markup!(A, B, C);
tuple_markup!(A, B, C, D);
tuple_markup!(A, B, C, D, E);
tuple_markup!(A, B, C, D, E, F);
tuple_markup!(A, B, C, D, E, F, G);
tuple_markup!(A, B, C, D, E, F, G, I);

/// An attribute, see [`attribute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: String,
	pub value: String,
}

/// A property, see [`property`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	pub name: String,
	pub value: PropertyValue,
}

/// An inline style property, see [`style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
	pub name: String,
	pub value: String,
}

/// A dataset entry, see [`data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
	pub name: String,
	pub value: String,
}

/// A class name, see [`class`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class(pub String);

pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Attribute {
	Attribute {
		name: name.into(),
		value: value.into(),
	}
}

/// A host object property like ***value*** or ***checked***.
pub fn property(name: impl Into<String>, value: impl Into<PropertyValue>) -> Property {
	Property {
		name: name.into(),
		value: value.into(),
	}
}

pub fn style(name: impl Into<String>, value: impl Into<String>) -> Style {
	Style {
		name: name.into(),
		value: value.into(),
	}
}

/// A [***dataset***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement/dataset) entry.
///
/// These are only applied when the host element is created.
pub fn data(name: impl Into<String>, value: impl Into<String>) -> Data {
	Data {
		name: name.into(),
		value: value.into(),
	}
}

/// Adds a class name to the ***class*** attribute, space-separated from any that were applied before.
pub fn class(name: impl Into<String>) -> Class {
	Class(name.into())
}

impl<H: HostTree> Markup<H> for Attribute {
	fn apply(self, element: &mut Element<H>) {
		element.attributes.insert(self.name, self.value);
	}
}

impl<H: HostTree> Markup<H> for Property {
	fn apply(self, element: &mut Element<H>) {
		element.properties.insert(self.name, self.value);
	}
}

impl<H: HostTree> Markup<H> for Style {
	fn apply(self, element: &mut Element<H>) {
		element.style.insert(self.name, self.value);
	}
}

impl<H: HostTree> Markup<H> for Data {
	fn apply(self, element: &mut Element<H>) {
		element.dataset.insert(self.name, self.value);
	}
}

impl<H: HostTree> Markup<H> for Class {
	fn apply(self, element: &mut Element<H>) {
		let classes = element.attributes.entry("class".to_owned()).or_default();
		if !classes.split_whitespace().any(|existing| existing == self.0) {
			if !classes.is_empty() {
				classes.push(' ');
			}
			classes.push_str(&self.0);
		}
	}
}
