use crate::{composite::Composite, element::Element, host::HostTree, text::Text};
use core::fmt::{self, Debug, Formatter};

/// A descriptor of desired host tree structure, built fresh for each render pass.
///
/// # Correct Use
///
/// Hand each new descriptor to [`Component::reconcile`] together with the previous pass's descriptor (or [`None`] on first mount),
/// then keep the new descriptor as "previous" for the next pass and drop the old one.
/// The host node is only valid after reconciliation.
pub enum Component<H: HostTree> {
	Text(Text<H>),
	Element(Element<H>),
	Composite(Composite<H>),
}

impl<H: HostTree> Debug for Component<H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::Element(element) => f.debug_tuple("Element").field(element).finish(),
			Self::Composite(composite) => f.debug_tuple("Composite").field(composite).finish(),
		}
	}
}

impl<H: HostTree> Component<H> {
	/// Produces or updates the owned host node, reusing `old`'s where possible.
	pub fn reconcile(&mut self, host: &H, old: Option<&Component<H>>) {
		match self {
			Self::Text(text) => text.reconcile(host, old),
			Self::Element(element) => element.reconcile(host, old),
			Self::Composite(composite) => composite.reconcile(host, old),
		}
	}

	/// The host node this component currently stands for.
	///
	/// For [`Composite`]s, this is the current body's node.
	#[must_use]
	pub fn node(&self) -> Option<H::Node> {
		match self {
			Self::Text(text) => text.node().cloned(),
			Self::Element(element) => element.node().cloned(),
			Self::Composite(composite) => composite.node(),
		}
	}
}

impl<H: HostTree> From<Text<H>> for Component<H> {
	fn from(text: Text<H>) -> Self {
		Self::Text(text)
	}
}

impl<H: HostTree> From<Element<H>> for Component<H> {
	fn from(element: Element<H>) -> Self {
		Self::Element(element)
	}
}

impl<H: HostTree> From<Composite<H>> for Component<H> {
	fn from(composite: Composite<H>) -> Self {
		Self::Composite(composite)
	}
}

/// Shorthand for a [`Component::Text`].
pub fn text<H: HostTree>(text: impl Into<String>) -> Component<H> {
	Component::Text(Text::new(text))
}
