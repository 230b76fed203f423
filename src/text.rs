use crate::{component::Component, host::HostTree};
use core::fmt::{self, Debug, Formatter};
use tracing::{instrument, trace};

/// A text node. The text is never interpreted as markup.
pub struct Text<H: HostTree> {
	text: String,
	node: Option<H::Node>,
}

impl<H: HostTree> Debug for Text<H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Text").field("text", &self.text).field("node", &self.node).finish()
	}
}

impl<H: HostTree> Text<H> {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into(), node: None }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The owned host text node, once reconciled.
	#[must_use]
	pub fn node(&self) -> Option<&H::Node> {
		self.node.as_ref()
	}

	/// Adopts `old`'s text node if it is a reconciled [`Text`], updating its content only if it differs.
	/// Otherwise, creates a new text node.
	#[instrument(skip(self, host, old))]
	pub fn reconcile(&mut self, host: &H, old: Option<&Component<H>>) {
		if let Some(Component::Text(Text { text: old_text, node: Some(node) })) = old {
			let node = node.clone();
			if *old_text != self.text {
				if cfg!(feature = "dangerous-logging") {
					trace!(old = %old_text, new = %self.text, "Updating text node.");
				} else {
					trace!("Updating text node.");
				}
				host.set_text(&node, &self.text);
			}
			self.node = Some(node);
			return;
		}

		trace!("Creating text node.");
		self.node = Some(host.create_text_node(&self.text));
	}
}
