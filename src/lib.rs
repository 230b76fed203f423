#![doc(html_root_url = "https://docs.rs/vdom-reconcile/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! A minimal virtual DOM.
//!
//! Each render pass builds a fresh [`Component`] tree, which is [reconciled](`Component::reconcile`) against the previous pass's tree.
//! Only the differences are written to the host tree through the [`HostTree`] port.
//!
//! Children are matched strictly by position. There are no keys.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod component;
mod composite;
mod element;
pub mod host;
mod listener;
pub mod markup;
pub mod mount;
pub mod svg;
mod text;
pub mod web;

pub use component::{text, Component};
pub use composite::Composite;
pub use element::Element;
pub use host::{HostEvent, HostTree, PropertyValue};
pub use listener::{Event, Listener, ListenerOptions};
pub use markup::Markup;
pub use mount::{add_stylesheet, render, render_as_body, set_title, HostEnvironment};
pub use text::Text;
