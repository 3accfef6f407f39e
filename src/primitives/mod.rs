//! Markup primitives - the building blocks sections render into.
//!
//! - [`node`] - Element/text tree with HTML serialization
//! - [`punctuation`] - Heading punctuation collaborator
//!
//! Sections build a fresh [`Node`] tree on every render; nothing here holds
//! state.

pub mod node;
pub mod punctuation;

pub use node::{Element, Node};
pub use punctuation::{PuncSpan, PunctuationRenderer};
