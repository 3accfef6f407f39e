//! Heading punctuation rendering.
//!
//! Sections never style the closing glyph of a heading themselves; they hand
//! it to a [`PunctuationRenderer`]. Applications with their own treatment
//! implement the trait and pass it to the section renderer.

use crate::types::HeadingPunctuation;

use super::node::{Element, Node};

/// Renders the glyph that closes a section heading.
pub trait PunctuationRenderer {
    fn render(&self, punctuation: HeadingPunctuation) -> Node;
}

/// Default renderer: `<span class="punc">?</span>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuncSpan {
    class: String,
}

impl PuncSpan {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl Default for PuncSpan {
    fn default() -> Self {
        Self::new("punc")
    }
}

impl PunctuationRenderer for PuncSpan {
    fn render(&self, punctuation: HeadingPunctuation) -> Node {
        Element::new("span")
            .class(self.class.clone())
            .text(punctuation.glyph())
            .into()
    }
}

impl<F> PunctuationRenderer for F
where
    F: Fn(HeadingPunctuation) -> Node,
{
    fn render(&self, punctuation: HeadingPunctuation) -> Node {
        self(punctuation)
    }
}
