//! Block/element/modifier class names.
//!
//! A [`Bem`] is bound to one namespace and derives every class string a layout
//! needs from it:
//!
//! ```ignore
//! let bem = Bem::new("section")?;
//! assert_eq!(bem.block(), "section");
//! assert_eq!(bem.element("inner"), "section__inner");
//! assert_eq!(bem.modifier("tertiary"), "section--tertiary");
//! ```
//!
//! The namespace is checked once, at construction. Individual calls never fail.

use crate::error::{SectionError, SectionResult};

/// Class-name composer for a single namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bem {
    namespace: String,
}

impl Bem {
    /// Bind a composer to `namespace`. Blank namespaces are rejected.
    pub fn new(namespace: impl Into<String>) -> SectionResult<Self> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(SectionError::EmptyNamespace);
        }
        Ok(Self { namespace })
    }

    pub fn block(&self) -> String {
        self.namespace.clone()
    }

    pub fn element(&self, name: &str) -> String {
        format!("{}__{}", self.namespace, name)
    }

    pub fn modifier(&self, name: &str) -> String {
        format!("{}--{}", self.namespace, name)
    }

    /// The block class followed by one modifier, e.g. `section section--secondary`.
    pub fn block_with_modifier(&self, name: &str) -> String {
        classes(&[self.block(), self.modifier(name)])
    }
}

/// Space-join class names into a `class` attribute value.
pub fn classes(names: &[String]) -> String {
    names.join(" ")
}

// =============================================================================
// Tests
// =============================================================================
