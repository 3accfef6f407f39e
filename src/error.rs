//! Error types for section construction.
//!
//! Every fallible path in this crate is a contract violation at the boundary:
//! bad configuration or props whose shape does not match the requested layout.
//! Nothing here is transient, so nothing is retried.
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | `EmptyNamespace`, `InvalidConfig`, `ConfigRead` |
//! | Props | `EmptyHeading`, `MissingChildren`, `MissingImage`, `ImageShapeMismatch` |
//! | Parsing | `UnknownSectionType`, `UnknownPunctuation` |

use crate::types::SectionType;

/// Errors raised while configuring or mounting a section.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SectionError {
    // ==================== Configuration ====================
    /// The class-name namespace was empty.
    #[error("namespace must not be empty")]
    EmptyNamespace,

    /// A configuration value is out of range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// The configuration file could not be read or parsed.
    #[error("failed to read config {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    // ==================== Props ====================
    /// Heading text was empty or whitespace.
    #[error("section heading must not be empty")]
    EmptyHeading,

    /// No children were supplied.
    #[error("section requires at least one child")]
    MissingChildren,

    /// The layout needs an image and none was given.
    #[error("{section_type} section requires an image")]
    MissingImage { section_type: SectionType },

    /// The image shape does not fit the layout.
    #[error("{section_type} section expects a {expected} image, got a {found} image")]
    ImageShapeMismatch {
        section_type: SectionType,
        expected: &'static str,
        found: &'static str,
    },

    // ==================== Parsing ====================
    /// Section type name not recognized (strict mode only).
    #[error("unknown section type: {value}")]
    UnknownSectionType { value: String },

    /// Heading punctuation not one of `. , ? ! …`.
    #[error("unknown heading punctuation: {value}")]
    UnknownPunctuation { value: String },
}

/// Result alias used throughout the crate.
pub type SectionResult<T> = Result<T, SectionError>;
