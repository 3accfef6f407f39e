//! Core types for spark-sections.
//!
//! These types describe what a section is made of: which layout renders it,
//! which glyph closes its heading, and which image assets it may display.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Viewport width (logical units) above which a section is considered large.
pub const DEFAULT_BREAKPOINT: u32 = 768;

// =============================================================================
// Section Type
// =============================================================================

/// The closed set of section layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionType {
    /// Heading, content and the decorative artwork.
    #[default]
    Primary,
    /// Heading and content only.
    Secondary,
    /// Heading, content and a breakpoint-driven background image.
    Tertiary,
}

impl SectionType {
    /// Parse from the layout name. Case-sensitive, like the markup attribute it mirrors.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "tertiary" => Some(Self::Tertiary),
            _ => None,
        }
    }

    /// Parse, treating anything unrecognized as [`SectionType::Primary`].
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(value = s, "unknown section type, rendering as primary");
            Self::Primary
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Heading Punctuation
// =============================================================================

/// Glyph rendered after a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeadingPunctuation {
    #[default]
    FullStop,
    Comma,
    Question,
    Exclamation,
    Ellipsis,
}

impl HeadingPunctuation {
    /// Parse a glyph. Accepts both `"..."` and `"…"` for the ellipsis.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "." => Some(Self::FullStop),
            "," => Some(Self::Comma),
            "?" => Some(Self::Question),
            "!" => Some(Self::Exclamation),
            "..." | "…" => Some(Self::Ellipsis),
            _ => None,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::FullStop => ".",
            Self::Comma => ",",
            Self::Question => "?",
            Self::Exclamation => "!",
            Self::Ellipsis => "…",
        }
    }
}

impl fmt::Display for HeadingPunctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

// =============================================================================
// Images
// =============================================================================

/// A standard-density asset and its high-density counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    pub default: String,
    pub retina: String,
}

impl ImagePair {
    pub fn new(default: impl Into<String>, retina: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            retina: retina.into(),
        }
    }

    /// The asset to show on a display of the given density class.
    pub fn pick(&self, hi_res: bool) -> &str {
        if hi_res { &self.retina } else { &self.default }
    }
}

/// One [`ImagePair`] per breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointImages {
    pub lge: ImagePair,
    pub sml: ImagePair,
}

impl BreakpointImages {
    pub fn new(lge: ImagePair, sml: ImagePair) -> Self {
        Self { lge, sml }
    }

    pub fn for_breakpoint(&self, breakpoint: Breakpoint) -> &ImagePair {
        match breakpoint {
            Breakpoint::Small => &self.sml,
            Breakpoint::Large => &self.lge,
        }
    }

    /// Resolve the single URL for a breakpoint and density class.
    pub fn resolve(&self, breakpoint: Breakpoint, hi_res: bool) -> &str {
        self.for_breakpoint(breakpoint).pick(hi_res)
    }
}

/// Image prop: either a single pair or a breakpoint-keyed structure.
///
/// Deserializes from either shape without a tag, so `{default, retina}` and
/// `{lge: {..}, sml: {..}}` both load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionImage {
    Responsive(BreakpointImages),
    Single(ImagePair),
}

impl SectionImage {
    /// Short shape name used in error messages.
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Single(_) => "single",
            Self::Responsive(_) => "breakpoint",
        }
    }
}

impl From<ImagePair> for SectionImage {
    fn from(pair: ImagePair) -> Self {
        Self::Single(pair)
    }
}

impl From<BreakpointImages> for SectionImage {
    fn from(images: BreakpointImages) -> Self {
        Self::Responsive(images)
    }
}

// =============================================================================
// Breakpoint
// =============================================================================

/// Presentation state of a responsive section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Small,
    Large,
}

impl Breakpoint {
    /// `Large` when `width` is strictly above `threshold`.
    pub const fn for_width(width: u32, threshold: u32) -> Self {
        if width > threshold { Self::Large } else { Self::Small }
    }
}

// =============================================================================
// Tests
// =============================================================================
