//! # spark-sections
//!
//! Responsive content sections for marketing pages.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! little reactive state a section has.
//!
//! ## Architecture
//!
//! A section is a heading, arbitrary content and, depending on its layout, an
//! image treatment. Three layouts exist and a dispatcher picks one per section:
//!
//! ```text
//! SectionRenderer → Primary | Secondary | Tertiary → Bem class names
//!                                       ↘ ResolutionDetector / viewport subscriptions
//! ```
//!
//! Rendering produces a [`primitives::Node`] tree that serializes to HTML.
//!
//! ## Modules
//!
//! - [`types`] - Section types, punctuation, image shapes, breakpoints
//! - [`bem`] - Block/element/modifier class names
//! - [`state`] - Resolution flag and viewport resize subscriptions
//! - [`primitives`] - Markup nodes and the punctuation collaborator
//! - [`section`] - The three layouts and the dispatcher
//! - [`config`] - Startup configuration
//! - [`error`] - Error types

pub mod bem;
pub mod config;
pub mod error;
pub mod primitives;
pub mod section;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use bem::{classes, Bem};
pub use config::SectionConfig;
pub use error::{SectionError, SectionResult};

pub use primitives::{Element, Node, PuncSpan, PunctuationRenderer};

pub use section::{
    MountedSection, PrimarySection, RawSectionProps, SectionContent, SectionProps,
    SectionRenderer, SecondarySection, TertiarySection,
};

pub use state::{
    // Resolution
    detect_device_pixel_ratio, is_hi_res, ResolutionDetector,
    // Viewport
    dispatch_resize, set_viewport_width, subscribe, viewport_width, ResizeSubscription,
};
