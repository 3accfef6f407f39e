//! Sections - the three layouts and the dispatcher that picks one.
//!
//! # Architecture
//!
//! ```text
//! SectionRenderer::mount → validate props → Primary | Secondary | Tertiary → render() → Node
//! ```
//!
//! The dispatcher owns the per-process collaborators (class-name composer,
//! resolution detector, punctuation renderer) and shares them with every
//! section it mounts. Primary and secondary sections are stateless. A tertiary
//! section owns a breakpoint signal and a resize subscription for as long as it
//! stays mounted.
//!
//! # Example
//!
//! ```ignore
//! use spark_sections::{SectionConfig, SectionProps, SectionRenderer, SectionType};
//! use spark_sections::primitives::Element;
//!
//! let renderer = SectionRenderer::new(SectionConfig::default())?;
//! let section = renderer.mount(
//!     SectionProps::new("Contact")
//!         .section_type(SectionType::Secondary)
//!         .child(Element::new("p").text("Hi")),
//! )?;
//!
//! println!("{}", section.to_html());
//! section.unmount();
//! ```

mod primary;
mod props;
mod secondary;
mod tertiary;

use std::rc::Rc;

use tracing::{debug, trace};

use crate::bem::Bem;
use crate::config::SectionConfig;
use crate::error::SectionResult;
use crate::primitives::{Element, Node, PuncSpan, PunctuationRenderer};
use crate::state::resolution::{self, ResolutionDetector};
use crate::types::SectionType;

pub use primary::PrimarySection;
pub use props::{RawSectionProps, SectionContent, SectionProps};
pub use secondary::SecondarySection;
pub use tertiary::TertiarySection;

// =============================================================================
// Shared Context
// =============================================================================

/// Collaborators shared by every section a renderer mounts.
#[derive(Clone)]
pub(crate) struct SectionContext {
    pub bem: Bem,
    pub breakpoint: u32,
    pub resolution: &'static ResolutionDetector,
    pub punctuation: Rc<dyn PunctuationRenderer>,
}

impl SectionContext {
    pub fn hi_res(&self) -> bool {
        self.resolution.is_hi_res()
    }

    /// The heading and content region every layout starts with.
    ///
    /// ```text
    /// <div class="ns__inner">
    ///   <h2 class="ns__heading">HEADING<PUNCTUATION/></h2>
    ///   <div class="ns__content">CHILDREN</div>
    /// </div>
    /// ```
    pub fn content_region(&self, content: &SectionContent) -> Element {
        let heading = Element::new("h2")
            .class(self.bem.element("heading"))
            .text(content.heading.clone())
            .child(self.punctuation.render(content.heading_punctuation));

        Element::new("div")
            .class(self.bem.element("inner"))
            .child(heading)
            .child(
                Element::new("div")
                    .class(self.bem.element("content"))
                    .children(content.children.iter().cloned()),
            )
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Selects and mounts one section layout per call.
#[derive(Clone)]
pub struct SectionRenderer {
    context: Rc<SectionContext>,
    strict_section_type: bool,
}

impl SectionRenderer {
    /// Build a renderer from startup configuration.
    ///
    /// Validates the config (an empty namespace fails here, not per render)
    /// and seeds the process-wide resolution flag from
    /// `config.device_pixel_ratio`. Only the first seed in a process counts.
    pub fn new(config: SectionConfig) -> SectionResult<Self> {
        config.validate()?;
        let bem = Bem::new(config.namespace)?;
        resolution::detect_device_pixel_ratio(config.device_pixel_ratio);

        Ok(Self {
            context: Rc::new(SectionContext {
                bem,
                breakpoint: config.breakpoint,
                resolution: resolution::global(),
                punctuation: Rc::new(PuncSpan::new(config.punctuation_class)),
            }),
            strict_section_type: config.strict_section_type,
        })
    }

    /// Replace the heading punctuation renderer.
    pub fn with_punctuation(mut self, renderer: impl PunctuationRenderer + 'static) -> Self {
        Rc::make_mut(&mut self.context).punctuation = Rc::new(renderer);
        self
    }

    /// Read resolution from `detector` instead of the process-wide one.
    /// Unit tests use this to cover both density classes in one binary.
    #[cfg(test)]
    pub(crate) fn with_resolution(mut self, detector: &'static ResolutionDetector) -> Self {
        Rc::make_mut(&mut self.context).resolution = detector;
        self
    }

    pub fn bem(&self) -> &Bem {
        &self.context.bem
    }

    /// Validate `props` and mount the layout its type selects.
    ///
    /// Every field except the type is forwarded to the chosen layout.
    ///
    /// # Errors
    ///
    /// - `EmptyHeading` / `MissingChildren` for incomplete content
    /// - `MissingImage` / `ImageShapeMismatch` when the image does not fit the layout
    pub fn mount(&self, props: SectionProps) -> SectionResult<MountedSection> {
        let SectionProps {
            section_type,
            heading,
            heading_punctuation,
            image,
            children,
        } = props;
        let content = SectionContent::new(heading, heading_punctuation, children)?;
        let context = self.context.clone();

        let mounted = match section_type {
            SectionType::Primary => {
                let image = props::expect_single(section_type, image)?;
                MountedSection::Primary(PrimarySection::new(context, content, image))
            }
            SectionType::Secondary => {
                if image.is_some() {
                    trace!("secondary section ignores its image");
                }
                MountedSection::Secondary(SecondarySection::new(context, content))
            }
            SectionType::Tertiary => {
                let images = props::expect_responsive(section_type, image)?;
                MountedSection::Tertiary(TertiarySection::mount(context, content, images))
            }
        };

        debug!(section_type = %section_type, "section mounted");
        Ok(mounted)
    }

    /// Normalize authored props, then [`mount`](Self::mount) them.
    pub fn mount_raw(&self, raw: RawSectionProps) -> SectionResult<MountedSection> {
        self.mount(SectionProps::from_raw(raw, self.strict_section_type)?)
    }

    /// Mount, render once and unmount.
    pub fn render(&self, props: SectionProps) -> SectionResult<Node> {
        let section = self.mount(props)?;
        let node = section.render();
        section.unmount();
        Ok(node)
    }
}

// =============================================================================
// Mounted Section
// =============================================================================

/// A mounted section of one of the three layouts.
pub enum MountedSection {
    Primary(PrimarySection),
    Secondary(SecondarySection),
    Tertiary(TertiarySection),
}

impl MountedSection {
    pub fn section_type(&self) -> SectionType {
        match self {
            Self::Primary(_) => SectionType::Primary,
            Self::Secondary(_) => SectionType::Secondary,
            Self::Tertiary(_) => SectionType::Tertiary,
        }
    }

    /// Build the current markup.
    pub fn render(&self) -> Node {
        match self {
            Self::Primary(s) => s.render(),
            Self::Secondary(s) => s.render(),
            Self::Tertiary(s) => s.render(),
        }
    }

    pub fn to_html(&self) -> String {
        self.render().to_html()
    }

    pub fn as_tertiary(&self) -> Option<&TertiarySection> {
        match self {
            Self::Tertiary(s) => Some(s),
            _ => None,
        }
    }

    /// Tear down. Tertiary sections stop listening for resize events here.
    pub fn unmount(self) {
        let section_type = self.section_type();
        if let Self::Tertiary(s) = self {
            s.unmount();
        }
        debug!(section_type = %section_type, "section unmounted");
    }
}

// =============================================================================
// Tests
// =============================================================================
