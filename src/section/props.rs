//! Section props and boundary validation.
//!
//! [`SectionProps`] is the typed input to the dispatcher. [`RawSectionProps`]
//! is the same record as it arrives from content files, with free-form strings
//! for the enumerated fields; [`SectionProps::from_raw`] normalizes it.

use serde::Deserialize;

use crate::error::{SectionError, SectionResult};
use crate::primitives::{Element, Node};
use crate::types::{BreakpointImages, HeadingPunctuation, ImagePair, SectionImage, SectionType};

// =============================================================================
// Typed Props
// =============================================================================

/// Input record for one section.
///
/// # Example
///
/// ```ignore
/// use spark_sections::{SectionProps, SectionType, HeadingPunctuation};
/// use spark_sections::primitives::Element;
///
/// let props = SectionProps::new("Contact")
///     .section_type(SectionType::Secondary)
///     .punctuation(HeadingPunctuation::Question)
///     .child(Element::new("p").text("Hi"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProps {
    pub section_type: SectionType,
    pub heading: String,
    pub heading_punctuation: HeadingPunctuation,
    pub image: Option<SectionImage>,
    pub children: Vec<Node>,
}

impl SectionProps {
    /// Props with the given heading and every optional field at its default.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            section_type: SectionType::default(),
            heading: heading.into(),
            heading_punctuation: HeadingPunctuation::default(),
            image: None,
            children: Vec::new(),
        }
    }

    pub fn section_type(mut self, section_type: SectionType) -> Self {
        self.section_type = section_type;
        self
    }

    pub fn punctuation(mut self, punctuation: HeadingPunctuation) -> Self {
        self.heading_punctuation = punctuation;
        self
    }

    pub fn image(mut self, image: impl Into<SectionImage>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Normalize raw props.
    ///
    /// A missing `type` means primary. An unknown `type` also means primary,
    /// unless `strict` is set, in which case it is rejected.
    pub fn from_raw(raw: RawSectionProps, strict: bool) -> SectionResult<Self> {
        let section_type = match raw.section_type.as_deref() {
            None => SectionType::default(),
            Some(value) if strict => SectionType::parse(value).ok_or_else(|| {
                SectionError::UnknownSectionType {
                    value: value.to_string(),
                }
            })?,
            Some(value) => SectionType::parse_lenient(value),
        };

        let heading_punctuation = match raw.heading_punctuation.as_deref() {
            None => HeadingPunctuation::default(),
            Some(value) => HeadingPunctuation::parse(value).ok_or_else(|| {
                SectionError::UnknownPunctuation {
                    value: value.to_string(),
                }
            })?,
        };

        Ok(Self {
            section_type,
            heading: raw.heading,
            heading_punctuation,
            image: raw.image,
            children: raw
                .children
                .into_iter()
                .map(|paragraph| Element::new("p").text(paragraph).into())
                .collect(),
        })
    }
}

// =============================================================================
// Raw Props
// =============================================================================

/// Section props as authored in content files (JSON, TOML, ...).
///
/// ```json
/// {
///   "type": "tertiary",
///   "heading": "Our platform",
///   "headingPunctuation": "!",
///   "image": {
///     "lge": { "default": "lge.jpg", "retina": "lge@2x.jpg" },
///     "sml": { "default": "sml.jpg", "retina": "sml@2x.jpg" }
///   },
///   "children": ["First paragraph.", "Second paragraph."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSectionProps {
    #[serde(rename = "type", default)]
    pub section_type: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub heading_punctuation: Option<String>,
    #[serde(default)]
    pub image: Option<SectionImage>,
    /// Paragraph texts, each rendered as a `<p>`.
    #[serde(default)]
    pub children: Vec<String>,
}

// =============================================================================
// Variant Inputs
// =============================================================================

/// Everything a variant renders besides its image: the forwarded props minus
/// `type` and `image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContent {
    pub heading: String,
    pub heading_punctuation: HeadingPunctuation,
    pub children: Vec<Node>,
}

impl SectionContent {
    pub(crate) fn new(
        heading: String,
        heading_punctuation: HeadingPunctuation,
        children: Vec<Node>,
    ) -> SectionResult<Self> {
        if heading.trim().is_empty() {
            return Err(SectionError::EmptyHeading);
        }
        if children.is_empty() {
            return Err(SectionError::MissingChildren);
        }
        Ok(Self {
            heading,
            heading_punctuation,
            children,
        })
    }
}

/// The single-pair image a primary section needs.
pub(crate) fn expect_single(
    section_type: SectionType,
    image: Option<SectionImage>,
) -> SectionResult<ImagePair> {
    match image {
        Some(SectionImage::Single(pair)) => Ok(pair),
        Some(other) => Err(SectionError::ImageShapeMismatch {
            section_type,
            expected: "single",
            found: other.shape(),
        }),
        None => Err(SectionError::MissingImage { section_type }),
    }
}

/// The breakpoint-keyed image a tertiary section needs.
pub(crate) fn expect_responsive(
    section_type: SectionType,
    image: Option<SectionImage>,
) -> SectionResult<BreakpointImages> {
    match image {
        Some(SectionImage::Responsive(images)) => Ok(images),
        Some(other) => Err(SectionError::ImageShapeMismatch {
            section_type,
            expected: "breakpoint",
            found: other.shape(),
        }),
        None => Err(SectionError::MissingImage { section_type }),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawSectionProps {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let props = SectionProps::new("About");
        assert_eq!(props.section_type, SectionType::Primary);
        assert_eq!(props.heading_punctuation, HeadingPunctuation::FullStop);
        assert!(props.image.is_none());
    }

    #[test]
    fn test_from_raw_lenient() {
        let props = SectionProps::from_raw(
            raw(r#"{"type": "banner", "heading": "Hi", "children": ["x"]}"#),
            false,
        )
        .unwrap();
        assert_eq!(props.section_type, SectionType::Primary);
        assert_eq!(props.children.len(), 1);
    }

    #[test]
    fn test_from_raw_strict() {
        let err = SectionProps::from_raw(
            raw(r#"{"type": "banner", "heading": "Hi", "children": ["x"]}"#),
            true,
        )
        .unwrap_err();
        assert_eq!(err, SectionError::UnknownSectionType { value: "banner".into() });
    }

    #[test]
    fn test_from_raw_fields() {
        let props = SectionProps::from_raw(
            raw(r#"{
                "type": "secondary",
                "heading": "Contact",
                "headingPunctuation": "?",
                "children": ["Hi"]
            }"#),
            true,
        )
        .unwrap();
        assert_eq!(props.section_type, SectionType::Secondary);
        assert_eq!(props.heading_punctuation, HeadingPunctuation::Question);
        assert_eq!(props.children[0].to_html(), "<p>Hi</p>");
    }

    #[test]
    fn test_from_raw_bad_punctuation() {
        let err = SectionProps::from_raw(
            raw(r#"{"heading": "Hi", "headingPunctuation": ";", "children": ["x"]}"#),
            false,
        )
        .unwrap_err();
        assert_eq!(err, SectionError::UnknownPunctuation { value: ";".into() });
    }

    #[test]
    fn test_content_validation() {
        let child = vec![Node::text("x")];
        assert_eq!(
            SectionContent::new("  ".into(), HeadingPunctuation::FullStop, child.clone()),
            Err(SectionError::EmptyHeading)
        );
        assert_eq!(
            SectionContent::new("Hi".into(), HeadingPunctuation::FullStop, Vec::new()),
            Err(SectionError::MissingChildren)
        );
        assert!(SectionContent::new("Hi".into(), HeadingPunctuation::FullStop, child).is_ok());
    }

    #[test]
    fn test_image_shape_checks() {
        let pair = ImagePair::new("a.png", "a@2x.png");
        let responsive = BreakpointImages::new(pair.clone(), pair.clone());

        assert_eq!(
            expect_single(SectionType::Primary, Some(pair.clone().into())),
            Ok(pair.clone())
        );
        assert_eq!(
            expect_single(SectionType::Primary, Some(responsive.clone().into())),
            Err(SectionError::ImageShapeMismatch {
                section_type: SectionType::Primary,
                expected: "single",
                found: "breakpoint",
            })
        );
        assert_eq!(
            expect_responsive(SectionType::Tertiary, None),
            Err(SectionError::MissingImage { section_type: SectionType::Tertiary })
        );
        assert_eq!(
            expect_responsive(SectionType::Tertiary, Some(pair.into())),
            Err(SectionError::ImageShapeMismatch {
                section_type: SectionType::Tertiary,
                expected: "breakpoint",
                found: "single",
            })
        );
    }
}
