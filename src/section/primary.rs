//! Primary layout: heading and content beside a decorative artwork.
//!
//! The artwork is a fixed 320x240 vector frame: three strokes above and three
//! below an embedded raster image. Only the raster reference varies, between
//! the standard and retina asset.

use std::rc::Rc;

use crate::bem::Bem;
use crate::primitives::{Element, Node};
use crate::types::ImagePair;

use super::{SectionContent, SectionContext};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const VIEW_BOX: &str = "0 0 320 240";

// Strokes drawn before the image.
const UPPER_PATHS: [&str; 3] = [
    "M212.339 58.5178C211.925 59.2352 212.171 60.1526 212.888 60.5668C213.605 60.981 214.523 60.7352 214.937 60.0178C215.351 59.3003 215.105 58.383 214.388 57.9688C213.671 57.5545 212.753 57.8003 212.339 58.5178ZM212.339 58.5178L159.944 28.2678",
    "M107.651 58.5138C107.237 57.7964 106.319 57.5506 105.602 57.9648C104.885 58.379 104.639 59.2964 105.053 60.0138C105.467 60.7313 106.385 60.9771 107.102 60.5629C107.819 60.1487 108.065 59.2313 107.651 58.5138ZM107.651 58.5138L160.046 28.2638",
    "M159.99 4.63243e-06V28.38",
];

// Strokes drawn after the image.
const LOWER_PATHS: [&str; 3] = [
    "M107.651 181.482C108.065 180.765 107.819 179.847 107.102 179.433C106.385 179.019 105.467 179.265 105.053 179.982C104.639 180.7 104.885 181.617 105.602 182.031C106.319 182.445 107.237 182.2 107.651 181.482ZM107.651 181.482L160.046 211.732",
    "M212.339 181.486C212.753 182.203 213.671 182.449 214.388 182.035C215.105 181.621 215.351 180.703 214.937 179.986C214.523 179.269 213.605 179.023 212.888 179.437C212.171 179.851 211.925 180.769 212.339 181.486ZM212.339 181.486L159.944 211.736",
    "M160 240V211.62",
];

pub struct PrimarySection {
    context: Rc<SectionContext>,
    content: SectionContent,
    image: ImagePair,
}

impl PrimarySection {
    pub(crate) fn new(context: Rc<SectionContext>, content: SectionContent, image: ImagePair) -> Self {
        Self {
            context,
            content,
            image,
        }
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    /// The raster reference embedded in the artwork.
    pub fn image_href(&self) -> &str {
        self.image.pick(self.context.hi_res())
    }

    pub fn render(&self) -> Node {
        let bem = &self.context.bem;
        let artwork = Element::new("div")
            .class(bem.element("artwork"))
            .child(self.svg(bem));

        Element::new("section")
            .class(bem.block())
            .child(self.context.content_region(&self.content))
            .child(Element::new("div").class(bem.element("inner")).child(artwork))
            .into()
    }

    fn svg(&self, bem: &Bem) -> Element {
        let stroke = |d: &str| -> Node {
            Element::new("path")
                .class(bem.element("path"))
                .attr("d", d)
                .attr("vector-effect", "non-scaling-stroke")
                .into()
        };

        let image = Element::new("image")
            .class(bem.element("image"))
            .attr("height", "100%")
            .attr("href", self.image_href())
            .attr("width", "106%")
            .attr("x", "-3%")
            .attr("y", "-22.25%");

        Element::new("svg")
            .class(bem.element("svg"))
            .attr("xmlns", SVG_NS)
            .attr("xmlns:xlink", XLINK_NS)
            .attr("viewBox", VIEW_BOX)
            .children(UPPER_PATHS.iter().map(|d| stroke(d)))
            .child(image)
            .children(LOWER_PATHS.iter().map(|d| stroke(d)))
    }
}
