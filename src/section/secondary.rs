//! Secondary layout: heading and content, no artwork.

use std::rc::Rc;

use crate::primitives::{Element, Node};

use super::{SectionContent, SectionContext};

pub struct SecondarySection {
    context: Rc<SectionContext>,
    content: SectionContent,
}

impl SecondarySection {
    pub(crate) fn new(context: Rc<SectionContext>, content: SectionContent) -> Self {
        Self { context, content }
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    pub fn render(&self) -> Node {
        let bem = &self.context.bem;
        Element::new("section")
            .class(bem.block_with_modifier("secondary"))
            .child(self.context.content_region(&self.content))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use crate::section::tests::renderer;
    use crate::section::SectionProps;
    use crate::types::{HeadingPunctuation, SectionType};
    use crate::primitives::Element;

    #[test]
    fn test_contact_markup() {
        let section = renderer(true)
            .mount(
                SectionProps::new("Contact")
                    .section_type(SectionType::Secondary)
                    .punctuation(HeadingPunctuation::Question)
                    .child(Element::new("p").text("Hi")),
            )
            .unwrap();

        assert_eq!(
            section.to_html(),
            concat!(
                r#"<section class="section section--secondary">"#,
                r#"<div class="section__inner">"#,
                r#"<h2 class="section__heading">Contact<span class="punc">?</span></h2>"#,
                r#"<div class="section__content"><p>Hi</p></div>"#,
                r#"</div></section>"#,
            )
        );
    }

    #[test]
    fn test_no_image_markup() {
        let node = renderer(true)
            .render(
                SectionProps::new("About")
                    .section_type(SectionType::Secondary)
                    .child("x"),
            )
            .unwrap();
        let root = node.as_element().unwrap();
        assert!(root.find_by_class("section__image").is_empty());
        assert!(root.find_by_tag("svg").is_empty());
    }
}
