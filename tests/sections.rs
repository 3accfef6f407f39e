//! End-to-end section scenarios through the public API.

use spark_sections::state::viewport;
use spark_sections::{
    Breakpoint, Element, HeadingPunctuation, ImagePair, Node, RawSectionProps, SectionConfig,
    SectionError, SectionProps, SectionRenderer, SectionType,
};

// Every renderer in this binary seeds the process-wide flag at the default 1x density.
fn renderer() -> SectionRenderer {
    SectionRenderer::new(SectionConfig::default()).unwrap()
}

const TERTIARY_JSON: &str = r#"{
    "type": "tertiary",
    "heading": "Built for scale",
    "headingPunctuation": "!",
    "image": {
        "lge": { "default": "/img/scale-lge.jpg", "retina": "/img/scale-lge@2x.jpg" },
        "sml": { "default": "/img/scale-sml.jpg", "retina": "/img/scale-sml@2x.jpg" }
    },
    "children": ["Programmes for thousands of learners."]
}"#;

#[test]
fn contact_section_scenario() {
    viewport::reset_viewport_state();

    let node = renderer()
        .render(
            SectionProps::new("Contact")
                .section_type(SectionType::Secondary)
                .punctuation(HeadingPunctuation::Question)
                .child(Element::new("p").text("Hi")),
        )
        .unwrap();

    let root = node.as_element().unwrap();
    assert_eq!(root.tag, "section");
    assert_eq!(root.attr_value("class"), Some("section section--secondary"));

    let heading = root.find_by_tag("h2")[0].clone();
    assert_eq!(Node::from(heading).text_content(), "Contact?");
    assert_eq!(root.find_by_class("punc").len(), 1);
    assert_eq!(root.find_by_tag("p").len(), 1);
    assert!(root.find_by_class("section__image").is_empty());
}

#[test]
fn tertiary_follows_viewport_from_authored_props() {
    viewport::reset_viewport_state();
    viewport::set_viewport_width(1024);

    let raw: RawSectionProps = serde_json::from_str(TERTIARY_JSON).unwrap();
    let section = renderer().mount_raw(raw).unwrap();
    let tertiary = section.as_tertiary().unwrap();

    assert_eq!(tertiary.breakpoint(), Breakpoint::Large);
    assert_eq!(tertiary.image_url(), "/img/scale-lge.jpg");

    viewport::dispatch_resize(500);
    assert_eq!(tertiary.breakpoint(), Breakpoint::Small);
    assert_eq!(tertiary.image_url(), "/img/scale-sml.jpg");

    viewport::dispatch_resize(400);
    assert_eq!(tertiary.breakpoint(), Breakpoint::Small);
    assert_eq!(tertiary.transitions(), 1);

    assert!(section.to_html().contains("url(/img/scale-sml.jpg)"));

    section.unmount();
    assert_eq!(viewport::subscriber_count(), 0);
    assert_eq!(viewport::dispatch_resize(1600), 0);
}

#[test]
fn unknown_type_renders_primary_layout() {
    viewport::reset_viewport_state();

    let raw: RawSectionProps = serde_json::from_str(
        r#"{
            "type": "spotlight",
            "heading": "Our approach",
            "image": { "default": "/img/art.png", "retina": "/img/art@2x.png" },
            "children": ["Evidence-led."]
        }"#,
    )
    .unwrap();

    let section = renderer().mount_raw(raw).unwrap();
    assert_eq!(section.section_type(), SectionType::Primary);

    let node = section.render();
    let root = node.as_element().unwrap();
    assert_eq!(root.attr_value("class"), Some("section"));
    assert_eq!(root.find_by_tag("image")[0].attr_value("href"), Some("/img/art.png"));
}

#[test]
fn config_file_drives_namespace_and_strictness() {
    viewport::reset_viewport_state();

    let config = SectionConfig::from_toml_str(
        r#"
        namespace = "block"
        strict_section_type = true
        "#,
    )
    .unwrap();
    let renderer = SectionRenderer::new(config).unwrap();

    let html = renderer
        .render(
            SectionProps::new("Hello")
                .image(ImagePair::new("a.png", "a@2x.png"))
                .child("x"),
        )
        .unwrap()
        .to_html();
    assert!(html.starts_with(r#"<section class="block"><div class="block__inner">"#));

    let raw: RawSectionProps =
        serde_json::from_str(r#"{"type": "spotlight", "heading": "Hi", "children": ["x"]}"#)
            .unwrap();
    assert!(matches!(
        renderer.mount_raw(raw),
        Err(SectionError::UnknownSectionType { .. })
    ));
}

#[test]
fn primary_without_image_is_rejected() {
    viewport::reset_viewport_state();

    let err = renderer()
        .mount(SectionProps::new("Our approach").child("x"))
        .err()
        .unwrap();
    assert_eq!(
        err,
        SectionError::MissingImage {
            section_type: SectionType::Primary
        }
    );
}
