//! Tertiary layout: heading and content over a responsive background image.
//!
//! # Breakpoint state
//!
//! ```text
//!            width > threshold
//!   Small ─────────────────────▶ Large
//!         ◀─────────────────────
//!            width <= threshold
//! ```
//!
//! The initial state comes from the viewport width at mount. Afterwards it
//! only moves on resize notifications, and only when the recomputed state
//! differs from the current one. The background URL is derived from the
//! breakpoint signal and the resolution flag.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{derived, signal, Derived, Signal};
use tracing::debug;

use crate::primitives::{Element, Node};
use crate::state::viewport::{self, ResizeSubscription};
use crate::types::{Breakpoint, BreakpointImages};

use super::{SectionContent, SectionContext};

pub struct TertiarySection {
    context: Rc<SectionContext>,
    content: SectionContent,
    breakpoint: Signal<Breakpoint>,
    transitions: Rc<Cell<usize>>,
    image_url: Derived<String>,
    subscription: ResizeSubscription,
}

impl TertiarySection {
    pub(crate) fn mount(
        context: Rc<SectionContext>,
        content: SectionContent,
        images: BreakpointImages,
    ) -> Self {
        let threshold = context.breakpoint;
        let breakpoint = signal(Breakpoint::for_width(viewport::viewport_width(), threshold));
        let transitions = Rc::new(Cell::new(0));

        let hi_res = context.hi_res();
        let breakpoint_for_url = breakpoint.clone();
        let image_url = derived(move || {
            images
                .resolve(breakpoint_for_url.get(), hi_res)
                .to_string()
        });

        let breakpoint_for_resize = breakpoint.clone();
        let transitions_for_resize = transitions.clone();
        let subscription = viewport::subscribe(move || {
            let width = viewport::viewport_width();
            let next = Breakpoint::for_width(width, threshold);
            if next != breakpoint_for_resize.get() {
                breakpoint_for_resize.set(next);
                transitions_for_resize.set(transitions_for_resize.get() + 1);
                debug!(width, breakpoint = ?next, "section breakpoint changed");
            }
        });

        Self {
            context,
            content,
            breakpoint,
            transitions,
            image_url,
            subscription,
        }
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint.get()
    }

    /// How many times the breakpoint has changed since mount.
    pub fn transitions(&self) -> usize {
        self.transitions.get()
    }

    /// The single background URL currently in effect.
    pub fn image_url(&self) -> String {
        self.image_url.get()
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn render(&self) -> Node {
        let bem = &self.context.bem;
        let background = Element::new("div")
            .class(bem.element("image"))
            .attr("style", format!("background-image: url({})", self.image_url()));

        Element::new("section")
            .class(bem.block_with_modifier("tertiary"))
            .child(self.context.content_region(&self.content).child(background))
            .into()
    }

    /// Stop following the viewport.
    pub fn unmount(self) {
        self.subscription.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::tests::{renderer, responsive};
    use crate::section::{MountedSection, SectionProps};
    use crate::types::SectionType;

    fn setup(width: u32) {
        viewport::reset_viewport_state();
        viewport::set_viewport_width(width);
    }

    fn mount(hi_res: bool) -> MountedSection {
        renderer(hi_res)
            .mount(
                SectionProps::new("Platform")
                    .section_type(SectionType::Tertiary)
                    .image(responsive())
                    .child("x"),
            )
            .unwrap()
    }

    #[test]
    fn test_initial_state_from_width() {
        setup(1024);
        let large = mount(false);
        assert_eq!(large.as_tertiary().unwrap().breakpoint(), Breakpoint::Large);

        setup(768);
        let small = mount(false);
        assert_eq!(small.as_tertiary().unwrap().breakpoint(), Breakpoint::Small);
    }

    #[test]
    fn test_transitions_are_deduplicated() {
        setup(1024);
        let section = mount(false);
        let tertiary = section.as_tertiary().unwrap();
        assert_eq!(tertiary.breakpoint(), Breakpoint::Large);

        viewport::dispatch_resize(500);
        assert_eq!(tertiary.breakpoint(), Breakpoint::Small);
        assert_eq!(tertiary.transitions(), 1);

        viewport::dispatch_resize(400);
        assert_eq!(tertiary.breakpoint(), Breakpoint::Small);
        assert_eq!(tertiary.transitions(), 1);

        viewport::dispatch_resize(769);
        assert_eq!(tertiary.breakpoint(), Breakpoint::Large);
        assert_eq!(tertiary.transitions(), 2);

        viewport::dispatch_resize(768);
        assert_eq!(tertiary.breakpoint(), Breakpoint::Small);
        assert_eq!(tertiary.transitions(), 3);
    }

    #[test]
    fn test_image_cross_product() {
        setup(500);
        let hi = mount(true);
        assert_eq!(hi.as_tertiary().unwrap().image_url(), "sml@2x.jpg");

        let lo = mount(false);
        assert_eq!(lo.as_tertiary().unwrap().image_url(), "sml.jpg");

        viewport::dispatch_resize(1280);
        assert_eq!(hi.as_tertiary().unwrap().image_url(), "lge@2x.jpg");
        assert_eq!(lo.as_tertiary().unwrap().image_url(), "lge.jpg");
    }

    #[test]
    fn test_markup() {
        setup(1024);
        let section = mount(false);
        assert_eq!(
            section.to_html(),
            concat!(
                r#"<section class="section section--tertiary">"#,
                r#"<div class="section__inner">"#,
                r#"<h2 class="section__heading">Platform<span class="punc">.</span></h2>"#,
                r#"<div class="section__content">x</div>"#,
                r#"<div class="section__image" style="background-image: url(lge.jpg)"></div>"#,
                r#"</div></section>"#,
            )
        );

        viewport::dispatch_resize(320);
        let node = section.render();
        let images = node.as_element().unwrap().find_by_class("section__image");
        assert_eq!(images.len(), 1);
        assert_eq!(
            images[0].attr_value("style"),
            Some("background-image: url(sml.jpg)")
        );
    }

    #[test]
    fn test_unmount_stops_listening() {
        setup(1024);
        let MountedSection::Tertiary(tertiary) = mount(false) else {
            panic!("expected a tertiary section");
        };
        let breakpoint = tertiary.breakpoint.clone();
        assert!(tertiary.is_listening());
        assert_eq!(viewport::subscriber_count(), 1);

        tertiary.unmount();
        assert_eq!(viewport::subscriber_count(), 0);

        assert_eq!(viewport::dispatch_resize(300), 0);
        assert_eq!(breakpoint.get(), Breakpoint::Large);
    }

    #[test]
    fn test_instances_are_independent() {
        setup(1024);
        let first = mount(false);
        let second = mount(false);
        assert_eq!(viewport::subscriber_count(), 2);

        first.unmount();
        viewport::dispatch_resize(300);

        let second = second.as_tertiary().unwrap();
        assert_eq!(second.breakpoint(), Breakpoint::Small);
        assert_eq!(second.transitions(), 1);
    }
}
