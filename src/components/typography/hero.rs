//! Hero Component
//!
//! Page-top banner: optional eyebrow, an `h1` title, a subtitle and a row of
//! call-to-action buttons.

use crate::components::primitives::Button;
use crate::components::typography::{Heading, HeadingLevel, Subheading};
use crate::markup::{Element, RenderContext, RenderOnce, div, el};
use crate::theme::TextSize;

option_enum! {
    #[derive(Default)]
    pub enum HeroAlign {
        Left => "left",
        #[default]
        Center => "center",
    }
}

#[derive(Debug, Clone)]
pub struct Hero {
    title: String,
    subtitle: Option<String>,
    eyebrow: Option<String>,
    align: HeroAlign,
    actions: Vec<Button>,
}

impl Hero {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            eyebrow: None,
            align: HeroAlign::Center,
            actions: Vec::new(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Short label shown above the title
    pub fn eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn align(mut self, align: HeroAlign) -> Self {
        self.align = align;
        self
    }

    pub fn action(mut self, button: Button) -> Self {
        self.actions.push(button);
        self
    }

    pub fn actions(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.actions.extend(buttons);
        self
    }
}

impl RenderOnce for Hero {
    fn render(self, cx: &RenderContext) -> Element {
        let centered = self.align == HeroAlign::Center;

        el("section")
            .class("hero py-16 sm:py-24")
            .class(if centered { "text-center mx-auto max-w-2xl" } else { "text-left max-w-3xl" })
            .when_some(self.eyebrow, |hero, eyebrow| {
                hero.child(
                    el("p")
                        .class("hero-eyebrow text-sm font-semibold uppercase tracking-wide text-indigo-600")
                        .text(eyebrow),
                )
            })
            .child(
                Heading::new(self.title)
                    .level(HeadingLevel::H1)
                    .size(TextSize::Xl4)
                    .render(cx),
            )
            .when_some(self.subtitle, |hero, subtitle| {
                hero.child(Subheading::new(subtitle).render(cx).class("mt-6 text-lg"))
            })
            .when(!self.actions.is_empty(), |hero| {
                hero.child(
                    div()
                        .class("hero-actions mt-10 flex flex-wrap items-center gap-x-6 gap-y-3")
                        .class(if centered { "justify-center" } else { "justify-start" })
                        .children(self.actions.into_iter().map(|button| button.render(cx))),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composes_heading_and_subheading() {
        let cx = RenderContext::default();
        let hero = Hero::new("Ship faster")
            .eyebrow("New")
            .subtitle("Components rendered on the server")
            .render(&cx);

        let title = hero.find(&|e| e.tag() == "h1").expect("h1");
        assert_eq!(title.text_content(), "Ship faster");
        assert!(hero.find(&|e| e.has_class("subheading")).is_some());
        assert!(hero.find(&|e| e.has_class("hero-eyebrow")).is_some());
        assert!(hero.has_class("text-center"));
    }

    #[test]
    fn test_actions_row_only_when_present() {
        let cx = RenderContext::default();
        let bare = Hero::new("Hi").align(HeroAlign::Left).render(&cx);
        assert!(bare.find(&|e| e.has_class("hero-actions")).is_none());
        assert!(bare.has_class("text-left"));

        let with_actions = Hero::new("Hi")
            .action(Button::primary("Start"))
            .action(Button::secondary("Docs").href("/docs"))
            .render(&cx);
        let row = with_actions
            .find(&|e| e.has_class("hero-actions"))
            .expect("actions");
        assert_eq!(row.child_nodes().len(), 2);
    }

    #[test]
    fn test_every_alignment_is_applied_to_banner_and_actions() {
        use crate::option::OptionValue;
        let cx = RenderContext::default();
        for align in HeroAlign::ALL {
            let hero = Hero::new("Hi")
                .align(*align)
                .action(Button::primary("Go"))
                .render(&cx);
            let row = hero.find(&|e| e.has_class("hero-actions")).expect("actions");
            let (banner, actions) = match align {
                HeroAlign::Left => ("text-left", "justify-start"),
                HeroAlign::Center => ("text-center", "justify-center"),
            };
            assert!(hero.has_class(banner), "{align}");
            assert!(row.has_class(actions), "{align}");
        }
    }
}
