//! Heading Component

use crate::error::Error;
use crate::markup::{Element, RenderContext, RenderOnce, el};
use crate::theme::TextSize;

option_enum! {
    /// Heading level, `h1` through `h6`
    #[derive(Default)]
    pub enum HeadingLevel {
        H1 => "h1",
        #[default]
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
    }
}

impl HeadingLevel {
    fn tag(&self) -> &'static str {
        crate::option::OptionValue::as_str(self)
    }

    /// Size used when none is given explicitly
    pub fn default_size(&self) -> TextSize {
        match self {
            HeadingLevel::H1 => TextSize::Xl3,
            HeadingLevel::H2 => TextSize::Xl2,
            HeadingLevel::H3 => TextSize::Xl,
            HeadingLevel::H4 => TextSize::Lg,
            HeadingLevel::H5 => TextSize::Base,
            HeadingLevel::H6 => TextSize::Sm,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            other => Err(Error::InvalidParam {
                component: "heading",
                field: "level",
                message: format!("{other} is outside 1..=6"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Heading {
    text: String,
    level: HeadingLevel,
    size: Option<TextSize>,
    id: Option<String>,
}

impl Heading {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: HeadingLevel::H2,
            size: None,
            id: None,
        }
    }

    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = level;
        self
    }

    /// Override the visual size without changing the document outline
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl RenderOnce for Heading {
    fn render(self, _cx: &RenderContext) -> Element {
        let size = self.size.unwrap_or_else(|| self.level.default_size());

        el(self.level.tag())
            .class("heading font-bold text-gray-900")
            .class(size.class())
            .class(size.heading_classes())
            .when_some(self.id, |heading, id| heading.id(id))
            .text(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_sets_tag_and_default_size() {
        let cx = RenderContext::default();
        let heading = Heading::new("Team").render(&cx);
        assert_eq!(heading.tag(), "h2");
        assert!(heading.has_class("text-2xl"));

        let title = Heading::new("Welcome").level(HeadingLevel::H1).render(&cx);
        assert_eq!(title.tag(), "h1");
        assert!(title.has_class("text-3xl"));
    }

    #[test]
    fn test_size_override_keeps_level() {
        let cx = RenderContext::default();
        let heading = Heading::new("Small")
            .level(HeadingLevel::H1)
            .size(TextSize::Lg)
            .render(&cx);
        assert_eq!(heading.tag(), "h1");
        assert!(heading.has_class("text-lg"));
        assert!(!heading.has_class("text-3xl"));
    }

    #[test]
    fn test_numeric_levels() {
        assert_eq!(HeadingLevel::try_from(4).expect("valid"), HeadingLevel::H4);
        assert!(HeadingLevel::try_from(0).is_err());
        assert!(HeadingLevel::try_from(7).is_err());
    }

    #[test]
    fn test_text_is_escaped() {
        let cx = RenderContext::default();
        let html = Heading::new("A & B").render_html(&cx);
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_every_level_renders_its_tag() {
        use crate::option::OptionValue;
        let cx = RenderContext::default();
        for (number, level) in (1u8..).zip(HeadingLevel::ALL) {
            assert_eq!(HeadingLevel::try_from(number).expect("in range"), *level);
            let heading = Heading::new("Title").level(*level).render(&cx);
            assert_eq!(heading.tag(), level.as_str());
            for token in level.default_size().class().split_whitespace() {
                assert!(heading.has_class(token), "{level}: {token}");
            }
        }
    }

    #[test]
    fn test_every_size_overrides_the_default() {
        use crate::option::OptionValue;
        let cx = RenderContext::default();
        for size in TextSize::ALL {
            let heading = Heading::new("Title").size(*size).render(&cx);
            for token in size.class().split_whitespace() {
                assert!(heading.has_class(token), "{size}: {token}");
            }
            assert_eq!(heading.tag(), "h2");
        }
    }
}
