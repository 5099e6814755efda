//! Subheading Component

use crate::markup::{Element, RenderContext, RenderOnce, el};
use crate::theme::Tone;

/// Secondary line of copy under a heading
#[derive(Debug, Clone)]
pub struct Subheading {
    text: String,
    tone: Tone,
}

impl Subheading {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl RenderOnce for Subheading {
    fn render(self, _cx: &RenderContext) -> Element {
        el("p")
            .class("subheading mt-2 text-base leading-7")
            .class(self.tone.muted_text_class())
            .text(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_paragraph_with_tone() {
        let cx = RenderContext::default();
        let sub = Subheading::new("Latest numbers").render(&cx);
        assert_eq!(sub.tag(), "p");
        assert!(sub.has_class("text-gray-500"));

        let danger = Subheading::new("Overdue").tone(Tone::Danger).render(&cx);
        assert!(danger.has_class("text-red-500"));
    }
}
