//! Badge Component

use crate::markup::{Element, RenderContext, RenderOnce, span};
use crate::theme::Tone;

/// A small status label
#[derive(Debug, Clone)]
pub struct Badge {
    label: String,
    tone: Tone,
    pill: bool,
    solid: bool,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: Tone::Neutral,
            pill: false,
            solid: false,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Fully rounded ends
    pub fn pill(mut self, pill: bool) -> Self {
        self.pill = pill;
        self
    }

    /// Filled background instead of the tinted one
    pub fn solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _cx: &RenderContext) -> Element {
        span()
            .class("badge inline-flex items-center px-2 py-1 text-xs font-medium ring-1 ring-inset")
            .class(format!("badge-{}", self.tone))
            .class(if self.solid {
                self.tone.solid_classes()
            } else {
                self.tone.soft_classes()
            })
            .class(self.tone.ring_class())
            .class(if self.pill { "rounded-full" } else { "rounded-md" })
            .text(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionValue;

    #[test]
    fn test_each_tone_has_marker_class() {
        let cx = RenderContext::default();
        for tone in Tone::ALL {
            let badge = Badge::new("New").tone(*tone).render(&cx);
            assert!(badge.has_class(&format!("badge-{tone}")));
            assert_eq!(badge.text_content(), "New");
        }
    }

    #[test]
    fn test_pill_rounding_is_exclusive() {
        let cx = RenderContext::default();
        let pill = Badge::new("3").pill(true).render(&cx);
        let square = Badge::new("3").render(&cx);
        assert!(pill.has_class("rounded-full") && !pill.has_class("rounded-md"));
        assert!(square.has_class("rounded-md") && !square.has_class("rounded-full"));
    }

    #[test]
    fn test_solid_swaps_tinted_background() {
        let cx = RenderContext::default();
        for tone in Tone::ALL {
            let solid = Badge::new("Live").tone(*tone).solid(true).render(&cx);
            let soft = Badge::new("Live").tone(*tone).render(&cx);
            for token in tone.solid_classes().split(' ') {
                assert!(solid.has_class(token), "{tone}: {token}");
            }
            let bg = tone.soft_classes().split(' ').next().unwrap_or_default();
            assert!(soft.has_class(bg) && !solid.has_class(bg));
        }
    }
}
