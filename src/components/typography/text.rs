//! Text Component

use crate::markup::{Element, RenderContext, RenderOnce, el};
use crate::theme::{FontWeight, TextSize, Tone};

option_enum! {
    /// Element used to wrap body text
    #[derive(Default)]
    pub enum TextTag {
        #[default]
        P => "p",
        Span => "span",
        Div => "div",
    }
}

#[derive(Debug, Clone)]
pub struct Text {
    text: String,
    size: TextSize,
    weight: FontWeight,
    tone: Tone,
    tag: TextTag,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: TextSize::Base,
            weight: FontWeight::Normal,
            tone: Tone::Neutral,
            tag: TextTag::P,
        }
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }
}

impl RenderOnce for Text {
    fn render(self, _cx: &RenderContext) -> Element {
        let tag = match self.tag {
            TextTag::P => "p",
            TextTag::Span => "span",
            TextTag::Div => "div",
        };

        el(tag)
            .class("text")
            .class(self.size.class())
            .class(self.weight.class())
            .class(self.tone.text_class())
            .text(self.text)
    }
}
