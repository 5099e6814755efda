//! Feedback Component
//!
//! A trigger with a tooltip message, positioned by the `feedback` client
//! behavior around the trigger's bounding box.

use crate::controllers::{Controller, ControllerBinding, Placement};
use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div, span};
use crate::theme::Tone;

impl Placement {
    /// Classes that position the tooltip before the client runtime measures
    fn tooltip_classes(&self) -> &'static str {
        match self {
            Placement::Top => "bottom-full left-1/2 mb-2 -translate-x-1/2",
            Placement::Bottom => "top-full left-1/2 mt-2 -translate-x-1/2",
            Placement::Left => "right-full top-1/2 mr-2 -translate-y-1/2",
            Placement::Right => "left-full top-1/2 ml-2 -translate-y-1/2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Feedback {
    id: String,
    trigger: Node,
    message: String,
    placement: Placement,
    tone: Tone,
}

impl Feedback {
    pub fn new(id: impl Into<String>, trigger: impl IntoNode, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            trigger: trigger.into_node(),
            message: message.into(),
            placement: Placement::Top,
            tone: Tone::Neutral,
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl RenderOnce for Feedback {
    fn render(self, _cx: &RenderContext) -> Element {
        let tooltip_id = format!("{}-tooltip", self.id);

        let anchor = span()
            .class("inline-flex")
            .aria("describedby", &tooltip_id)
            .child(self.trigger);
        let anchor = Controller::Feedback.target(anchor, "anchor");

        let tooltip = div()
            .class("feedback-tooltip absolute z-50 w-max max-w-xs rounded-md px-2.5 py-1.5 text-xs shadow-md ring-1")
            .class(format!("feedback-{}", self.placement))
            .class(self.placement.tooltip_classes())
            .class(self.tone.soft_classes())
            .class(self.tone.ring_class())
            .id(tooltip_id)
            .attr("role", "tooltip")
            .bool_attr("hidden")
            .text(self.message);
        let tooltip = Controller::Feedback.target(tooltip, "tooltip");

        let root = span()
            .class("feedback relative inline-flex")
            .id(self.id)
            .child(anchor)
            .child(tooltip);

        ControllerBinding::new(Controller::Feedback)
            .value("placement", self.placement)
            .value("tone", self.tone)
            .action("mouseenter", "show")
            .action("mouseleave", "hide")
            .action("focusin", "show")
            .action("focusout", "hide")
            .apply(root)
    }
}
