//! Collapsible Component
//!
//! A summary button that shows or hides a content region through the
//! `collapsible` client behavior.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::controllers::{CollapsibleState, Controller, ControllerBinding};
use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div, el, span};

#[derive(Debug, Clone)]
pub struct Collapsible {
    id: String,
    summary: String,
    content: Vec<Node>,
    open: bool,
}

impl Collapsible {
    pub fn new(id: impl Into<String>, summary: impl Into<String>, content: impl IntoNode) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            content: vec![content.into_node()],
            open: false,
        }
    }

    /// Append more content below the first node
    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.content.push(child.into_node());
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

impl RenderOnce for Collapsible {
    fn render(self, cx: &RenderContext) -> Element {
        let state = CollapsibleState::new(self.open);
        let content_id = format!("{}-content", self.id);

        let trigger = el("button")
            .class("flex w-full items-center justify-between py-3 text-left text-sm font-medium text-gray-900")
            .attr("type", "button")
            .aria("expanded", state.aria_expanded())
            .aria("controls", &content_id)
            .child(span().text(self.summary))
            .child(
                Icon::new(IconName::ChevronRight)
                    .size(IconSize::Sm)
                    .class(format!("transition-transform {}", state.chevron_class()))
                    .render(cx),
            );
        let trigger = Controller::Collapsible.target(trigger, "trigger");
        let trigger = Controller::Collapsible.action(trigger, "click", "toggle");

        let content = div()
            .class("pb-4 text-sm text-gray-600")
            .id(content_id)
            .when(state.content_hidden(), |content| content.bool_attr("hidden"))
            .children(self.content);
        let content = Controller::Collapsible.target(content, "content");

        let root = div()
            .class("collapsible border-b border-gray-200")
            .id(self.id)
            .child(trigger)
            .child(content);

        ControllerBinding::new(Controller::Collapsible)
            .value("open", state.is_open())
            .apply(root)
    }
}
