//! Modal Component
//!
//! A dialog over a dimmed backdrop. Visibility is driven by the `toggle`
//! client behavior; a dismissible modal also closes on Escape.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::controllers::{Controller, ControllerBinding};
use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div, el, span};

/// Modal component
#[derive(Debug, Clone)]
pub struct Modal {
    id: String,
    title: String,
    body: Vec<Node>,
    footer: Vec<Node>,
    open: bool,
    dismissible: bool,
}

impl Modal {
    /// Create a new modal
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: Vec::new(),
            footer: Vec::new(),
            open: false,
            dismissible: true,
        }
    }

    /// Add a child to the body
    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.body.push(child.into_node());
        self
    }

    /// Add a child to the footer
    pub fn footer(mut self, child: impl IntoNode) -> Self {
        self.footer.push(child.into_node());
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Whether the close button and Escape key are offered
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, cx: &RenderContext) -> Element {
        let title_id = format!("{}-title", self.id);

        let close = self.dismissible.then(|| {
            let close = el("button")
                .class("rounded-md p-1 text-gray-400 hover:text-gray-600")
                .attr("type", "button")
                .aria("label", cx.t("modal.close"))
                .child(Icon::new(IconName::X).size(IconSize::Md).render(cx))
                .child(span().class("sr-only").text(cx.t("modal.close")));
            Controller::Toggle.action(close, "click", "close")
        });

        let header = div()
            .class("modal-header flex items-start justify-between border-b border-gray-200 px-6 py-4")
            .child(
                el("h2")
                    .class("text-base font-semibold text-gray-900")
                    .id(&title_id)
                    .text(self.title),
            )
            .when_some(close, |header, close| header.child(close));

        let panel = div()
            .class("modal-panel relative w-full max-w-lg overflow-hidden rounded-lg bg-white shadow-xl")
            .child(header)
            .when(!self.body.is_empty(), |panel| {
                panel.child(
                    div()
                        .class("modal-body px-6 py-4 text-sm text-gray-700")
                        .children(self.body),
                )
            })
            .when(!self.footer.is_empty(), |panel| {
                panel.child(
                    div()
                        .class("modal-footer flex justify-end gap-2 bg-gray-50 px-6 py-3")
                        .children(self.footer),
                )
            });
        let panel = Controller::Toggle.target(panel, "panel");

        let root = div()
            .class("modal fixed inset-0 z-50 flex items-center justify-center bg-gray-500/75 p-4")
            .id(self.id)
            .attr("role", "dialog")
            .aria("modal", "true")
            .aria("labelledby", title_id)
            .when(!self.open, |root| root.bool_attr("hidden"))
            .child(panel);

        let binding = ControllerBinding::new(Controller::Toggle).value("open", self.open);
        let binding = if self.dismissible {
            binding.action("keydown.esc@window", "close")
        } else {
            binding
        };
        binding.apply(root)
    }
}
