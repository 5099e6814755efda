//! TableWithHeader Component

use super::Table;
use crate::components::typography::{Heading, HeadingLevel};
use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div, el};

/// A table under a title bar with optional description and actions
#[derive(Debug, Clone)]
pub struct TableWithHeader {
    title: String,
    table: Table,
    description: Option<String>,
    actions: Vec<Node>,
}

impl TableWithHeader {
    pub fn new(title: impl Into<String>, table: Table) -> Self {
        Self {
            title: title.into(),
            table,
            description: None,
            actions: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an element (typically a button) to the actions area
    pub fn action(mut self, action: impl IntoNode) -> Self {
        self.actions.push(action.into_node());
        self
    }
}

impl RenderOnce for TableWithHeader {
    fn render(self, cx: &RenderContext) -> Element {
        let header = div()
            .class("sm:flex sm:items-center sm:justify-between")
            .child(
                div()
                    .class("sm:flex-auto")
                    .child(Heading::new(self.title).level(HeadingLevel::H3).render(cx))
                    .when_some(self.description, |block, description| {
                        block.child(el("p").class("mt-2 text-sm text-gray-700").text(description))
                    }),
            )
            .when(!self.actions.is_empty(), |header| {
                header.child(
                    div()
                        .class("table-actions mt-4 flex gap-2 sm:ml-16 sm:mt-0")
                        .children(self.actions),
                )
            });

        div()
            .class("table-with-header space-y-4")
            .child(header)
            .child(
                div()
                    .class("overflow-x-auto rounded-lg ring-1 ring-gray-200")
                    .child(self.table.render(cx)),
            )
    }
}
