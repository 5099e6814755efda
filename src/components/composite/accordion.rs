//! Accordion Component
//!
//! A stack of collapsibles. Unless `multiple` is set, at most one item starts
//! open: the first one flagged open.

use crate::components::composite::Collapsible;
use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div};

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionItem {
    pub title: String,
    pub content: Node,
    pub open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, content: impl IntoNode) -> Self {
        Self {
            title: title.into(),
            content: content.into_node(),
            open: false,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Accordion {
    id: String,
    items: Vec<AccordionItem>,
    multiple: bool,
}

impl Accordion {
    pub fn new(id: impl Into<String>, items: impl IntoIterator<Item = AccordionItem>) -> Self {
        Self {
            id: id.into(),
            items: items.into_iter().collect(),
            multiple: false,
        }
    }

    /// Allow several items to be open at once
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Effective open flag per item
    fn open_flags(&self) -> Vec<bool> {
        if self.multiple {
            return self.items.iter().map(|item| item.open).collect();
        }
        let first_open = self.items.iter().position(|item| item.open);
        (0..self.items.len())
            .map(|index| Some(index) == first_open)
            .collect()
    }
}

impl RenderOnce for Accordion {
    fn render(self, cx: &RenderContext) -> Element {
        let flags = self.open_flags();
        let id = self.id;

        div()
            .class("accordion divide-y divide-gray-200")
            .id(&id)
            .when(self.multiple, |root| root.data("accordion-multiple", "true"))
            .children(
                self.items
                    .into_iter()
                    .zip(flags)
                    .enumerate()
                    .map(|(index, (item, open))| {
                        Collapsible::new(format!("{id}-{index}"), item.title, item.content)
                            .open(open)
                            .render(cx)
                    }),
            )
    }
}
