//! Card Component
//!
//! A bordered panel with optional header, body and footer slots. A slot that
//! was never filled renders no wrapper at all.

use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div};

#[derive(Debug, Clone)]
pub struct Card {
    header: Vec<Node>,
    body: Vec<Node>,
    footer: Vec<Node>,
    padded: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            header: Vec::new(),
            body: Vec::new(),
            footer: Vec::new(),
            padded: true,
        }
    }

    pub fn header(mut self, child: impl IntoNode) -> Self {
        self.header.push(child.into_node());
        self
    }

    /// Add a child to the body slot
    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.body.push(child.into_node());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        self.body.extend(children.into_iter().map(IntoNode::into_node));
        self
    }

    pub fn footer(mut self, child: impl IntoNode) -> Self {
        self.footer.push(child.into_node());
        self
    }

    /// Whether slots get inner padding (default true)
    pub fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _cx: &RenderContext) -> Element {
        let padded = self.padded;
        let slot = |name: &str, nodes: Vec<Node>| {
            div()
                .class(format!("card-{name}"))
                .when(padded, |slot| slot.class("px-4 py-5 sm:px-6"))
                .children(nodes)
        };

        div()
            .class("card divide-y divide-gray-200 overflow-hidden rounded-lg bg-white shadow")
            .when(!self.header.is_empty(), |card| card.child(slot("header", self.header)))
            .when(!self.body.is_empty(), |card| card.child(slot("body", self.body)))
            .when(!self.footer.is_empty(), |card| {
                card.child(slot("footer", self.footer).class("bg-gray-50"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slots_have_no_wrapper() {
        let cx = RenderContext::default();
        let card = Card::new().child("Only body").render(&cx);
        assert!(card.find(&|e| e.has_class("card-body")).is_some());
        assert!(card.find(&|e| e.has_class("card-header")).is_none());
        assert!(card.find(&|e| e.has_class("card-footer")).is_none());
        assert_eq!(card.child_nodes().len(), 1);
    }

    #[test]
    fn test_all_slots_in_order() {
        let cx = RenderContext::default();
        let card = Card::new()
            .header("Title")
            .child("Body")
            .footer("Footer")
            .render(&cx);
        assert_eq!(card.text_content(), "TitleBodyFooter");
        assert_eq!(card.child_nodes().len(), 3);
    }

    #[test]
    fn test_padding_toggle() {
        let cx = RenderContext::default();
        let padded = Card::new().child("x").render(&cx);
        let flush = Card::new().padded(false).child("x").render(&cx);
        let body = |card: &Element| {
            card.find(&|e| e.has_class("card-body"))
                .map(|e| e.has_class("px-4"))
                .unwrap_or_default()
        };
        assert!(body(&padded));
        assert!(!body(&flush));
    }

    #[test]
    fn test_empty_card() {
        let cx = RenderContext::default();
        let card = Card::new().render(&cx);
        assert!(card.child_nodes().is_empty());
    }
}
