//! Header Component
//!
//! Top bar with the brand, primary links and trailing actions.

use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, a, div, el};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl HeaderLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Header component
#[derive(Debug, Clone)]
pub struct Header {
    brand: String,
    brand_href: String,
    links: Vec<HeaderLink>,
    actions: Vec<Node>,
}

impl Header {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            brand_href: "/".to_string(),
            links: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn brand_href(mut self, href: impl Into<String>) -> Self {
        self.brand_href = href.into();
        self
    }

    pub fn link(mut self, link: HeaderLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = HeaderLink>) -> Self {
        self.links.extend(links);
        self
    }

    pub fn action(mut self, action: impl IntoNode) -> Self {
        self.actions.push(action.into_node());
        self
    }
}

impl RenderOnce for Header {
    fn render(self, _cx: &RenderContext) -> Element {
        let nav = (!self.links.is_empty()).then(|| {
            el("nav").class("flex gap-6").children(self.links.into_iter().map(|link| {
                a()
                    .class("text-sm font-semibold")
                    .attr("href", link.href)
                    .when(link.active, |anchor| {
                        anchor.class("text-indigo-600").aria("current", "page")
                    })
                    .when(!link.active, |anchor| {
                        anchor.class("text-gray-700 hover:text-gray-900")
                    })
                    .text(link.label)
            }))
        });

        el("header")
            .class("header border-b border-gray-200 bg-white")
            .child(
                div()
                    .class("mx-auto flex h-16 items-center justify-between gap-8 px-4 sm:px-6 lg:px-8")
                    .child(
                        a()
                            .class("header-brand text-lg font-bold text-gray-900")
                            .attr("href", self.brand_href)
                            .text(self.brand),
                    )
                    .when_some(nav, |bar, nav| bar.child(nav))
                    .when(!self.actions.is_empty(), |bar| {
                        bar.child(
                            div()
                                .class("header-actions ml-auto flex items-center gap-3")
                                .children(self.actions),
                        )
                    }),
            )
    }
}
