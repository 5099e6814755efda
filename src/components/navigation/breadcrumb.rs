//! Breadcrumb Component

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::markup::{Element, RenderContext, RenderOnce, a, el, span};

option_enum! {
    /// Glyph drawn between crumbs
    #[derive(Default)]
    pub enum BreadcrumbSeparator {
        Slash => "slash",
        #[default]
        Chevron => "chevron",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
    separator: BreadcrumbSeparator,
}

impl Breadcrumb {
    pub fn new(items: impl IntoIterator<Item = BreadcrumbItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            separator: BreadcrumbSeparator::Chevron,
        }
    }

    pub fn separator(mut self, separator: BreadcrumbSeparator) -> Self {
        self.separator = separator;
        self
    }

    fn separator_node(&self, cx: &RenderContext) -> Element {
        match self.separator {
            BreadcrumbSeparator::Chevron => Icon::new(IconName::ChevronRight)
                .size(IconSize::Sm)
                .class("text-gray-400")
                .render(cx),
            BreadcrumbSeparator::Slash => span()
                .class("text-gray-300")
                .aria("hidden", "true")
                .text("/"),
        }
    }
}

impl RenderOnce for Breadcrumb {
    fn render(self, cx: &RenderContext) -> Element {
        let last = self.items.len().saturating_sub(1);
        let mut list = el("ol").class("flex items-center gap-2 text-sm");

        for (index, item) in self.items.iter().enumerate() {
            let is_last = index == last;

            // The current page is never a link.
            let crumb = match (&item.href, is_last) {
                (Some(href), false) => a()
                    .class("text-gray-500 hover:text-gray-700")
                    .attr("href", href)
                    .text(&item.label),
                _ => span()
                    .class(if is_last { "font-medium text-gray-900" } else { "text-gray-500" })
                    .when(is_last, |crumb| crumb.aria("current", "page"))
                    .text(&item.label),
            };

            list = list.child(
                el("li")
                    .class("flex items-center gap-2")
                    .when(index > 0, |li| li.child(self.separator_node(cx)))
                    .child(crumb),
            );
        }

        el("nav")
            .class("breadcrumb")
            .class(format!("breadcrumb-{}", self.separator))
            .aria("label", cx.t("breadcrumb.label"))
            .child(list)
    }
}
