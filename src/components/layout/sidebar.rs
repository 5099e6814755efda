//! Sidebar Component
//!
//! Vertical navigation with an optional title.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::markup::{Element, RenderContext, RenderOnce, a, el, span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: String,
    pub href: String,
    pub icon: Option<IconName>,
    pub active: bool,
}

impl SidebarItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: None,
            active: false,
        }
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Sidebar component
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    title: Option<String>,
    items: Vec<SidebarItem>,
}

impl Sidebar {
    pub fn new(items: impl IntoIterator<Item = SidebarItem>) -> Self {
        Self {
            title: None,
            items: items.into_iter().collect(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn render_nav_item(cx: &RenderContext, item: SidebarItem) -> Element {
        let link = a()
            .class("group flex items-center gap-x-3 rounded-md p-2 text-sm font-semibold leading-6")
            .attr("href", item.href)
            .when(item.active, |link| {
                link.class("bg-gray-100 text-indigo-600").aria("current", "page")
            })
            .when(!item.active, |link| {
                link.class("text-gray-700 hover:bg-gray-50 hover:text-indigo-600")
            })
            .when_some(item.icon, |link, icon| {
                link.child(Icon::new(icon).size(IconSize::Md).render(cx))
            })
            .child(span().text(item.label));

        el("li").child(link)
    }
}

impl RenderOnce for Sidebar {
    fn render(self, cx: &RenderContext) -> Element {
        let links = self
            .items
            .into_iter()
            .map(|item| Self::render_nav_item(cx, item));

        el("aside")
            .class("sidebar w-64 shrink-0 border-r border-gray-200 bg-white px-4 py-6")
            .when_some(self.title, |aside, title| {
                aside.child(
                    el("h2")
                        .class("px-2 text-xs font-semibold uppercase tracking-wide text-gray-400")
                        .text(title),
                )
            })
            .child(el("nav").child(el("ul").class("mt-2 space-y-1").children(links)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_is_current_page() {
        let cx = RenderContext::default();
        let sidebar = Sidebar::new([
            SidebarItem::new("Overview", "/").icon(IconName::Home).active(true),
            SidebarItem::new("Settings", "/settings").icon(IconName::Settings),
        ])
        .title("Workspace")
        .render(&cx);

        let links = sidebar.find_all(&|e| e.tag() == "a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].get_attr("aria-current"), Some("page"));
        assert!(!links[1].has_attr("aria-current"));
        assert!(sidebar.find(&|e| e.has_class("icon-settings")).is_some());
        assert_eq!(
            sidebar.find(&|e| e.tag() == "h2").map(Element::text_content),
            Some("Workspace".to_string())
        );
    }

    #[test]
    fn test_without_title() {
        let cx = RenderContext::default();
        let sidebar = Sidebar::new([SidebarItem::new("Home", "/")]).render(&cx);
        assert!(sidebar.find(&|e| e.tag() == "h2").is_none());
    }
}
