//! Dock Component
//!
//! A row (or column) of icon links pinned to a screen edge. Items may carry
//! a single-key hotkey which the `dock` client behavior listens for.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::controllers::{Controller, ControllerBinding, DockHotkeys, normalize_hotkey};
use crate::error::Result;
use crate::markup::{Element, RenderContext, RenderOnce, a, el, span};
use crate::option::OptionValue;

option_enum! {
    /// Screen edge the dock is pinned to
    #[derive(Default)]
    pub enum DockPosition {
        #[default]
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

impl DockPosition {
    fn classes(&self) -> &'static str {
        match self {
            DockPosition::Bottom => "bottom-4 left-1/2 -translate-x-1/2 flex-row",
            DockPosition::Left => "left-4 top-1/2 -translate-y-1/2 flex-col",
            DockPosition::Right => "right-4 top-1/2 -translate-y-1/2 flex-col",
        }
    }

    fn tooltip_classes(&self) -> &'static str {
        match self {
            DockPosition::Bottom => "bottom-full mb-2 left-1/2 -translate-x-1/2",
            DockPosition::Left => "left-full ml-2 top-1/2 -translate-y-1/2",
            DockPosition::Right => "right-full mr-2 top-1/2 -translate-y-1/2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub label: String,
    pub icon: IconName,
    pub href: String,
    pub hotkey: Option<String>,
}

impl DockItem {
    pub fn new(label: impl Into<String>, icon: IconName, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon,
            href: href.into(),
            hotkey: None,
        }
    }

    pub fn hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Dock {
    id: String,
    items: Vec<DockItem>,
    position: DockPosition,
}

impl Dock {
    pub fn new(id: impl Into<String>, items: impl IntoIterator<Item = DockItem>) -> Self {
        Self {
            id: id.into(),
            items: items.into_iter().collect(),
            position: DockPosition::Bottom,
        }
    }

    pub fn position(mut self, position: DockPosition) -> Self {
        self.position = position;
        self
    }

    /// Resolve the hotkey map, rejecting malformed or duplicate keys
    pub fn hotkeys(&self) -> Result<DockHotkeys> {
        DockHotkeys::from_items(self.items.iter().map(|item| item.hotkey.as_deref()))
    }

    fn item(&self, cx: &RenderContext, item: &DockItem) -> Element {
        let hotkey = item.hotkey.as_deref().and_then(normalize_hotkey);

        let tooltip = span()
            .class("dock-tooltip pointer-events-none absolute whitespace-nowrap rounded bg-gray-900 px-2 py-1 text-xs text-white opacity-0 group-hover:opacity-100")
            .class(self.position.tooltip_classes())
            .attr("role", "tooltip")
            .text(&item.label)
            .when_some(hotkey, |tooltip, key| {
                tooltip.child(el("kbd").class("ml-1 text-gray-300").text(key.to_uppercase().to_string()))
            });

        let link = a()
            .class("group relative flex size-12 items-center justify-center rounded-xl bg-white/80 text-gray-700 transition-transform hover:scale-110")
            .attr("href", &item.href)
            .aria("label", &item.label)
            .child(Icon::new(item.icon).size(IconSize::Lg).render(cx))
            .child(tooltip);
        let link = Controller::Dock.target(link, "item");
        let link = match hotkey {
            Some(key) => Controller::Dock.param(link, "hotkey", key),
            None => link,
        };

        el("li").child(link)
    }
}

impl RenderOnce for Dock {
    fn render(self, cx: &RenderContext) -> Element {
        let items: Vec<Element> = self.items.iter().map(|item| self.item(cx, item)).collect();

        let list = el("ul")
            .class("flex gap-2 rounded-2xl border border-gray-200 bg-white/60 p-2 shadow-lg backdrop-blur")
            .class(if self.position == DockPosition::Bottom { "flex-row" } else { "flex-col" })
            .children(items);

        let root = el("nav")
            .class("dock fixed z-40 flex")
            .class(format!("dock-{}", self.position.as_str()))
            .class(self.position.classes())
            .id(self.id)
            .aria("label", cx.t("dock.label"))
            .child(list);

        ControllerBinding::new(Controller::Dock)
            .value("position", self.position)
            .action("keydown@window", "hotkey")
            .apply(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn dock() -> Dock {
        Dock::new(
            "main-dock",
            [
                DockItem::new("Home", IconName::Home, "/").hotkey("h"),
                DockItem::new("Search", IconName::Search, "/search").hotkey("S"),
                DockItem::new("Settings", IconName::Settings, "/settings"),
            ],
        )
    }

    #[test]
    fn test_binds_dock_controller() {
        let cx = RenderContext::default();
        let nav = dock().render(&cx);
        assert_eq!(nav.get_attr("data-controller"), Some("dock"));
        assert_eq!(nav.get_attr("data-dock-position-value"), Some("bottom"));
        assert_eq!(nav.get_attr("data-action"), Some("keydown@window->dock#hotkey"));
        assert_eq!(nav.get_attr("id"), Some("main-dock"));
    }

    #[test]
    fn test_items_carry_hotkey_params_and_tooltips() {
        let cx = RenderContext::default();
        let nav = dock().render(&cx);
        let links = nav.find_all(&|e| e.tag() == "a");
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].get_attr("data-dock-hotkey-param"), Some("h"));
        assert_eq!(links[1].get_attr("data-dock-hotkey-param"), Some("s"));
        assert!(!links[2].has_attr("data-dock-hotkey-param"));

        let tooltips = nav.find_all(&|e| e.get_attr("role") == Some("tooltip"));
        assert_eq!(tooltips.len(), 3);
        assert_eq!(tooltips[2].text_content(), "Settings");
    }

    #[test]
    fn test_padded_hotkey_is_emitted_trimmed() {
        let cx = RenderContext::default();
        let dock = Dock::new("d", [DockItem::new("Home", IconName::Home, "/").hotkey(" H ")]);
        assert_eq!(dock.hotkeys().expect("valid").resolve("h"), Some(0));

        let nav = dock.render(&cx);
        let link = nav.find(&|e| e.tag() == "a").expect("link");
        assert_eq!(link.get_attr("data-dock-hotkey-param"), Some("h"));
        let kbd = nav.find(&|e| e.tag() == "kbd").expect("kbd");
        assert_eq!(kbd.text_content(), "H");
    }

    #[test]
    fn test_every_position_has_class_and_value() {
        let cx = RenderContext::default();
        for position in DockPosition::ALL {
            let nav = dock().position(*position).render(&cx);
            assert!(nav.has_class(&format!("dock-{position}")));
            assert_eq!(nav.get_attr("data-dock-position-value"), Some(position.as_str()));
        }
    }

    #[test]
    fn test_position_changes_orientation() {
        let cx = RenderContext::default();
        let nav = dock().position(DockPosition::Left).render(&cx);
        assert!(nav.has_class("dock-left"));
        assert_eq!(nav.get_attr("data-dock-position-value"), Some("left"));
    }

    #[test]
    fn test_hotkeys_resolve_and_reject_duplicates() {
        let hotkeys = dock().hotkeys().expect("unique hotkeys");
        assert_eq!(hotkeys.resolve("S"), Some(1));

        let clash = Dock::new(
            "d",
            [
                DockItem::new("A", IconName::File, "/a").hotkey("a"),
                DockItem::new("B", IconName::File, "/b").hotkey("A"),
            ],
        );
        assert!(matches!(clash.hotkeys(), Err(Error::InvalidParam { .. })));
    }
}
