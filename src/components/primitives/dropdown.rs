//! Dropdown Component
//!
//! A trigger button with a menu of links and actions. The menu opens and
//! closes through the `toggle` client behavior.

use crate::components::primitives::icon::{Icon, IconName, IconSize};
use crate::controllers::{Controller, ControllerBinding};
use crate::markup::{Element, RenderContext, RenderOnce, a, div, el, span};

option_enum! {
    /// Which edge of the trigger the menu aligns to
    #[derive(Default)]
    pub enum DropdownAlign {
        #[default]
        Start => "start",
        End => "end",
    }
}

/// An entry in the dropdown menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownItem {
    Link { label: String, href: String },
    Action { label: String, name: String },
    Divider,
}

impl DropdownItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        DropdownItem::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// A button item; `name` is submitted as `data-dropdown-action`
    pub fn action(label: impl Into<String>, name: impl Into<String>) -> Self {
        DropdownItem::Action {
            label: label.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dropdown {
    id: String,
    label: String,
    items: Vec<DropdownItem>,
    align: DropdownAlign,
    open: bool,
}

impl Dropdown {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items: Vec::new(),
            align: DropdownAlign::Start,
            open: false,
        }
    }

    pub fn item(mut self, item: DropdownItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = DropdownItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn align(mut self, align: DropdownAlign) -> Self {
        self.align = align;
        self
    }

    /// Render with the menu initially open
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

const ITEM_CLASSES: &str = "block w-full px-4 py-2 text-left text-sm text-gray-700 hover:bg-gray-100";

impl RenderOnce for Dropdown {
    fn render(self, cx: &RenderContext) -> Element {
        let menu_id = format!("{}-menu", self.id);

        let trigger = Controller::Toggle.target(
            el("button")
                .class("inline-flex items-center gap-x-1.5 rounded-md bg-white px-3 py-2 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300")
                .id(format!("{}-trigger", self.id))
                .attr("type", "button")
                .aria("haspopup", "menu")
                .aria("expanded", self.open.to_string())
                .aria("controls", menu_id.clone())
                .child(span().text(self.label))
                .child(
                    Icon::new(IconName::ChevronDown)
                        .size(IconSize::Sm)
                        .render(cx),
                ),
            "trigger",
        );
        let trigger = Controller::Toggle.action(trigger, "click", "toggle");

        let items = self.items.into_iter().map(|item| match item {
            DropdownItem::Link { label, href } => a()
                .class(ITEM_CLASSES)
                .attr("href", href)
                .attr("role", "menuitem")
                .text(label),
            DropdownItem::Action { label, name } => el("button")
                .class(ITEM_CLASSES)
                .attr("type", "button")
                .attr("role", "menuitem")
                .data("dropdown-action", name)
                .text(label),
            DropdownItem::Divider => div()
                .class("my-1 h-px bg-gray-100")
                .attr("role", "separator"),
        });

        let menu = Controller::Toggle.target(
            div()
                .class("absolute z-10 mt-2 w-56 rounded-md bg-white py-1 shadow-lg ring-1 ring-black/5")
                .class(match self.align {
                    DropdownAlign::Start => "left-0 origin-top-left",
                    DropdownAlign::End => "right-0 origin-top-right",
                })
                .id(menu_id)
                .attr("role", "menu")
                .when(!self.open, |menu| menu.bool_attr("hidden"))
                .children(items),
            "menu",
        );

        ControllerBinding::new(Controller::Toggle)
            .value("open", self.open)
            .action("keydown.esc", "close")
            .apply(div().class("dropdown relative inline-block text-left").id(self.id))
            .child(trigger)
            .child(menu)
    }
}
