//! Icon Component
//!
//! Inline stroke icons drawn on a 24x24 grid.

use crate::markup::{Element, RenderContext, RenderOnce, el};

option_enum! {
    /// Icon keys available to components
    pub enum IconName {
        ArrowLeft => "arrow-left",
        ArrowRight => "arrow-right",
        Check => "check",
        ChevronDown => "chevron-down",
        ChevronLeft => "chevron-left",
        ChevronRight => "chevron-right",
        Copy => "copy",
        ExternalLink => "external-link",
        File => "file",
        Folder => "folder",
        Home => "home",
        Info => "info",
        Loader => "loader",
        Menu => "menu",
        Minus => "minus",
        Plus => "plus",
        Search => "search",
        Settings => "settings",
        User => "user",
        Warning => "warning",
        X => "x",
    }
}

impl IconName {
    /// SVG path data
    fn path(&self) -> &'static str {
        match self {
            IconName::ArrowLeft => "M19 12H5m6-6-6 6 6 6",
            IconName::ArrowRight => "M5 12h14m-6-6 6 6-6 6",
            IconName::Check => "M5 12l5 5L20 7",
            IconName::ChevronDown => "m6 9 6 6 6-6",
            IconName::ChevronLeft => "m15 6-6 6 6 6",
            IconName::ChevronRight => "m9 6 6 6-6 6",
            IconName::Copy => "M8 8h11v11H8zM5 16V5h11",
            IconName::ExternalLink => "M14 4h6v6M20 4l-9 9M18 14v6H4V6h6",
            IconName::File => "M7 3h7l5 5v13H7zM14 3v5h5",
            IconName::Folder => {
                "M3 7a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"
            }
            IconName::Home => "M3 11 12 4l9 7M5 10v10h14V10",
            IconName::Info => "M12 21a9 9 0 1 0 0-18 9 9 0 0 0 0 18zM12 11v5M12 8h.01",
            IconName::Loader => "M12 3a9 9 0 1 0 9 9",
            IconName::Menu => "M4 6h16M4 12h16M4 18h16",
            IconName::Minus => "M5 12h14",
            IconName::Plus => "M12 5v14M5 12h14",
            IconName::Search => "M11 18a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM21 21l-5-5",
            IconName::Settings => {
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM12 2v3M12 19v3M2 12h3M19 12h3"
            }
            IconName::User => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM4 21a8 8 0 0 1 16 0",
            IconName::Warning => "M12 3 2 21h20zM12 10v5M12 18h.01",
            IconName::X => "M6 6l12 12M18 6 6 18",
        }
    }
}

option_enum! {
    /// Icon size
    #[derive(Default)]
    pub enum IconSize {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

impl IconSize {
    fn class(&self) -> &'static str {
        match self {
            IconSize::Sm => "size-4",
            IconSize::Md => "size-5",
            IconSize::Lg => "size-6",
        }
    }
}

/// An inline SVG icon
#[derive(Debug, Clone)]
pub struct Icon {
    name: IconName,
    size: IconSize,
    label: Option<String>,
    class: Option<String>,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Md,
            label: None,
            class: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Accessible label; icons without one are treated as decorative
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Extra classes (e.g. animation) appended to the icon
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _cx: &RenderContext) -> Element {
        el("svg")
            .class("icon shrink-0")
            .class(format!("icon-{}", self.name))
            .class(self.size.class())
            .when_some(self.class, |svg, class| svg.class(class))
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .when(self.label.is_none(), |svg| svg.aria("hidden", "true"))
            .when_some(self.label, |svg, label| {
                svg.attr("role", "img").aria("label", label)
            })
            .child(el("path").attr("d", self.name.path()))
    }
}
