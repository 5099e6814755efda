//! Button Component

use crate::components::primitives::icon::{Icon, IconName, IconSize};
use crate::markup::{Element, RenderContext, RenderOnce, a, el, span};
use crate::option::OptionValue;

option_enum! {
    /// Button variant
    #[derive(Default)]
    pub enum ButtonVariant {
        /// Primary action button
        #[default]
        Primary => "primary",
        /// Secondary button (outlined)
        Secondary => "secondary",
        /// Destructive action
        Danger => "danger",
        /// Ghost button (transparent)
        Ghost => "ghost",
        /// Looks like an inline link
        Link => "link",
    }
}

option_enum! {
    /// Button size
    #[derive(Default)]
    pub enum ButtonSize {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

option_enum! {
    /// The `type` of a `<button>` element
    #[derive(Default)]
    pub enum ButtonKind {
        #[default]
        Button => "button",
        Submit => "submit",
        Reset => "reset",
    }
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 text-white shadow-sm",
            ButtonVariant::Secondary => {
                "bg-white text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300"
            }
            ButtonVariant::Danger => "bg-red-600 text-white shadow-sm",
            ButtonVariant::Ghost => "bg-transparent text-gray-700",
            ButtonVariant::Link => "bg-transparent text-indigo-600 underline-offset-4",
        }
    }

    fn hover_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "hover:bg-indigo-500",
            ButtonVariant::Secondary => "hover:bg-gray-50",
            ButtonVariant::Danger => "hover:bg-red-500",
            ButtonVariant::Ghost => "hover:bg-gray-100",
            ButtonVariant::Link => "hover:underline",
        }
    }
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-2.5 py-1.5 text-xs",
            ButtonSize::Md => "px-3.5 py-2 text-sm",
            ButtonSize::Lg => "px-5 py-3 text-base",
        }
    }

    fn icon_size(&self) -> IconSize {
        match self {
            ButtonSize::Sm => IconSize::Sm,
            ButtonSize::Md | ButtonSize::Lg => IconSize::Md,
        }
    }
}

/// A styled button, or a link styled as one when given an `href`
#[derive(Debug, Clone)]
pub struct Button {
    id: Option<String>,
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    kind: ButtonKind,
    href: Option<String>,
    icon: Option<IconName>,
    disabled: bool,
    loading: bool,
}

impl Button {
    /// Create a new button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Md,
            kind: ButtonKind::Button,
            href: None,
            icon: None,
            disabled: false,
            loading: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the `type` attribute (ignored for links)
    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Render as a link to `href`
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Leading icon
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Create a primary button
    pub fn primary(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, cx: &RenderContext) -> Element {
        let inactive = self.disabled || self.loading;

        // A disabled link has nowhere to go; fall back to a disabled button.
        let root = match self.href {
            Some(href) if !inactive => a().attr("href", href),
            _ => el("button").attr("type", self.kind.as_str()),
        };

        let label = if self.loading {
            cx.t("button.loading")
        } else {
            self.label
        };

        let leading_icon = if self.loading {
            Some(
                Icon::new(IconName::Loader)
                    .size(self.size.icon_size())
                    .class("animate-spin"),
            )
        } else {
            self.icon
                .map(|icon| Icon::new(icon).size(self.size.icon_size()))
        };

        root.class("btn inline-flex items-center justify-center gap-2 rounded-md font-semibold")
            .class("focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2")
            .class(format!("btn-{}", self.variant))
            .class(self.variant.classes())
            .class(self.size.classes())
            .when_some(self.id, |el, id| el.id(id))
            .when(inactive, |el| {
                el.class("opacity-50 cursor-not-allowed")
                    .bool_attr("disabled")
                    .aria("disabled", "true")
            })
            .when(!inactive, |el| el.class(self.variant.hover_classes()))
            .when(self.loading, |el| el.aria("busy", "true"))
            .when_some(leading_icon, |el, icon| el.child(icon.render(cx)))
            .child(span().text(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_default_renders_button_element() {
        let cx = RenderContext::default();
        let button = Button::new("Save").render(&cx);
        assert_eq!(button.tag(), "button");
        assert_eq!(button.get_attr("type"), Some("button"));
        assert!(button.has_class("btn-primary"));
        assert_eq!(button.text_content(), "Save");
    }

    #[test]
    fn test_href_renders_link() {
        let cx = RenderContext::default();
        let link = Button::secondary("Docs").href("/docs").render(&cx);
        assert_eq!(link.tag(), "a");
        assert_eq!(link.get_attr("href"), Some("/docs"));
        assert!(!link.has_attr("type"));
    }

    #[test]
    fn test_disabled_link_falls_back_to_button() {
        let cx = RenderContext::default();
        let button = Button::new("Docs").href("/docs").disabled(true).render(&cx);
        assert_eq!(button.tag(), "button");
        assert!(!button.has_attr("href"));
        assert!(button.has_attr("disabled"));
    }

    #[test]
    fn test_disabled_and_enabled_attributes_are_exclusive() {
        let cx = RenderContext::default();
        let enabled = Button::new("Go").render(&cx);
        let disabled = Button::new("Go").disabled(true).render(&cx);

        assert!(!enabled.has_attr("disabled"));
        assert!(!enabled.has_attr("aria-disabled"));
        assert!(enabled.has_class("hover:bg-indigo-500"));

        assert!(disabled.has_attr("disabled"));
        assert_eq!(disabled.get_attr("aria-disabled"), Some("true"));
        assert!(!disabled.has_class("hover:bg-indigo-500"));
    }

    #[test]
    fn test_loading_swaps_label_and_adds_spinner() {
        let cx = RenderContext::new(Locale::ZhCN);
        let button = Button::new("Save").loading(true).render(&cx);
        assert_eq!(button.text_content(), "加载中...");
        assert_eq!(button.get_attr("aria-busy"), Some("true"));
        assert!(button.find(&|e| e.has_class("icon-loader")).is_some());
    }

    #[test]
    fn test_every_variant_and_size_has_class() {
        let cx = RenderContext::default();
        for variant in ButtonVariant::ALL {
            let html = Button::new("x").variant(*variant).render_html(&cx);
            assert!(html.contains(&format!("btn-{variant}")));
        }
        let small = Button::new("x").size(ButtonSize::Sm).render(&cx);
        let large = Button::new("x").size(ButtonSize::Lg).render(&cx);
        assert!(small.has_class("text-xs"));
        assert!(large.has_class("text-base"));
    }

    #[test]
    fn test_submit_kind_and_icon() {
        let cx = RenderContext::default();
        let button = Button::new("Send")
            .kind(ButtonKind::Submit)
            .icon(IconName::ArrowRight)
            .render(&cx);
        assert_eq!(button.get_attr("type"), Some("submit"));
        assert!(button.find(&|e| e.has_class("icon-arrow-right")).is_some());
    }

    #[test]
    fn test_every_kind_sets_type_attribute() {
        let cx = RenderContext::default();
        for kind in ButtonKind::ALL {
            let button = Button::new("Go").kind(*kind).render(&cx);
            assert_eq!(button.tag(), "button");
            assert_eq!(button.get_attr("type"), Some(kind.as_str()));
        }
    }
}
