//! Clipboard Component
//!
//! A read-only field with a copy button wired to the `clipboard` client
//! behavior, which swaps the button label for the success label after copying.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::controllers::{Controller, ControllerBinding};
use crate::markup::{Element, RenderContext, RenderOnce, div, el, span};

#[derive(Debug, Clone)]
pub struct Clipboard {
    id: String,
    text: String,
    label: Option<String>,
    success_label: Option<String>,
}

impl Clipboard {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            label: None,
            success_label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn success_label(mut self, label: impl Into<String>) -> Self {
        self.success_label = Some(label.into());
        self
    }
}

impl RenderOnce for Clipboard {
    fn render(self, cx: &RenderContext) -> Element {
        let label = self.label.unwrap_or_else(|| cx.t("clipboard.copy"));
        let success_label = self
            .success_label
            .unwrap_or_else(|| cx.t("clipboard.copied"));

        let source = el("input")
            .class("min-w-0 flex-1 rounded-l-md border-0 bg-gray-50 px-3 py-1.5 font-mono text-xs text-gray-700 ring-1 ring-inset ring-gray-300")
            .attr("type", "text")
            .attr("value", &self.text)
            .bool_attr("readonly");
        let source = Controller::Clipboard.target(source, "source");

        let button = el("button")
            .class("inline-flex items-center gap-1.5 rounded-r-md bg-white px-3 py-1.5 text-xs font-semibold text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50")
            .attr("type", "button")
            .child(Icon::new(IconName::Copy).size(IconSize::Sm).render(cx))
            .child(Controller::Clipboard.target(span().text(&label), "label"));
        let button = Controller::Clipboard.target(button, "button");
        let button = Controller::Clipboard.action(button, "click", "copy");

        let root = div()
            .class("clipboard flex w-full")
            .id(self.id)
            .child(source)
            .child(button);

        ControllerBinding::new(Controller::Clipboard)
            .value("text", self.text)
            .value("label", label)
            .value("success_label", success_label)
            .apply(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_binds_clipboard_values() {
        let cx = RenderContext::default();
        let clipboard = Clipboard::new("install", "cargo add trellis-ui").render(&cx);
        assert_eq!(clipboard.get_attr("data-controller"), Some("clipboard"));
        assert_eq!(
            clipboard.get_attr("data-clipboard-text-value"),
            Some("cargo add trellis-ui")
        );
        assert_eq!(clipboard.get_attr("data-clipboard-label-value"), Some("Copy"));
        assert_eq!(
            clipboard.get_attr("data-clipboard-success-label-value"),
            Some("Copied!")
        );

        let button = clipboard.find(&|e| e.tag() == "button").expect("button");
        assert_eq!(button.get_attr("data-action"), Some("click->clipboard#copy"));
        assert_eq!(button.text_content(), "Copy");
    }

    #[test]
    fn test_localised_and_custom_labels() {
        let zh = Clipboard::new("c", "x").render(&RenderContext::new(Locale::ZhCN));
        assert_eq!(zh.get_attr("data-clipboard-success-label-value"), Some("已复制！"));

        let custom = Clipboard::new("c", "x")
            .label("Copy key")
            .success_label("Done")
            .render(&RenderContext::default());
        assert_eq!(custom.get_attr("data-clipboard-label-value"), Some("Copy key"));
        assert_eq!(custom.get_attr("data-clipboard-success-label-value"), Some("Done"));
    }

    #[test]
    fn test_markup_text_is_escaped_in_attributes() {
        let cx = RenderContext::default();
        let html = Clipboard::new("c", "<b>hi</b>").render_html(&cx);
        assert!(html.contains(r#"value="&lt;b&gt;hi&lt;/b&gt;""#));
        assert!(!html.contains("<b>"));
    }
}
