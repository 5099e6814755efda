//! Spinner Component

use crate::components::primitives::icon::{Icon, IconName, IconSize};
use crate::markup::{Element, RenderContext, RenderOnce, span};

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    size: IconSize,
    label: Option<String>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Screen-reader label (defaults to a localised "Loading")
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl RenderOnce for Spinner {
    fn render(self, cx: &RenderContext) -> Element {
        let label = self.label.unwrap_or_else(|| cx.t("spinner.label"));

        span()
            .class("spinner inline-flex items-center text-gray-500")
            .attr("role", "status")
            .child(
                Icon::new(IconName::Loader)
                    .size(self.size)
                    .class("animate-spin")
                    .render(cx),
            )
            .child(span().class("sr-only").text(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_status_role_and_localised_label() {
        let spinner = Spinner::new().render(&RenderContext::new(Locale::ZhCN));
        assert_eq!(spinner.get_attr("role"), Some("status"));
        assert_eq!(spinner.text_content(), "加载中");
    }

    #[test]
    fn test_custom_label_and_size() {
        let spinner = Spinner::new()
            .size(IconSize::Lg)
            .label("Saving")
            .render(&RenderContext::default());
        assert_eq!(spinner.text_content(), "Saving");
        assert!(spinner.find(&|e| e.has_class("size-6")).is_some());
    }
}
