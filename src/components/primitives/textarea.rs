//! Textarea Component
//!
//! Multi-line input that can grow with its content through the `autogrow`
//! client behavior.

use crate::components::primitives::text_input::FIELD_CLASSES;
use crate::controllers::{Controller, ControllerBinding};
use crate::markup::{Element, RenderContext, RenderOnce, el};

const DEFAULT_ROWS: u32 = 3;

#[derive(Debug, Clone)]
pub struct Textarea {
    id: String,
    name: String,
    value: Option<String>,
    placeholder: Option<String>,
    rows: u32,
    max_rows: Option<u32>,
    autogrow: bool,
    disabled: bool,
}

impl Textarea {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: None,
            placeholder: None,
            rows: DEFAULT_ROWS,
            max_rows: None,
            autogrow: false,
            disabled: false,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Visible rows; also the minimum height when autogrowing. At least 1.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Upper bound for autogrow before the field scrolls
    pub fn max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn autogrow(mut self, autogrow: bool) -> Self {
        self.autogrow = autogrow;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Textarea {
    fn render(self, _cx: &RenderContext) -> Element {
        let textarea = el("textarea")
            .class(FIELD_CLASSES)
            .id(self.id)
            .attr("name", self.name)
            .attr("rows", self.rows.to_string())
            .when_some(self.placeholder, |textarea, placeholder| {
                textarea.attr("placeholder", placeholder)
            })
            .when(self.disabled, |textarea| textarea.bool_attr("disabled"))
            .when_some(self.value, |textarea, value| textarea.text(value));

        if !self.autogrow {
            return textarea;
        }

        let binding = ControllerBinding::new(Controller::Autogrow)
            .value("min_rows", self.rows)
            .action("input", "resize");
        let binding = match self.max_rows {
            Some(max_rows) => binding.value("max_rows", max_rows.max(self.rows)),
            None => binding,
        };

        binding.apply(textarea.class("resize-none overflow-hidden"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_textarea_has_no_controller() {
        let cx = RenderContext::default();
        let textarea = Textarea::new("bio", "bio").value("Hello").render(&cx);
        assert_eq!(textarea.get_attr("rows"), Some("3"));
        assert!(!textarea.has_attr("data-controller"));
        assert_eq!(textarea.text_content(), "Hello");
    }

    #[test]
    fn test_autogrow_binds_row_bounds() {
        let cx = RenderContext::default();
        let textarea = Textarea::new("msg", "message")
            .rows(2)
            .max_rows(8)
            .autogrow(true)
            .render(&cx);
        assert_eq!(textarea.get_attr("data-controller"), Some("autogrow"));
        assert_eq!(textarea.get_attr("data-autogrow-min-rows-value"), Some("2"));
        assert_eq!(textarea.get_attr("data-autogrow-max-rows-value"), Some("8"));
        assert_eq!(textarea.get_attr("data-action"), Some("input->autogrow#resize"));
    }

    #[test]
    fn test_autogrow_without_max_rows_is_unbounded() {
        let cx = RenderContext::default();
        let textarea = Textarea::new("msg", "message").autogrow(true).render(&cx);
        assert!(!textarea.has_attr("data-autogrow-max-rows-value"));
    }

    #[test]
    fn test_value_is_escaped() {
        let cx = RenderContext::default();
        let html = Textarea::new("x", "x").value("</textarea>").render_html(&cx);
        assert!(html.contains("&lt;/textarea&gt;</textarea>"));
    }
}
