//! TextInput Component

use crate::markup::{Element, RenderContext, RenderOnce, el};

option_enum! {
    /// The `type` of a text-like input
    #[derive(Default)]
    pub enum InputKind {
        #[default]
        Text => "text",
        Email => "email",
        Password => "password",
        Search => "search",
        Url => "url",
    }
}

pub(crate) const FIELD_CLASSES: &str = "block w-full rounded-md border-0 px-3 py-1.5 text-sm text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 focus:ring-inset focus:ring-indigo-600";

/// A single-line text input
#[derive(Debug, Clone)]
pub struct TextInput {
    id: String,
    name: String,
    kind: InputKind,
    value: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    required: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: InputKind::Text,
            value: None,
            placeholder: None,
            disabled: false,
            required: false,
        }
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, _cx: &RenderContext) -> Element {
        el("input")
            .class(FIELD_CLASSES)
            .id(self.id)
            .attr("type", self.kind.to_string())
            .attr("name", self.name)
            .when_some(self.value, |input, value| input.attr("value", value))
            .when_some(self.placeholder, |input, placeholder| {
                input.attr("placeholder", placeholder)
            })
            .when(self.required, |input| input.bool_attr("required"))
            .when(self.disabled, |input| {
                input
                    .bool_attr("disabled")
                    .class("disabled:cursor-not-allowed disabled:bg-gray-50")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_input_with_kind() {
        let cx = RenderContext::default();
        let html = TextInput::new("email", "user[email]")
            .kind(InputKind::Email)
            .placeholder("you@example.com")
            .required(true)
            .render_html(&cx);
        assert!(html.starts_with("<input "));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"name="user[email]""#));
        assert!(html.contains(r#"placeholder="you@example.com""#));
        assert!(html.contains(" required"));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_optional_attributes_absent_by_default() {
        let cx = RenderContext::default();
        let input = TextInput::new("q", "q").render(&cx);
        assert_eq!(input.get_attr("type"), Some("text"));
        assert!(!input.has_attr("value"));
        assert!(!input.has_attr("placeholder"));
        assert!(!input.has_attr("disabled"));
    }

    #[test]
    fn test_every_kind_sets_type_attribute() {
        use crate::option::OptionValue;
        let cx = RenderContext::default();
        for kind in InputKind::ALL {
            let input = TextInput::new("field", "field").kind(*kind).render(&cx);
            assert_eq!(input.get_attr("type"), Some(kind.as_str()));
        }
    }
}
