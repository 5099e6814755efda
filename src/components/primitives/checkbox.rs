//! Checkbox Component

use crate::markup::{Element, RenderContext, RenderOnce, div, el};

/// A labelled checkbox input
#[derive(Debug, Clone)]
pub struct Checkbox {
    id: String,
    name: String,
    value: Option<String>,
    checked: bool,
    label: Option<String>,
    disabled: bool,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: None,
            checked: false,
            label: None,
            disabled: false,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the submitted value (browsers default to `on`)
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _cx: &RenderContext) -> Element {
        let input = el("input")
            .class("size-4 rounded border-gray-300 text-indigo-600 focus:ring-indigo-600")
            .id(self.id.clone())
            .attr("type", "checkbox")
            .attr("name", self.name)
            .when_some(self.value, |input, value| input.attr("value", value))
            .when(self.checked, |input| input.bool_attr("checked"))
            .when(self.disabled, |input| input.bool_attr("disabled"));

        div()
            .class("checkbox flex items-center gap-2")
            .when(self.disabled, |el| el.class("opacity-50"))
            .child(input)
            .when_some(self.label, |row, label| {
                row.child(
                    el("label")
                        .class("text-sm text-gray-900")
                        .attr("for", self.id)
                        .text(label),
                )
            })
    }
}
