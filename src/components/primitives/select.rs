//! Select Component

use tracing::debug;

use crate::markup::{Element, RenderContext, RenderOnce, el};

/// A select option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A native select element
#[derive(Debug, Clone)]
pub struct Select {
    id: String,
    name: String,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: Option<String>,
    disabled: bool,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected: None,
            options: Vec::new(),
            placeholder: None,
            disabled: false,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Append several options
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Append one option
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Set the placeholder (defaults to a localised "Select...")
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Select {
    fn render(self, cx: &RenderContext) -> Element {
        let has_selection = self
            .selected
            .as_ref()
            .is_some_and(|value| self.options.iter().any(|opt| &opt.value == value));

        if let (Some(value), false) = (&self.selected, has_selection) {
            debug!(id = %self.id, value = %value, "selected value not among options, showing placeholder");
        }

        let placeholder = self
            .placeholder
            .unwrap_or_else(|| cx.t("select.placeholder"));

        let selected = self.selected;
        let options = self.options.into_iter().map(|opt| {
            let is_selected = selected.as_deref() == Some(opt.value.as_str());
            el("option")
                .attr("value", opt.value)
                .when(is_selected, |option| option.bool_attr("selected"))
                .text(opt.label)
        });

        el("select")
            .class("select block w-full rounded-md border-0 py-1.5 pl-3 pr-10 text-sm ring-1 ring-inset ring-gray-300")
            .class(if has_selection { "text-gray-900" } else { "text-gray-400" })
            .id(self.id)
            .attr("name", self.name)
            .when(self.disabled, |select| {
                select.bool_attr("disabled").class("opacity-50")
            })
            .child(
                el("option")
                    .attr("value", "")
                    .bool_attr("disabled")
                    .when(!has_selection, |option| option.bool_attr("selected"))
                    .text(placeholder),
            )
            .children(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Select {
        Select::new("region", "region")
            .option("eu", "Europe")
            .option("us", "United States")
    }

    #[test]
    fn test_marks_selected_option() {
        let cx = RenderContext::default();
        let select = sample().selected("us").render(&cx);
        let selected = select.find_all(&|e| e.tag() == "option" && e.has_attr("selected"));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].get_attr("value"), Some("us"));
    }

    #[test]
    fn test_placeholder_selected_without_selection() {
        let cx = RenderContext::default();
        let select = sample().render(&cx);
        let selected = select.find_all(&|e| e.tag() == "option" && e.has_attr("selected"));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].get_attr("value"), Some(""));
        assert_eq!(selected[0].text_content(), "Select...");
    }

    #[test]
    fn test_unknown_selection_falls_back_to_placeholder() {
        let cx = RenderContext::default();
        let select = sample().selected("apac").placeholder("Pick one").render(&cx);
        let selected = select.find_all(&|e| e.has_attr("selected"));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].text_content(), "Pick one");
    }
}
