//! Toggle Component
//!
//! An on/off switch driven by the `toggle` client behavior.

use crate::controllers::{Controller, ControllerBinding};
use crate::markup::{Element, RenderContext, RenderOnce, el, span};

#[derive(Debug, Clone)]
pub struct Toggle {
    id: String,
    label: Option<String>,
    checked: bool,
    disabled: bool,
}

impl Toggle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            checked: false,
            disabled: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Toggle {
    fn render(self, _cx: &RenderContext) -> Element {
        let (track, knob) = if self.checked {
            ("bg-indigo-600", "translate-x-5")
        } else {
            ("bg-gray-200", "translate-x-0")
        };

        let button = el("button")
            .class("relative inline-flex h-6 w-11 shrink-0 rounded-full border-2 border-transparent transition-colors")
            .class(track)
            .id(self.id)
            .attr("type", "button")
            .attr("role", "switch")
            .aria("checked", self.checked.to_string())
            .when_some(self.label.clone(), |button, label| button.aria("label", label))
            .when(self.disabled, |button| {
                button.bool_attr("disabled").class("opacity-50 cursor-not-allowed")
            })
            .child(
                span()
                    .class("pointer-events-none inline-block size-5 rounded-full bg-white shadow transition")
                    .class(knob)
                    .aria("hidden", "true"),
            );

        let button = ControllerBinding::new(Controller::Toggle)
            .value("checked", self.checked)
            .action("click", "toggle")
            .apply(button);

        span()
            .class("toggle inline-flex items-center gap-3")
            .child(button)
            .when_some(self.label, |row, label| {
                row.child(span().class("text-sm text-gray-900").text(label))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch_of(element: &Element) -> &Element {
        element
            .find(&|e| e.get_attr("role") == Some("switch"))
            .expect("switch")
    }

    #[test]
    fn test_binds_toggle_controller() {
        let cx = RenderContext::default();
        let toggle = Toggle::new("dark-mode").label("Dark mode").render(&cx);
        let switch = switch_of(&toggle);
        assert_eq!(switch.get_attr("data-controller"), Some("toggle"));
        assert_eq!(switch.get_attr("data-action"), Some("click->toggle#toggle"));
        assert_eq!(switch.get_attr("aria-label"), Some("Dark mode"));
    }

    #[test]
    fn test_checked_states_are_exclusive() {
        let cx = RenderContext::default();
        let on = Toggle::new("t").checked(true).render(&cx);
        let off = Toggle::new("t").render(&cx);

        let on = switch_of(&on);
        let off = switch_of(&off);
        assert_eq!(on.get_attr("aria-checked"), Some("true"));
        assert_eq!(on.get_attr("data-toggle-checked-value"), Some("true"));
        assert!(on.has_class("bg-indigo-600") && !on.has_class("bg-gray-200"));
        assert_eq!(off.get_attr("aria-checked"), Some("false"));
        assert_eq!(off.get_attr("data-toggle-checked-value"), Some("false"));
        assert!(off.has_class("bg-gray-200") && !off.has_class("bg-indigo-600"));
    }
}
