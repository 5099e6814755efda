//! Controllers - Client Behavior Bindings
//!
//! Components stay static markup; interactivity comes from a client runtime
//! that reads `data-controller`, `data-action`, `data-<name>-target` and
//! `data-<name>-<key>-value` attributes. This module owns that attribute
//! vocabulary, and the small pieces of logic the behaviors run.

pub mod autogrow;
pub mod collapsible;
pub mod dock;
pub mod geometry;
pub mod tree;

pub use autogrow::{AutogrowResult, autogrow_height};
pub use collapsible::CollapsibleState;
pub use dock::{DockHotkeys, normalize_hotkey};
pub use geometry::{Placement, Point, Rect, anchor_point};
pub use tree::TreeExpansion;

use crate::markup::Element;

option_enum! {
    /// Client behaviors components can bind to
    pub enum Controller {
        Toggle => "toggle",
        Autogrow => "autogrow",
        Clipboard => "clipboard",
        Collapsible => "collapsible",
        Dock => "dock",
        TreeView => "tree-view",
        Feedback => "feedback",
    }
}

impl Controller {
    /// Identifier used in `data-controller` and attribute prefixes
    pub fn name(&self) -> &'static str {
        crate::option::OptionValue::as_str(self)
    }

    /// Mark `element` as a target of this controller
    pub fn target(&self, element: Element, target: &str) -> Element {
        element.data(&format!("{}-target", self.name()), target)
    }

    /// Attach an action parameter (`data-<name>-<key>-param`) to `element`
    pub fn param(&self, element: Element, key: &str, value: impl Into<String>) -> Element {
        element.data(&format!("{}-{}-param", self.name(), kebab(key)), value)
    }

    /// Attach an action descriptor (`event-><name>#method`) to `element`
    pub fn action(&self, element: Element, event: &str, method: &str) -> Element {
        element.data("action", self.action_descriptor(event, method))
    }

    fn action_descriptor(&self, event: &str, method: &str) -> String {
        format!("{event}->{}#{method}", self.name())
    }
}

/// Declarative binding of one controller to a root element
#[derive(Debug, Clone)]
pub struct ControllerBinding {
    controller: Controller,
    values: Vec<(String, String)>,
    actions: Vec<String>,
    target: Option<String>,
}

impl ControllerBinding {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            values: Vec::new(),
            actions: Vec::new(),
            target: None,
        }
    }

    /// Add a `data-<name>-<key>-value` attribute
    pub fn value(mut self, key: &str, value: impl ToString) -> Self {
        self.values.push((kebab(key), value.to_string()));
        self
    }

    /// Add an action on the root element itself
    pub fn action(mut self, event: &str, method: &str) -> Self {
        self.actions
            .push(self.controller.action_descriptor(event, method));
        self
    }

    /// Also mark the root element as a named target
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Write the binding's attributes onto `element`
    pub fn apply(self, element: Element) -> Element {
        let name = self.controller.name();
        let mut element = element.data("controller", name);

        for (key, value) in self.values {
            element = element.data(&format!("{name}-{key}-value"), value);
        }

        if !self.actions.is_empty() {
            element = element.data("action", self.actions.join(" "));
        }

        if let Some(target) = self.target {
            element = element.data(&format!("{name}-target"), target);
        }

        element
    }
}

/// Convert `snake_case` or `camelCase` keys to the kebab-case attribute form
fn kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' {
            out.push('-');
        } else if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::div;

    #[test]
    fn test_binding_writes_controller_values_and_actions() {
        let element = ControllerBinding::new(Controller::Collapsible)
            .value("open", true)
            .value("animation_ms", 150)
            .action("keydown.esc", "close")
            .apply(div());

        assert_eq!(element.get_attr("data-controller"), Some("collapsible"));
        assert_eq!(element.get_attr("data-collapsible-open-value"), Some("true"));
        assert_eq!(
            element.get_attr("data-collapsible-animation-ms-value"),
            Some("150")
        );
        assert_eq!(
            element.get_attr("data-action"),
            Some("keydown.esc->collapsible#close")
        );
    }

    #[test]
    fn test_binding_without_actions_omits_data_action() {
        let element = ControllerBinding::new(Controller::Toggle).apply(div());
        assert!(!element.has_attr("data-action"));
    }

    #[test]
    fn test_target_param_and_action_helpers() {
        let element = Controller::TreeView.target(div(), "folder");
        assert_eq!(element.get_attr("data-tree-view-target"), Some("folder"));

        let element = Controller::Dock.param(div(), "hotKey", "g");
        assert_eq!(element.get_attr("data-dock-hot-key-param"), Some("g"));

        let element = Controller::Clipboard.action(div(), "click", "copy");
        assert_eq!(element.get_attr("data-action"), Some("click->clipboard#copy"));
    }

    #[test]
    fn test_binding_target_marks_root() {
        let element = ControllerBinding::new(Controller::Feedback)
            .target("anchor")
            .apply(div());
        assert_eq!(element.get_attr("data-feedback-target"), Some("anchor"));
    }

    #[test]
    fn test_kebab_case_conversion() {
        assert_eq!(kebab("success_label"), "success-label");
        assert_eq!(kebab("maxRows"), "max-rows");
        assert_eq!(kebab("open"), "open");
    }
}
