//! Primitive component parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ComponentParams, choice, required_text};
use crate::components::primitives::{
    Badge, Button, ButtonKind, ButtonSize, ButtonVariant, Checkbox, Dropdown, DropdownAlign,
    DropdownItem, Icon, IconName, IconSize, InputKind, Select, SelectOption, Skeleton,
    SkeletonShape, SkeletonWidth, Spinner, TextInput, Textarea, Toggle,
};
use crate::error::{Error, Result};
use crate::markup::{Element, RenderContext, RenderOnce};
use crate::option::parse_option;
use crate::theme::Tone;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonParams {
    pub id: Option<String>,
    pub label: Option<String>,
    #[schemars(with = "Option<ButtonVariant>")]
    pub variant: Option<String>,
    #[schemars(with = "Option<ButtonSize>")]
    pub size: Option<String>,
    #[schemars(with = "Option<ButtonKind>")]
    pub kind: Option<String>,
    pub href: Option<String>,
    #[schemars(with = "Option<IconName>")]
    pub icon: Option<String>,
    pub disabled: bool,
    pub loading: bool,
}

impl ButtonParams {
    /// Validate into a typed button (shared with components that hold buttons)
    pub fn to_button(&self) -> Result<Button> {
        let name = Self::NAME;
        let button = Button::new(required_text(name, "label", &self.label)?)
            .variant(choice(name, "variant", &self.variant)?)
            .size(choice(name, "size", &self.size)?)
            .kind(choice(name, "kind", &self.kind)?)
            .disabled(self.disabled)
            .loading(self.loading);

        let button = match &self.icon {
            Some(icon) => button.icon(parse_option(name, "icon", icon)?),
            None => button,
        };
        let button = match &self.href {
            Some(href) => button.href(href),
            None => button,
        };
        Ok(match &self.id {
            Some(id) => button.id(id),
            None => button,
        })
    }
}

impl ComponentParams for ButtonParams {
    const NAME: &'static str = "button";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        Ok(self.to_button()?.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeParams {
    pub label: Option<String>,
    #[schemars(with = "Option<Tone>")]
    pub tone: Option<String>,
    pub pill: bool,
    pub solid: bool,
}

impl ComponentParams for BadgeParams {
    const NAME: &'static str = "badge";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let name = Self::NAME;
        Ok(Badge::new(required_text(name, "label", &self.label)?)
            .tone(choice(name, "tone", &self.tone)?)
            .pill(self.pill)
            .solid(self.solid)
            .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct IconParams {
    #[schemars(with = "Option<IconName>")]
    pub name: Option<String>,
    #[schemars(with = "Option<IconSize>")]
    pub size: Option<String>,
    pub label: Option<String>,
}

impl ComponentParams for IconParams {
    const NAME: &'static str = "icon";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let key = required_text(component, "name", &self.name)?;
        let icon = Icon::new(parse_option(component, "name", &key)?)
            .size(choice(component, "size", &self.size)?);
        let icon = match &self.label {
            Some(label) => icon.label(label),
            None => icon,
        };
        Ok(icon.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CheckboxParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    pub disabled: bool,
}

impl ComponentParams for CheckboxParams {
    const NAME: &'static str = "checkbox";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let checkbox = Checkbox::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "name", &self.name)?,
        )
        .checked(self.checked)
        .disabled(self.disabled);

        let checkbox = match &self.label {
            Some(label) => checkbox.label(label),
            None => checkbox,
        };
        let checkbox = match &self.value {
            Some(value) => checkbox.value(value),
            None => checkbox,
        };
        Ok(checkbox.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleParams {
    pub id: Option<String>,
    pub label: Option<String>,
    pub checked: bool,
    pub disabled: bool,
}

impl ComponentParams for ToggleParams {
    const NAME: &'static str = "toggle";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let toggle = Toggle::new(required_text(Self::NAME, "id", &self.id)?)
            .checked(self.checked)
            .disabled(self.disabled);
        let toggle = match &self.label {
            Some(label) => toggle.label(label),
            None => toggle,
        };
        Ok(toggle.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SelectOptionParams {
    pub value: String,
    /// Visible text; defaults to the value
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SelectParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub options: Vec<SelectOptionParams>,
    pub selected: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
}

impl ComponentParams for SelectParams {
    const NAME: &'static str = "select";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let select = Select::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "name", &self.name)?,
        )
        .options(self.options.iter().map(|option| {
            SelectOption::new(
                &option.value,
                option.label.as_deref().unwrap_or(&option.value),
            )
        }))
        .disabled(self.disabled);

        let select = match &self.selected {
            Some(selected) => select.selected(selected),
            None => select,
        };
        let select = match &self.placeholder {
            Some(placeholder) => select.placeholder(placeholder),
            None => select,
        };
        Ok(select.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum DropdownItemParams {
    Link { label: String, href: String },
    Action { label: String, name: String },
    Divider,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownParams {
    pub id: Option<String>,
    pub label: Option<String>,
    pub items: Vec<DropdownItemParams>,
    #[schemars(with = "Option<DropdownAlign>")]
    pub align: Option<String>,
    pub open: bool,
}

impl ComponentParams for DropdownParams {
    const NAME: &'static str = "dropdown";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let items = self.items.iter().map(|item| match item {
            DropdownItemParams::Link { label, href } => DropdownItem::link(label, href),
            DropdownItemParams::Action { label, name } => DropdownItem::action(label, name),
            DropdownItemParams::Divider => DropdownItem::Divider,
        });

        Ok(Dropdown::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "label", &self.label)?,
        )
        .items(items)
        .align(choice(component, "align", &self.align)?)
        .open(self.open)
        .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TextInputParams {
    pub id: Option<String>,
    pub name: Option<String>,
    #[schemars(with = "Option<InputKind>")]
    pub kind: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub required: bool,
}

impl ComponentParams for TextInputParams {
    const NAME: &'static str = "text-input";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let input = TextInput::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "name", &self.name)?,
        )
        .kind(choice(component, "kind", &self.kind)?)
        .disabled(self.disabled)
        .required(self.required);

        let input = match &self.value {
            Some(value) => input.value(value),
            None => input,
        };
        let input = match &self.placeholder {
            Some(placeholder) => input.placeholder(placeholder),
            None => input,
        };
        Ok(input.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TextareaParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub rows: Option<u32>,
    pub max_rows: Option<u32>,
    pub autogrow: bool,
    pub disabled: bool,
}

impl ComponentParams for TextareaParams {
    const NAME: &'static str = "textarea";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let mut textarea = Textarea::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "name", &self.name)?,
        )
        .autogrow(self.autogrow)
        .disabled(self.disabled);

        if let Some(rows) = self.rows {
            if rows == 0 {
                return Err(Error::InvalidParam {
                    component,
                    field: "rows",
                    message: "must be at least 1".to_string(),
                });
            }
            textarea = textarea.rows(rows);
        }
        if let Some(max_rows) = self.max_rows {
            let rows = self.rows.unwrap_or(3);
            if max_rows < rows {
                return Err(Error::InvalidParam {
                    component,
                    field: "max_rows",
                    message: format!("{max_rows} is less than rows ({rows})"),
                });
            }
            textarea = textarea.max_rows(max_rows);
        }
        if let Some(value) = &self.value {
            textarea = textarea.value(value);
        }
        if let Some(placeholder) = &self.placeholder {
            textarea = textarea.placeholder(placeholder);
        }
        Ok(textarea.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SkeletonParams {
    #[schemars(with = "Option<SkeletonShape>")]
    pub shape: Option<String>,
    pub lines: Option<u32>,
    #[schemars(with = "Option<SkeletonWidth>")]
    pub width: Option<String>,
}

impl ComponentParams for SkeletonParams {
    const NAME: &'static str = "skeleton";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        Ok(Skeleton::new()
            .shape(choice(component, "shape", &self.shape)?)
            .width(choice(component, "width", &self.width)?)
            .lines(self.lines.unwrap_or(1))
            .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerParams {
    #[schemars(with = "Option<IconSize>")]
    pub size: Option<String>,
    pub label: Option<String>,
}

impl ComponentParams for SpinnerParams {
    const NAME: &'static str = "spinner";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let spinner = Spinner::new().size(choice(Self::NAME, "size", &self.size)?);
        let spinner = match &self.label {
            Some(label) => spinner.label(label),
            None => spinner,
        };
        Ok(spinner.render(cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentSpec;

    fn build(source: &str) -> Result<Element> {
        let spec = ComponentSpec::from_toml(source).expect("spec parses");
        spec.build(&RenderContext::default()).map(|node| {
            node.as_element().cloned().expect("element")
        })
    }

    #[test]
    fn test_button_link_with_icon() {
        let button = build(
            r#"
            component = "button"
            label = "Docs"
            href = "/docs"
            icon = "external-link"
            variant = "link"
            "#,
        )
        .expect("button");
        assert_eq!(button.tag(), "a");
        assert!(button.find(&|e| e.has_class("icon-external-link")).is_some());
    }

    #[test]
    fn test_unknown_icon_is_invalid_option() {
        let err = build(
            r#"
            component = "icon"
            name = "sparkles"
            "#,
        )
        .expect_err("unknown icon");
        assert!(matches!(
            err,
            Error::InvalidOption {
                component: "icon",
                field: "name",
                ..
            }
        ));
    }

    #[test]
    fn test_enum_values_are_case_insensitive() {
        let badge = build(
            r#"
            component = "badge"
            label = "Hot"
            tone = "DANGER"
            "#,
        )
        .expect("badge");
        assert!(badge.has_class("badge-danger"));
    }

    #[test]
    fn test_select_option_label_defaults_to_value() {
        let select = build(
            r#"
            component = "select"
            id = "region"
            name = "region"
            selected = "eu"
            options = [{ value = "us" }, { value = "eu", label = "Europe" }]
            "#,
        )
        .expect("select");
        let selected = select
            .find(&|e| e.tag() == "option" && e.has_attr("selected"))
            .expect("selected option");
        assert_eq!(selected.text_content(), "Europe");
        assert!(select.text_content().contains("us"));
    }

    #[test]
    fn test_dropdown_items() {
        let dropdown = build(
            r#"
            component = "dropdown"
            id = "account"
            label = "Account"
            align = "end"
            items = [
                { kind = "link", label = "Profile", href = "/me" },
                { kind = "divider" },
                { kind = "action", label = "Sign out", name = "sign-out" },
            ]
            "#,
        )
        .expect("dropdown");
        assert!(dropdown.find(&|e| e.get_attr("href") == Some("/me")).is_some());
        assert!(
            dropdown
                .find(&|e| e.get_attr("role") == Some("separator"))
                .is_some()
        );
        assert!(
            dropdown
                .find(&|e| e.get_attr("data-dropdown-action") == Some("sign-out"))
                .is_some()
        );
    }

    #[test]
    fn test_textarea_row_bounds() {
        let err = build(
            r#"
            component = "textarea"
            id = "bio"
            name = "bio"
            rows = 4
            max_rows = 2
            "#,
        )
        .expect_err("max below min");
        assert!(matches!(err, Error::InvalidParam { field: "max_rows", .. }));

        let zero = build(
            r#"
            component = "textarea"
            id = "bio"
            name = "bio"
            rows = 0
            "#,
        )
        .expect_err("zero rows");
        assert!(matches!(zero, Error::InvalidParam { field: "rows", .. }));
    }

    #[test]
    fn test_missing_ids() {
        for source in [
            r#"component = "toggle""#,
            r#"component = "checkbox"
               name = "x""#,
            r#"component = "text-input"
               id = "x""#,
        ] {
            assert!(matches!(build(source), Err(Error::MissingParam { .. })));
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let spec = ComponentSpec::from_toml(
            r#"
            component = "badge"
            label = "x"
            colour = "red"
            "#,
        );
        assert!(spec.is_err());
    }

    #[test]
    fn test_solid_badge_uses_filled_background() {
        let badge = build(
            r#"
            component = "badge"
            label = "Live"
            tone = "danger"
            solid = true
            "#,
        )
        .expect("badge");
        assert!(badge.has_class("bg-red-600") && badge.has_class("text-white"));
        assert!(!badge.has_class("bg-red-50"));
    }
}
