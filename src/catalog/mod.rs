//! Catalog - Declarative Component Specs
//!
//! Every component can be described as data: a table tagged with
//! `component = "<name>"` plus its parameters. Specs deserialise from TOML or
//! JSON, validate their parameters (enum membership, required fields, ranges)
//! and build into markup.

mod composite;
mod layout;
mod navigation;
mod preview;
mod primitives;
mod typography;

pub use composite::*;
pub use layout::*;
pub use navigation::*;
pub use preview::{Preview, PreviewGroup, previews};
pub use primitives::*;
pub use typography::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::markup::{Element, Node, RenderContext};
use crate::option::{OptionValue, parse_option_or_default};

/// Parameters of one component, validated and turned into markup
pub trait ComponentParams {
    /// Component name used in errors and as the `component` tag
    const NAME: &'static str;

    fn build(&self, cx: &RenderContext) -> Result<Element>;
}

/// A component described as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "component", rename_all = "kebab-case")]
pub enum ComponentSpec {
    // Primitives
    Button(ButtonParams),
    Badge(BadgeParams),
    Icon(IconParams),
    Checkbox(CheckboxParams),
    Toggle(ToggleParams),
    Select(SelectParams),
    Dropdown(DropdownParams),
    TextInput(TextInputParams),
    Textarea(TextareaParams),
    Skeleton(SkeletonParams),
    Spinner(SpinnerParams),
    // Typography
    Heading(HeadingParams),
    Subheading(SubheadingParams),
    Text(TextParams),
    Kbd(KbdParams),
    Hero(HeroParams),
    // Navigation
    Breadcrumb(BreadcrumbParams),
    Pagination(PaginationParams),
    Dock(DockParams),
    // Composite
    Table(TableParams),
    TableWithHeader(TableWithHeaderParams),
    Card(CardParams),
    Collapsible(CollapsibleParams),
    Accordion(AccordionParams),
    TreeView(TreeViewParams),
    Marquee(MarqueeParams),
    Clipboard(ClipboardParams),
    Modal(ModalParams),
    Feedback(FeedbackParams),
    // Layout
    Shell(ShellParams),
    Header(HeaderParams),
    Sidebar(SidebarParams),
}

impl ComponentSpec {
    /// The `component` tag of this spec
    pub fn name(&self) -> &'static str {
        match self {
            ComponentSpec::Button(_) => ButtonParams::NAME,
            ComponentSpec::Badge(_) => BadgeParams::NAME,
            ComponentSpec::Icon(_) => IconParams::NAME,
            ComponentSpec::Checkbox(_) => CheckboxParams::NAME,
            ComponentSpec::Toggle(_) => ToggleParams::NAME,
            ComponentSpec::Select(_) => SelectParams::NAME,
            ComponentSpec::Dropdown(_) => DropdownParams::NAME,
            ComponentSpec::TextInput(_) => TextInputParams::NAME,
            ComponentSpec::Textarea(_) => TextareaParams::NAME,
            ComponentSpec::Skeleton(_) => SkeletonParams::NAME,
            ComponentSpec::Spinner(_) => SpinnerParams::NAME,
            ComponentSpec::Heading(_) => HeadingParams::NAME,
            ComponentSpec::Subheading(_) => SubheadingParams::NAME,
            ComponentSpec::Text(_) => TextParams::NAME,
            ComponentSpec::Kbd(_) => KbdParams::NAME,
            ComponentSpec::Hero(_) => HeroParams::NAME,
            ComponentSpec::Breadcrumb(_) => BreadcrumbParams::NAME,
            ComponentSpec::Pagination(_) => PaginationParams::NAME,
            ComponentSpec::Dock(_) => DockParams::NAME,
            ComponentSpec::Table(_) => TableParams::NAME,
            ComponentSpec::TableWithHeader(_) => TableWithHeaderParams::NAME,
            ComponentSpec::Card(_) => CardParams::NAME,
            ComponentSpec::Collapsible(_) => CollapsibleParams::NAME,
            ComponentSpec::Accordion(_) => AccordionParams::NAME,
            ComponentSpec::TreeView(_) => TreeViewParams::NAME,
            ComponentSpec::Marquee(_) => MarqueeParams::NAME,
            ComponentSpec::Clipboard(_) => ClipboardParams::NAME,
            ComponentSpec::Modal(_) => ModalParams::NAME,
            ComponentSpec::Feedback(_) => FeedbackParams::NAME,
            ComponentSpec::Shell(_) => ShellParams::NAME,
            ComponentSpec::Header(_) => HeaderParams::NAME,
            ComponentSpec::Sidebar(_) => SidebarParams::NAME,
        }
    }

    /// Validate the parameters and render the component
    pub fn build(&self, cx: &RenderContext) -> Result<Node> {
        debug!(component = self.name(), locale = %cx.locale, "building component");

        let element = match self {
            ComponentSpec::Button(params) => params.build(cx),
            ComponentSpec::Badge(params) => params.build(cx),
            ComponentSpec::Icon(params) => params.build(cx),
            ComponentSpec::Checkbox(params) => params.build(cx),
            ComponentSpec::Toggle(params) => params.build(cx),
            ComponentSpec::Select(params) => params.build(cx),
            ComponentSpec::Dropdown(params) => params.build(cx),
            ComponentSpec::TextInput(params) => params.build(cx),
            ComponentSpec::Textarea(params) => params.build(cx),
            ComponentSpec::Skeleton(params) => params.build(cx),
            ComponentSpec::Spinner(params) => params.build(cx),
            ComponentSpec::Heading(params) => params.build(cx),
            ComponentSpec::Subheading(params) => params.build(cx),
            ComponentSpec::Text(params) => params.build(cx),
            ComponentSpec::Kbd(params) => params.build(cx),
            ComponentSpec::Hero(params) => params.build(cx),
            ComponentSpec::Breadcrumb(params) => params.build(cx),
            ComponentSpec::Pagination(params) => params.build(cx),
            ComponentSpec::Dock(params) => params.build(cx),
            ComponentSpec::Table(params) => params.build(cx),
            ComponentSpec::TableWithHeader(params) => params.build(cx),
            ComponentSpec::Card(params) => params.build(cx),
            ComponentSpec::Collapsible(params) => params.build(cx),
            ComponentSpec::Accordion(params) => params.build(cx),
            ComponentSpec::TreeView(params) => params.build(cx),
            ComponentSpec::Marquee(params) => params.build(cx),
            ComponentSpec::Clipboard(params) => params.build(cx),
            ComponentSpec::Modal(params) => params.build(cx),
            ComponentSpec::Feedback(params) => params.build(cx),
            ComponentSpec::Shell(params) => params.build(cx),
            ComponentSpec::Header(params) => params.build(cx),
            ComponentSpec::Sidebar(params) => params.build(cx),
        }?;

        Ok(Node::Element(element))
    }

    /// Build and serialise in one step; a `shell` comes out as a full
    /// document, doctype included
    pub fn render_html(&self, cx: &RenderContext) -> Result<String> {
        self.build(cx).map(|node| match node {
            Node::Element(element) => element.to_document_html(),
            node => node.to_html(),
        })
    }

    /// Parse a single spec from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a single spec from JSON
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// A list of specs rendered in order, written as `[[component]]` tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    #[serde(default)]
    pub component: Vec<ComponentSpec>,
}

/// Render every `[[component]]` entry of a TOML document in order, joined
/// by newlines
pub fn render_document(source: &str, cx: &RenderContext) -> Result<String> {
    let document: Document = toml::from_str(source)?;
    if document.component.is_empty() {
        return Err(Error::Invalid {
            message: "document contains no [[component]] entries".to_string(),
        });
    }

    let rendered = document
        .component
        .iter()
        .map(|spec| spec.render_html(cx))
        .collect::<Result<Vec<_>>>()?;

    Ok(rendered.join("\n"))
}

/// JSON schema of the whole parameter surface
pub fn schema_json() -> Result<String> {
    let schema = schemars::schema_for!(ComponentSpec);
    Ok(serde_json::to_string_pretty(&schema)?)
}

// ==================== Validation helpers ====================

/// A required text parameter; blank strings count as missing
pub(crate) fn required_text(
    component: &'static str,
    field: &'static str,
    value: &Option<String>,
) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(Error::MissingParam { component, field }),
    }
}

/// A required scalar parameter
pub(crate) fn required<T: Copy>(
    component: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T> {
    value.ok_or(Error::MissingParam { component, field })
}

/// A required, non-empty list parameter
pub(crate) fn required_list<'a, T>(
    component: &'static str,
    field: &'static str,
    value: &'a Option<Vec<T>>,
) -> Result<&'a [T]> {
    match value.as_deref() {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(Error::MissingParam { component, field }),
    }
}

/// An optional enum parameter, defaulting when absent
pub(crate) fn choice<T: OptionValue + Default>(
    component: &'static str,
    field: &'static str,
    value: &Option<String>,
) -> Result<T> {
    parse_option_or_default(component, field, value.as_deref())
}

/// Build nested child specs
pub(crate) fn build_children(specs: &[ComponentSpec], cx: &RenderContext) -> Result<Vec<Node>> {
    specs.iter().map(|spec| spec.build(cx)).collect()
}
