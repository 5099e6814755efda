//! Composite component parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ComponentParams, ComponentSpec, build_children, choice, required_list, required_text};
use crate::components::composite::{
    Accordion, AccordionItem, Card, Clipboard, Collapsible, Column, ColumnAlign, Feedback,
    Marquee, MarqueeDirection, MarqueeSpeed, Modal, Table, TableCell, TableWithHeader, TreeNode,
    TreeView,
};
use crate::controllers::Placement;
use crate::error::{Error, Result};
use crate::markup::{Element, RenderContext, RenderOnce, text};
use crate::option::parse_option;
use crate::theme::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ColumnParams {
    pub label: String,
    #[serde(default)]
    #[schemars(with = "Option<ColumnAlign>")]
    pub align: Option<String>,
}

/// A cell: plain text, or text with its own alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CellParams {
    Text(String),
    Aligned {
        text: String,
        #[schemars(with = "ColumnAlign")]
        align: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TableParams {
    pub columns: Option<Vec<ColumnParams>>,
    pub rows: Vec<Vec<CellParams>>,
    pub caption: Option<String>,
    pub striped: bool,
    pub compact: bool,
    pub empty_message: Option<String>,
}

impl TableParams {
    fn to_table(&self) -> Result<Table> {
        let component = TableParams::NAME;
        let columns = required_list(component, "columns", &self.columns)?
            .iter()
            .map(|column| {
                Ok(Column::new(&column.label).align(choice(component, "align", &column.align)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        CellParams::Text(content) => Ok(TableCell::new(text(content))),
                        CellParams::Aligned { text: content, align } => Ok(TableCell::new(text(content))
                            .align(parse_option(component, "align", align)?)),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let table = Table::new(columns)
            .rows(rows)
            .striped(self.striped)
            .compact(self.compact);
        let table = match &self.caption {
            Some(caption) => table.caption(caption),
            None => table,
        };
        let table = match &self.empty_message {
            Some(message) => table.empty_message(message),
            None => table,
        };
        table.validate()?;
        Ok(table)
    }
}

impl ComponentParams for TableParams {
    const NAME: &'static str = "table";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        Ok(self.to_table()?.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TableWithHeaderParams {
    pub title: Option<String>,
    pub table: Option<TableParams>,
    pub description: Option<String>,
    pub actions: Vec<ComponentSpec>,
}

impl ComponentParams for TableWithHeaderParams {
    const NAME: &'static str = "table-with-header";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let table = self
            .table
            .as_ref()
            .ok_or(Error::MissingParam {
                component,
                field: "table",
            })?
            .to_table()?;

        let mut block = TableWithHeader::new(required_text(component, "title", &self.title)?, table);
        if let Some(description) = &self.description {
            block = block.description(description);
        }
        for action in build_children(&self.actions, cx)? {
            block = block.action(action);
        }
        Ok(block.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CardParams {
    pub header: Vec<ComponentSpec>,
    pub body: Vec<ComponentSpec>,
    pub footer: Vec<ComponentSpec>,
    pub padded: bool,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            header: Vec::new(),
            body: Vec::new(),
            footer: Vec::new(),
            padded: true,
        }
    }
}

impl ComponentParams for CardParams {
    const NAME: &'static str = "card";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let mut card = Card::new().padded(self.padded);
        for node in build_children(&self.header, cx)? {
            card = card.header(node);
        }
        card = card.children(build_children(&self.body, cx)?);
        for node in build_children(&self.footer, cx)? {
            card = card.footer(node);
        }
        Ok(card.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CollapsibleParams {
    pub id: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub open: bool,
}

impl ComponentParams for CollapsibleParams {
    const NAME: &'static str = "collapsible";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        Ok(Collapsible::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "summary", &self.summary)?,
            required_text(component, "content", &self.content)?,
        )
        .open(self.open)
        .render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AccordionItemParams {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionParams {
    pub id: Option<String>,
    pub items: Option<Vec<AccordionItemParams>>,
    pub multiple: bool,
}

impl ComponentParams for AccordionParams {
    const NAME: &'static str = "accordion";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let items = required_list(component, "items", &self.items)?
            .iter()
            .map(|item| AccordionItem::new(&item.title, text(&item.content)).open(item.open));

        Ok(Accordion::new(required_text(component, "id", &self.id)?, items)
            .multiple(self.multiple)
            .render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum TreeNodeParams {
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<TreeNodeParams>,
        #[serde(default)]
        open: bool,
    },
    File {
        name: String,
        #[serde(default)]
        href: Option<String>,
    },
}

impl From<&TreeNodeParams> for TreeNode {
    fn from(params: &TreeNodeParams) -> Self {
        match params {
            TreeNodeParams::Folder {
                name,
                children,
                open,
            } => TreeNode::Folder {
                name: name.clone(),
                children: children.iter().map(TreeNode::from).collect(),
                open: *open,
            },
            TreeNodeParams::File { name, href } => TreeNode::File {
                name: name.clone(),
                href: href.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TreeViewParams {
    pub id: Option<String>,
    pub nodes: Option<Vec<TreeNodeParams>>,
}

impl ComponentParams for TreeViewParams {
    const NAME: &'static str = "tree-view";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let nodes = required_list(component, "nodes", &self.nodes)?
            .iter()
            .map(TreeNode::from);
        Ok(TreeView::new(required_text(component, "id", &self.id)?, nodes).render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeParams {
    pub items: Option<Vec<String>>,
    #[schemars(with = "Option<MarqueeSpeed>")]
    pub speed: Option<String>,
    #[schemars(with = "Option<MarqueeDirection>")]
    pub direction: Option<String>,
    pub pause_on_hover: bool,
}

impl Default for MarqueeParams {
    fn default() -> Self {
        Self {
            items: None,
            speed: None,
            direction: None,
            pause_on_hover: true,
        }
    }
}

impl ComponentParams for MarqueeParams {
    const NAME: &'static str = "marquee";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        Ok(Marquee::new(required_list(component, "items", &self.items)?.iter().map(String::as_str))
            .speed(choice(component, "speed", &self.speed)?)
            .direction(choice(component, "direction", &self.direction)?)
            .pause_on_hover(self.pause_on_hover)
            .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardParams {
    pub id: Option<String>,
    pub text: Option<String>,
    pub label: Option<String>,
    pub success_label: Option<String>,
}

impl ComponentParams for ClipboardParams {
    const NAME: &'static str = "clipboard";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        // Copied text is kept verbatim, surrounding whitespace included.
        let copied = match self.text.as_deref() {
            Some(copied) if !copied.is_empty() => copied,
            _ => {
                return Err(Error::MissingParam {
                    component,
                    field: "text",
                });
            }
        };

        let clipboard = Clipboard::new(required_text(component, "id", &self.id)?, copied);
        let clipboard = match &self.label {
            Some(label) => clipboard.label(label),
            None => clipboard,
        };
        let clipboard = match &self.success_label {
            Some(label) => clipboard.success_label(label),
            None => clipboard,
        };
        Ok(clipboard.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ModalParams {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Vec<ComponentSpec>,
    pub footer: Vec<ComponentSpec>,
    pub open: bool,
    pub dismissible: bool,
}

impl Default for ModalParams {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            body: Vec::new(),
            footer: Vec::new(),
            open: false,
            dismissible: true,
        }
    }
}

impl ComponentParams for ModalParams {
    const NAME: &'static str = "modal";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let mut modal = Modal::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "title", &self.title)?,
        )
        .open(self.open)
        .dismissible(self.dismissible);

        for node in build_children(&self.body, cx)? {
            modal = modal.child(node);
        }
        for node in build_children(&self.footer, cx)? {
            modal = modal.footer(node);
        }
        Ok(modal.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FeedbackParams {
    pub id: Option<String>,
    pub trigger: Option<String>,
    pub message: Option<String>,
    #[schemars(with = "Option<Placement>")]
    pub placement: Option<String>,
    #[schemars(with = "Option<Tone>")]
    pub tone: Option<String>,
}

impl ComponentParams for FeedbackParams {
    const NAME: &'static str = "feedback";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        Ok(Feedback::new(
            required_text(component, "id", &self.id)?,
            required_text(component, "trigger", &self.trigger)?,
            required_text(component, "message", &self.message)?,
        )
        .placement(choice(component, "placement", &self.placement)?)
        .tone(choice(component, "tone", &self.tone)?)
        .render(cx))
    }
}
