//! Column Definition
//!
//! Table columns and the cells placed under them.

use crate::markup::{IntoNode, Node, text};

option_enum! {
    /// Horizontal alignment of a column's header and cells
    #[derive(Default)]
    pub enum ColumnAlign {
        #[default]
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

impl ColumnAlign {
    pub fn class(&self) -> &'static str {
        match self {
            ColumnAlign::Left => "text-left",
            ColumnAlign::Center => "text-center",
            ColumnAlign::Right => "text-right",
        }
    }
}

/// Column definition for the Table
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column header label
    pub label: String,
    /// Alignment for the header and, unless overridden, every cell
    pub align: ColumnAlign,
}

impl Column {
    /// Create a new left-aligned column
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            align: ColumnAlign::Left,
        }
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for a right-aligned (numeric) column
    pub fn numeric(label: impl Into<String>) -> Self {
        Self::new(label).align(ColumnAlign::Right)
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub content: Node,
    /// Overrides the column alignment for this cell only
    pub align: Option<ColumnAlign>,
}

impl TableCell {
    pub fn new(content: impl IntoNode) -> Self {
        Self {
            content: content.into_node(),
            align: None,
        }
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Alignment after applying the column default
    pub fn resolved_align(&self, column: Option<&Column>) -> ColumnAlign {
        self.align
            .or(column.map(|column| column.align))
            .unwrap_or_default()
    }
}

impl From<&str> for TableCell {
    fn from(value: &str) -> Self {
        Self::new(text(value))
    }
}

impl From<String> for TableCell {
    fn from(value: String) -> Self {
        Self::new(text(value))
    }
}
