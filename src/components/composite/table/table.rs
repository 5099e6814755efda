//! Table Component

use super::{Column, TableCell};
use crate::error::{Error, Result};
use crate::markup::{Element, RenderContext, RenderOnce, el};

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<TableCell>>,
    caption: Option<String>,
    striped: bool,
    compact: bool,
    empty_message: Option<String>,
}

impl Table {
    /// Create a new table
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Append a row
    pub fn row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<TableCell>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Text of the row shown when there are no rows (localised by default)
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Check that every row has one cell per column
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::MissingParam {
                component: "table",
                field: "columns",
            });
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(Error::InvalidParam {
                    component: "table",
                    field: "rows",
                    message: format!(
                        "row {index} has {} cells, expected {}",
                        row.len(),
                        self.columns.len()
                    ),
                });
            }
        }
        Ok(())
    }

    fn cell_padding(&self) -> &'static str {
        if self.compact { "px-3 py-1.5" } else { "px-4 py-3" }
    }
}

impl RenderOnce for Table {
    fn render(self, cx: &RenderContext) -> Element {
        let padding = self.cell_padding();

        let head = el("thead").class("bg-gray-50").child(
            el("tr").children(self.columns.iter().map(|column| {
                el("th")
                    .class("text-sm font-semibold text-gray-900")
                    .class(padding)
                    .class(column.align.class())
                    .attr("scope", "col")
                    .text(&column.label)
            })),
        );

        let body = if self.rows.is_empty() {
            let message = self
                .empty_message
                .clone()
                .unwrap_or_else(|| cx.t("table.empty"));
            el("tbody").child(
                el("tr").class("table-empty").child(
                    el("td")
                        .class("text-center text-sm text-gray-500")
                        .class(padding)
                        .attr("colspan", self.columns.len().max(1).to_string())
                        .text(message),
                ),
            )
        } else {
            let columns = &self.columns;
            let striped = self.striped;
            el("tbody")
                .class("divide-y divide-gray-200 bg-white")
                .children(self.rows.into_iter().enumerate().map(|(row_index, row)| {
                    el("tr")
                        .when(striped && row_index % 2 == 1, |tr| tr.class("bg-gray-50"))
                        .children(row.into_iter().enumerate().map(|(index, cell)| {
                            let align = cell.resolved_align(columns.get(index));
                            el("td")
                                .class("whitespace-nowrap text-sm text-gray-700")
                                .class(padding)
                                .class(align.class())
                                .child(cell.content)
                        }))
                }))
        };

        el("table")
            .class("table min-w-full divide-y divide-gray-300")
            .when(self.striped, |table| table.class("table-striped"))
            .when(self.compact, |table| table.class("table-compact"))
            .when_some(self.caption, |table, caption| {
                table.child(
                    el("caption")
                        .class("caption-top py-2 text-left text-sm text-gray-500")
                        .text(caption),
                )
            })
            .child(head)
            .child(body)
    }
}
