//! Table Components
//!
//! A static table with per-column alignment, and a variant headed by a
//! title, description and actions.

mod column;
mod table;
mod table_with_header;

pub use column::{Column, ColumnAlign, TableCell};
pub use table::Table;
pub use table_with_header::TableWithHeader;
