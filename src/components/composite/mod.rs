//! Composite Components
//!
//! Components assembled from primitives and typography: tables, cards,
//! disclosure widgets, dialogs and tooltips.

pub mod accordion;
pub mod card;
pub mod clipboard;
pub mod collapsible;
pub mod feedback;
pub mod marquee;
pub mod modal;
pub mod table;
pub mod tree_view;

pub use accordion::{Accordion, AccordionItem};
pub use card::Card;
pub use clipboard::Clipboard;
pub use collapsible::Collapsible;
pub use feedback::Feedback;
pub use marquee::{Marquee, MarqueeDirection, MarqueeSpeed};
pub use modal::Modal;
pub use table::{Column, ColumnAlign, Table, TableCell, TableWithHeader};
pub use tree_view::{TreeNode, TreeView};
