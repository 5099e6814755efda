//! Navigation Components

pub mod breadcrumb;
pub mod dock;
pub mod pagination;

pub use breadcrumb::{Breadcrumb, BreadcrumbItem, BreadcrumbSeparator};
pub use dock::{Dock, DockItem, DockPosition};
pub use pagination::{PageSlot, Pagination, page_window};
