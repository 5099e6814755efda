//! Layout Components
//!
//! Document shell, header and sidebar.

pub mod header;
pub mod shell;
pub mod sidebar;

pub use header::{Header, HeaderLink};
pub use shell::Shell;
pub use sidebar::{Sidebar, SidebarItem};
