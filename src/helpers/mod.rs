//! Helper Utilities
//!
//! Common utilities used across the crate.

mod fs;
mod string;

pub use fs::*;
pub use string::*;
