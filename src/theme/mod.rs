//! Theme - Tones and Typography
//!
//! Design tokens expressed as utility class names.

pub mod colors;
pub mod typography;

pub use colors::Tone;
pub use typography::{FontWeight, TextSize};
