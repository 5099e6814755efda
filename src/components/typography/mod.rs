//! Typography Components
//!
//! Headings, body copy, keyboard hints and the page hero.

pub mod heading;
pub mod hero;
pub mod kbd;
pub mod subheading;
pub mod text;

pub use heading::{Heading, HeadingLevel};
pub use hero::{Hero, HeroAlign};
pub use kbd::Kbd;
pub use subheading::Subheading;
pub use text::{Text, TextTag};
