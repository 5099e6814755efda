//! Trellis UI
//!
//! Server-rendered presentational components. Components render to HTML
//! and mark the elements that need client-side behavior with declarative
//! `data-*` attributes (toggle, autogrow, clipboard, collapsible, dock,
//! tree-view and feedback). Every component can also be described as data
//! through the [`catalog`].

#[macro_use]
mod option;

rust_i18n::i18n!("locales", fallback = "en");

pub mod catalog;
pub mod components;
pub mod config;
pub mod controllers;
pub mod error;
pub mod gallery;
pub mod helpers;
pub mod i18n;
pub mod markup;
pub mod theme;

pub use option::{OptionValue, parse_option, parse_option_or_default};
