//! Markup - Element Tree and Rendering
//!
//! Components render into an [`Element`] tree which serialises to HTML.

mod element;

pub use element::*;

use crate::i18n::Locale;

/// Per-render settings shared by every component in one render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub locale: Locale,
}

impl RenderContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Translate a built-in label for the active locale
    pub fn t(&self, key: &str) -> String {
        crate::i18n::t(self.locale, key)
    }
}

/// A component that renders itself into an element tree
pub trait RenderOnce {
    fn render(self, cx: &RenderContext) -> Element;

    /// Render and serialise in one step
    fn render_html(self, cx: &RenderContext) -> String
    where
        Self: Sized,
    {
        self.render(cx).to_html()
    }
}
