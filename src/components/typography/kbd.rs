//! Kbd Component
//!
//! Keyboard shortcut hint, one `<kbd>` per key joined with `+`.

use crate::markup::{Element, RenderContext, RenderOnce, el, span};

#[derive(Debug, Clone, Default)]
pub struct Kbd {
    keys: Vec<String>,
}

impl Kbd {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a combination written as `Ctrl+K`
    pub fn parse(combo: &str) -> Self {
        Self::new(
            combo
                .split('+')
                .map(str::trim)
                .filter(|key| !key.is_empty()),
        )
    }
}

impl RenderOnce for Kbd {
    fn render(self, _cx: &RenderContext) -> Element {
        let mut root = span().class("kbd inline-flex items-center gap-1 text-xs text-gray-500");

        for (index, key) in self.keys.into_iter().enumerate() {
            if index > 0 {
                root = root.child(span().aria("hidden", "true").text("+"));
            }
            root = root.child(
                el("kbd")
                    .class("rounded border border-gray-300 bg-gray-50 px-1.5 py-0.5 font-mono font-semibold text-gray-700")
                    .text(key),
            );
        }

        root
    }
}
