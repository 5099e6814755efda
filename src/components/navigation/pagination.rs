//! Pagination Component
//!
//! Page navigation rendered as links: previous, a window of page numbers
//! around the current page with ellipses, and next.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::error::{Error, Result};
use crate::i18n;
use crate::markup::{Element, RenderContext, RenderOnce, a, el, span};

const DEFAULT_BASE_URL: &str = "?page=";
const DEFAULT_WINDOW: usize = 2;

/// One position in the page list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Pages to show: the first and last page, plus `window` pages either side of
/// `current`, with an ellipsis wherever numbers are skipped.
///
/// A gap of exactly one page shows that page instead of an ellipsis.
pub fn page_window(current: usize, total_pages: usize, window: usize) -> Vec<PageSlot> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(window).max(1);
    let end = current.saturating_add(window).min(total_pages);

    let mut slots = Vec::new();
    if start > 1 {
        slots.push(PageSlot::Page(1));
        push_gap(&mut slots, 2, start);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total_pages {
        push_gap(&mut slots, end + 1, total_pages);
        slots.push(PageSlot::Page(total_pages));
    }

    slots
}

/// Fill the hidden pages `from..to`
fn push_gap(slots: &mut Vec<PageSlot>, from: usize, to: usize) {
    match to.saturating_sub(from) {
        0 => {}
        1 => slots.push(PageSlot::Page(from)),
        _ => slots.push(PageSlot::Ellipsis),
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    current: usize,
    total_pages: usize,
    base_url: String,
    total_items: Option<usize>,
    window: usize,
}

impl Pagination {
    /// Create a new pagination component (pages are 1-based)
    pub fn new(current: usize, total_pages: usize) -> Self {
        Self {
            current,
            total_pages,
            base_url: DEFAULT_BASE_URL.to_string(),
            total_items: None,
            window: DEFAULT_WINDOW,
        }
    }

    /// Prefix joined with the page number to form each link
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the item count shown beside the pages
    pub fn total_items(mut self, total_items: usize) -> Self {
        self.total_items = Some(total_items);
        self
    }

    /// Pages shown either side of the current page
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Check page numbers; rendering clamps, string-driven callers reject
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, message: String| Error::InvalidParam {
            component: "pagination",
            field,
            message,
        };

        if self.total_pages == 0 {
            return Err(invalid("total_pages", "must be at least 1".to_string()));
        }
        if self.current == 0 {
            return Err(invalid("current", "pages start at 1".to_string()));
        }
        if self.current > self.total_pages {
            return Err(invalid(
                "current",
                format!("{} exceeds total_pages {}", self.current, self.total_pages),
            ));
        }
        Ok(())
    }

    fn href(&self, page: usize) -> String {
        format!("{}{page}", self.base_url)
    }

    fn step(&self, cx: &RenderContext, label: String, icon: IconName, target: Option<usize>) -> Element {
        let icon = Icon::new(icon).size(IconSize::Sm).render(cx);
        let base = "inline-flex items-center gap-1 rounded-md px-2 py-2 text-sm";

        match target {
            Some(page) => a()
                .class(base)
                .class("text-gray-700 hover:bg-gray-50")
                .attr("href", self.href(page))
                .child(icon)
                .child(span().text(label)),
            None => span()
                .class(base)
                .class("text-gray-300 cursor-not-allowed")
                .aria("disabled", "true")
                .child(icon)
                .child(span().text(label)),
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, cx: &RenderContext) -> Element {
        let total = self.total_pages.max(1);
        let current = self.current.clamp(1, total);

        let previous = self.step(
            cx,
            cx.t("pagination.previous"),
            IconName::ChevronLeft,
            (current > 1).then(|| current - 1),
        );
        let next = self.step(
            cx,
            cx.t("pagination.next"),
            IconName::ChevronRight,
            (current < total).then(|| current + 1),
        );

        let mut pages = el("ul").class("flex items-center gap-1");
        for slot in page_window(current, total, self.window) {
            let item = match slot {
                PageSlot::Ellipsis => span()
                    .class("px-2 text-sm text-gray-400")
                    .aria("hidden", "true")
                    .text("…"),
                PageSlot::Page(page) => {
                    let label = i18n::t_with(cx.locale, "pagination.page", &[("page", &page.to_string())]);
                    a()
                        .class("rounded-md px-3 py-2 text-sm font-semibold")
                        .attr("href", self.href(page))
                        .aria("label", label)
                        .when(page == current, |link| {
                            link.class("bg-indigo-600 text-white").aria("current", "page")
                        })
                        .when(page != current, |link| link.class("text-gray-900 hover:bg-gray-50"))
                        .text(page.to_string())
                }
            };
            pages = pages.child(el("li").child(item));
        }

        el("nav")
            .class("pagination flex items-center justify-between border-t border-gray-200 px-4 py-3")
            .aria("label", cx.t("pagination.label"))
            .when_some(self.total_items, |nav, total_items| {
                let summary = i18n::t_with(
                    cx.locale,
                    "pagination.summary",
                    &[("total", &total_items.to_string())],
                );
                nav.child(el("p").class("pagination-summary text-sm text-gray-700").text(summary))
            })
            .child(
                span()
                    .class("flex items-center gap-2")
                    .child(previous)
                    .child(pages)
                    .child(next),
            )
    }
}
