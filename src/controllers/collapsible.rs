//! Open/closed state for collapsible regions.

/// State of one collapsible region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapsibleState {
    open: bool,
}

impl CollapsibleState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the state, returning the new one
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// `aria-expanded` value for the trigger
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Whether the content region carries the `hidden` attribute
    pub fn content_hidden(&self) -> bool {
        !self.open
    }

    /// Rotation class for the disclosure chevron
    pub fn chevron_class(&self) -> &'static str {
        if self.open { "rotate-90" } else { "rotate-0" }
    }
}
