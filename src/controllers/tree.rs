//! Expansion state for tree views.
//!
//! Folders are identified by their slash-joined path from the root
//! (`src/components`), the same path the tree view writes into
//! `data-tree-view-path-param`.

use std::collections::BTreeSet;

/// The set of expanded folder paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeExpansion {
    expanded: BTreeSet<String>,
}

impl TreeExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand(&mut self, path: impl Into<String>) {
        self.expanded.insert(path.into());
    }

    /// Collapse `path` and every folder beneath it
    pub fn collapse(&mut self, path: &str) {
        let prefix = format!("{path}/");
        self.expanded
            .retain(|p| p != path && !p.starts_with(&prefix));
    }

    /// Flip `path`, returning whether it is now expanded
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.is_expanded(path) {
            self.collapse(path);
            false
        } else {
            self.expand(path);
            true
        }
    }

    pub fn expand_all<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.extend(paths.into_iter().map(Into::into));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// A node is visible when every ancestor folder is expanded
    pub fn is_visible(&self, path: &str) -> bool {
        let mut ancestor = path;
        while let Some((parent, _)) = ancestor.rsplit_once('/') {
            if !self.is_expanded(parent) {
                return false;
            }
            ancestor = parent;
        }
        true
    }

    pub fn expanded_paths(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
