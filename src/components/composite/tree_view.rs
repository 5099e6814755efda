//! TreeView Component
//!
//! Nested folders and files rendered with the ARIA tree pattern. Folder
//! paths are built from slugged names joined by `/`.

use crate::components::primitives::{Icon, IconName, IconSize};
use crate::controllers::{Controller, ControllerBinding, TreeExpansion};
use ahash::AHashSet;

use crate::helpers::slugify;
use crate::markup::{Element, RenderContext, RenderOnce, a, el, span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Folder {
        name: String,
        children: Vec<TreeNode>,
        open: bool,
    },
    File {
        name: String,
        href: Option<String>,
    },
}

impl TreeNode {
    pub fn folder(name: impl Into<String>, children: impl IntoIterator<Item = TreeNode>) -> Self {
        TreeNode::Folder {
            name: name.into(),
            children: children.into_iter().collect(),
            open: false,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File {
            name: name.into(),
            href: None,
        }
    }

    pub fn link(name: impl Into<String>, href: impl Into<String>) -> Self {
        TreeNode::File {
            name: name.into(),
            href: Some(href.into()),
        }
    }

    /// Mark a folder as initially expanded; no effect on files
    pub fn expanded(mut self) -> Self {
        if let TreeNode::Folder { open, .. } = &mut self {
            *open = true;
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Folder { name, .. } | TreeNode::File { name, .. } => name,
        }
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        slugify(name)
    } else {
        format!("{parent}/{}", slugify(name))
    }
}

/// Paths of `nodes` under `parent`; sibling folders whose names slug alike
/// get a numeric suffix
fn sibling_paths(nodes: &[TreeNode], parent: &str) -> Vec<String> {
    let mut taken = AHashSet::with_capacity(nodes.len());
    nodes
        .iter()
        .map(|node| {
            let base = child_path(parent, node.name());
            if matches!(node, TreeNode::File { .. }) {
                return base;
            }
            let mut path = base.clone();
            let mut suffix = 2;
            while taken.contains(&path) {
                path = format!("{base}-{suffix}");
                suffix += 1;
            }
            taken.insert(path.clone());
            path
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct TreeView {
    id: String,
    nodes: Vec<TreeNode>,
}

impl TreeView {
    pub fn new(id: impl Into<String>, nodes: impl IntoIterator<Item = TreeNode>) -> Self {
        Self {
            id: id.into(),
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Initial expansion from the folders flagged open
    pub fn expansion(&self) -> TreeExpansion {
        let mut expansion = TreeExpansion::new();
        collect_open(&self.nodes, "", &mut expansion);
        expansion
    }
}

fn collect_open(nodes: &[TreeNode], parent: &str, expansion: &mut TreeExpansion) {
    for (node, path) in nodes.iter().zip(sibling_paths(nodes, parent)) {
        if let TreeNode::Folder { children, open, .. } = node {
            if *open {
                expansion.expand(path.clone());
            }
            collect_open(children, &path, expansion);
        }
    }
}

fn render_nodes(
    cx: &RenderContext,
    nodes: Vec<TreeNode>,
    parent: &str,
    expansion: &TreeExpansion,
) -> Vec<Element> {
    let paths = sibling_paths(&nodes, parent);
    nodes
        .into_iter()
        .zip(paths)
        .map(|(node, path)| render_node(cx, node, path, expansion))
        .collect()
}

fn render_node(cx: &RenderContext, node: TreeNode, path: String, expansion: &TreeExpansion) -> Element {
    match node {
        TreeNode::File { name, href } => {
            let label = match href {
                Some(href) => a()
                    .class("hover:text-indigo-600")
                    .attr("href", href)
                    .text(name),
                None => span().text(name),
            };
            el("li")
                .class("flex items-center gap-1.5 py-0.5 pl-5 text-sm text-gray-700")
                .attr("role", "treeitem")
                .child(Icon::new(IconName::File).size(IconSize::Sm).class("text-gray-400").render(cx))
                .child(label)
        }
        TreeNode::Folder { name, children, .. } => {
            // Ancestors hide their own group; the folder keeps its own flag.
            let expanded = expansion.is_expanded(&path);

            let toggle = el("button")
                .class("flex items-center gap-1.5 py-0.5 text-sm font-medium text-gray-900")
                .attr("type", "button")
                .child(
                    Icon::new(IconName::ChevronRight)
                        .size(IconSize::Sm)
                        .class(if expanded { "rotate-90" } else { "rotate-0" })
                        .render(cx),
                )
                .child(Icon::new(IconName::Folder).size(IconSize::Sm).class("text-indigo-500").render(cx))
                .child(span().text(name));
            let toggle = Controller::TreeView.param(toggle, "path", path.clone());
            let toggle = Controller::TreeView.action(toggle, "click", "toggle");

            let group = el("ul")
                .class("pl-4")
                .attr("role", "group")
                .when(!expanded, |group| group.bool_attr("hidden"))
                .children(render_nodes(cx, children, &path, expansion));

            let item = el("li")
                .attr("role", "treeitem")
                .aria("expanded", expanded.to_string())
                .data("path", path)
                .child(toggle)
                .child(group);
            Controller::TreeView.target(item, "folder")
        }
    }
}

impl RenderOnce for TreeView {
    fn render(self, cx: &RenderContext) -> Element {
        let expansion = self.expansion();

        let root = el("ul")
            .class("tree-view space-y-0.5")
            .id(self.id)
            .attr("role", "tree")
            .aria("label", cx.t("tree.label"))
            .children(render_nodes(cx, self.nodes, "", &expansion));

        ControllerBinding::new(Controller::TreeView).apply(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> TreeView {
        TreeView::new(
            "files",
            [
                TreeNode::folder(
                    "src",
                    [
                        TreeNode::link("lib.rs", "/src/lib.rs"),
                        TreeNode::folder("markup", [TreeNode::file("element.rs")]),
                    ],
                )
                .expanded(),
                TreeNode::file("Cargo.toml"),
            ],
        )
    }

    #[test]
    fn test_tree_roles_and_controller() {
        let cx = RenderContext::default();
        let tree = tree().render(&cx);
        assert_eq!(tree.get_attr("role"), Some("tree"));
        assert_eq!(tree.get_attr("data-controller"), Some("tree-view"));
        assert_eq!(tree.get_attr("aria-label"), Some("File tree"));
        assert_eq!(tree.find_all(&|e| e.get_attr("role") == Some("treeitem")).len(), 5);
        assert_eq!(tree.find_all(&|e| e.get_attr("role") == Some("group")).len(), 2);
    }

    #[test]
    fn test_folders_report_expansion() {
        let cx = RenderContext::default();
        let tree = tree().render(&cx);
        let src = tree
            .find(&|e| e.get_attr("data-path") == Some("src"))
            .expect("src folder");
        assert_eq!(src.get_attr("aria-expanded"), Some("true"));

        let markup = tree
            .find(&|e| e.get_attr("data-path") == Some("src/markup"))
            .expect("nested folder");
        assert_eq!(markup.get_attr("aria-expanded"), Some("false"));
        let group = markup
            .find(&|e| e.get_attr("role") == Some("group"))
            .expect("group");
        assert!(group.has_attr("hidden"));

        let toggle = markup.find(&|e| e.tag() == "button").expect("toggle");
        assert_eq!(toggle.get_attr("data-tree-view-path-param"), Some("src/markup"));
        assert_eq!(toggle.get_attr("data-action"), Some("click->tree-view#toggle"));
    }

    #[test]
    fn test_open_folder_inside_closed_parent_keeps_its_flag() {
        let cx = RenderContext::default();
        let render = |open: bool| {
            let inner = TreeNode::folder("b", [TreeNode::file("c")]);
            let inner = if open { inner.expanded() } else { inner };
            TreeView::new("t", [TreeNode::folder("a", [inner])]).render(&cx)
        };

        let open = render(true);
        let closed = render(false);
        assert_ne!(open.to_html(), closed.to_html());

        let outer = open
            .find(&|e| e.get_attr("data-path") == Some("a"))
            .expect("outer folder");
        assert_eq!(outer.get_attr("aria-expanded"), Some("false"));
        let outer_group = outer
            .find(&|e| e.get_attr("role") == Some("group"))
            .expect("outer group");
        assert!(outer_group.has_attr("hidden"));

        let inner = open
            .find(&|e| e.get_attr("data-path") == Some("a/b"))
            .expect("inner folder");
        assert_eq!(inner.get_attr("aria-expanded"), Some("true"));
        let inner_group = inner
            .find(&|e| e.get_attr("role") == Some("group"))
            .expect("inner group");
        assert!(!inner_group.has_attr("hidden"));
    }

    #[test]
    fn test_sibling_folders_get_unique_paths() {
        let cx = RenderContext::default();
        let view = TreeView::new(
            "t",
            [
                TreeNode::folder("My Docs", [TreeNode::file("a")]).expanded(),
                TreeNode::folder("my-docs", [TreeNode::file("b")]),
            ],
        );
        let expansion = view.expansion();
        assert!(expansion.is_expanded("my-docs"));
        assert!(!expansion.is_expanded("my-docs-2"));

        let tree = view.render(&cx);
        let first = tree
            .find(&|e| e.get_attr("data-path") == Some("my-docs"))
            .expect("first folder");
        let second = tree
            .find(&|e| e.get_attr("data-path") == Some("my-docs-2"))
            .expect("second folder");
        assert_eq!(first.get_attr("aria-expanded"), Some("true"));
        assert_eq!(second.get_attr("aria-expanded"), Some("false"));
        let toggle = second.find(&|e| e.tag() == "button").expect("toggle");
        assert_eq!(toggle.get_attr("data-tree-view-path-param"), Some("my-docs-2"));
    }

    #[test]
    fn test_expansion_collects_open_paths() {
        let expansion = tree().expansion();
        assert!(expansion.is_expanded("src"));
        assert!(!expansion.is_expanded("src/markup"));
    }

    #[test]
    fn test_file_links() {
        let cx = RenderContext::default();
        let tree = tree().render(&cx);
        let link = tree.find(&|e| e.tag() == "a").expect("file link");
        assert_eq!(link.get_attr("href"), Some("/src/lib.rs"));
        assert_eq!(link.text_content(), "lib.rs");
    }
}
