//! Element Tree
//!
//! Markup nodes and the fluent element builder.

use hashlink::LinkedHashMap;

use crate::helpers::escape_html;

/// Tags serialised without a closing tag
/// Doctype emitted before every `<html>` root
pub const DOCTYPE: &str = "<!DOCTYPE html>";

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A tag with classes, attributes and children
    Element(Element),
    /// Text content, escaped on output
    Text(String),
    /// Trusted markup emitted verbatim
    Raw(String),
}

impl Node {
    /// Serialise the node to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(raw) => out.push_str(raw),
        }
    }

    /// Get the element if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Conversion into a markup node
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for Element {
    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl IntoNode for String {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Node {
        Node::Text(self.to_string())
    }
}

impl IntoNode for &String {
    fn into_node(self) -> Node {
        Node::Text(self.clone())
    }
}

/// A markup element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: LinkedHashMap<String, Option<String>>,
    children: Vec<Node>,
}

/// Create an element with the given tag
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attrs: LinkedHashMap::new(),
        children: Vec::new(),
    }
}

pub fn div() -> Element {
    el("div")
}

pub fn span() -> Element {
    el("span")
}

pub fn a() -> Element {
    el("a")
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Create a raw node; the caller guarantees the content is well-formed markup
pub fn raw(content: impl Into<String>) -> Node {
    Node::Raw(content.into())
}

impl Element {
    // ==================== Builders ====================

    /// Add one or more whitespace-separated class tokens
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        for token in classes.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == token) {
                self.classes.push(token.to_string());
            }
        }
        self
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), Some(value.into()));
        self
    }

    /// Set a boolean attribute (rendered without a value)
    pub fn bool_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), None);
        self
    }

    /// Set a `data-*` attribute
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{name}"), value)
    }

    /// Set an `aria-*` attribute
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{name}"), value)
    }

    /// Append a child node
    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.children.push(child.into_node());
        self
    }

    /// Append several children
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        self.children
            .extend(children.into_iter().map(IntoNode::into_node));
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Apply `f` only when `condition` holds
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }

    /// Apply `f` with the value when `option` is `Some`
    pub fn when_some<T>(self, option: Option<T>, f: impl FnOnce(Self, T) -> Self) -> Self {
        match option {
            Some(value) => f(self, value),
            None => self,
        }
    }

    // ==================== Accessors ====================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get an attribute; boolean attributes yield `Some("")`
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .get(name)
            .map(|value| value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Depth-first search for the first descendant (or self) matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|child| child.find(predicate))
    }

    /// Collect every descendant (and self) matching `predicate`, in document order
    pub fn find_all(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children.iter().filter_map(Node::as_element) {
            child.collect(predicate, found);
        }
    }

    /// Concatenated text content of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(element) => out.push_str(&element.text_content()),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
        out
    }

    // ==================== Output ====================

    /// Serialise the element to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Like [`Element::to_html`], but an `<html>` root is preceded by the
    /// doctype so browsers render it in standards mode
    pub fn to_document_html(&self) -> String {
        if self.tag != "html" {
            return self.to_html();
        }
        let mut out = String::from(DOCTYPE);
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_html(&self.classes.join(" ")));
            out.push('"');
        }

        for (name, value) in self.attrs.iter() {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_classes_before_attributes() {
        let html = div()
            .attr("title", "Hi")
            .class("flex gap-2")
            .text("Body")
            .to_html();
        assert_eq!(html, r#"<div class="flex gap-2" title="Hi">Body</div>"#);
    }

    #[test]
    fn test_class_dedupes_tokens() {
        let element = span().class("a b").class("b  c");
        assert_eq!(element.classes(), ["a", "b", "c"]);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let html = a()
            .attr("href", "/search?q=a&b")
            .text("<script>")
            .to_html();
        assert_eq!(
            html,
            r#"<a href="/search?q=a&amp;b">&lt;script&gt;</a>"#
        );
    }

    #[test]
    fn test_raw_is_emitted_verbatim() {
        let html = el("svg").child(raw("<path d=\"M0 0\"/>")).to_html();
        assert_eq!(html, r#"<svg><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_document_html_prefixes_doctype_only_for_html_root() {
        let page = el("html").child(el("body").text("Hi"));
        assert_eq!(page.to_document_html(), "<!DOCTYPE html><html><body>Hi</body></html>");
        assert_eq!(div().text("Hi").to_document_html(), "<div>Hi</div>");
    }

    #[test]
    fn test_void_tags_have_no_closing_tag() {
        let html = el("input").attr("type", "text").bool_attr("disabled").to_html();
        assert_eq!(html, r#"<input type="text" disabled>"#);
    }

    #[test]
    fn test_when_and_when_some() {
        let element = div()
            .when(false, |el| el.class("hidden"))
            .when(true, |el| el.class("shown"))
            .when_some(Some("main"), |el, id| el.id(id))
            .when_some(None::<&str>, |el, title| el.attr("title", title));
        assert!(element.has_class("shown"));
        assert!(!element.has_class("hidden"));
        assert_eq!(element.get_attr("id"), Some("main"));
        assert!(!element.has_attr("title"));
    }

    #[test]
    fn test_find_and_text_content() {
        let element = div()
            .child(span().class("label").text("Hello "))
            .child(el("strong").text("world"));
        assert_eq!(element.text_content(), "Hello world");
        let strong = element.find(&|e| e.tag() == "strong").expect("strong");
        assert_eq!(strong.text_content(), "world");
        assert_eq!(element.find_all(&|e| e.tag() != "div").len(), 2);
    }
}
