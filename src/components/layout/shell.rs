//! Shell Component
//!
//! The full HTML document: head with stylesheets and scripts, then an
//! optional header, an optional sidebar and the main content area.

use crate::markup::{Element, IntoNode, Node, RenderContext, RenderOnce, div, el, raw};

/// Rules the client behaviors rely on regardless of the stylesheet in use
const BASE_STYLE: &str = "[hidden]{display:none!important}\
@keyframes marquee{from{transform:translateX(0)}to{transform:translateX(-50%)}}\
.animate-marquee{animation:marquee var(--marquee-duration,30s) linear infinite}";

#[derive(Debug, Clone)]
pub struct Shell {
    title: String,
    lang: Option<String>,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
    header: Option<Node>,
    sidebar: Option<Node>,
    main: Vec<Node>,
}

impl Shell {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: None,
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            header: None,
            sidebar: None,
            main: Vec::new(),
        }
    }

    /// Document language (defaults to the render locale)
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn stylesheets<I, S>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stylesheets.extend(hrefs.into_iter().map(Into::into));
        self
    }

    pub fn script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }

    pub fn scripts<I, S>(mut self, srcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts.extend(srcs.into_iter().map(Into::into));
        self
    }

    pub fn header(mut self, header: impl IntoNode) -> Self {
        self.header = Some(header.into_node());
        self
    }

    pub fn sidebar(mut self, sidebar: impl IntoNode) -> Self {
        self.sidebar = Some(sidebar.into_node());
        self
    }

    /// Add a child to the main content area
    pub fn child(mut self, child: impl IntoNode) -> Self {
        self.main.push(child.into_node());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoNode,
    {
        self.main.extend(children.into_iter().map(IntoNode::into_node));
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, cx: &RenderContext) -> Element {
        let lang = self
            .lang
            .unwrap_or_else(|| cx.locale.html_lang().to_string());

        let head = el("head")
            .child(el("meta").attr("charset", "utf-8"))
            .child(
                el("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(el("title").text(self.title))
            .child(el("style").child(raw(BASE_STYLE)))
            .children(
                self.stylesheets
                    .into_iter()
                    .map(|href| el("link").attr("rel", "stylesheet").attr("href", href)),
            )
            .children(
                self.scripts
                    .into_iter()
                    .map(|src| el("script").attr("src", src).bool_attr("defer")),
            );

        let content = div()
            .class("flex flex-1")
            .when_some(self.sidebar, |content, sidebar| content.child(sidebar))
            .child(
                el("main")
                    .class("flex-1 px-4 py-8 sm:px-6 lg:px-8")
                    .children(self.main),
            );

        let body = el("body")
            .class("flex min-h-full flex-col bg-gray-50 text-gray-900 antialiased")
            .when_some(self.header, |body, header| body.child(header))
            .child(content);

        el("html")
            .class("h-full")
            .attr("lang", lang)
            .child(head)
            .child(body)
    }

    fn render_html(self, cx: &RenderContext) -> String {
        self.render(cx).to_document_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::markup::text;

    #[test]
    fn test_document_structure() {
        let cx = RenderContext::default();
        let html = Shell::new("Dashboard")
            .stylesheet("/app.css")
            .script("/app.js")
            .child(text("Hello"))
            .render_html(&cx);
        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("<title>Dashboard</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/app.css">"#));
        assert!(html.contains(r#"<script src="/app.js" defer></script>"#));
        assert!(html.contains("[hidden]{display:none!important}"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_lang_follows_locale_unless_set() {
        let zh = Shell::new("T").render(&RenderContext::new(Locale::ZhCN));
        assert_eq!(zh.get_attr("lang"), Some("zh-CN"));

        let fixed = Shell::new("T").lang("fr").render(&RenderContext::new(Locale::ZhCN));
        assert_eq!(fixed.get_attr("lang"), Some("fr"));
    }

    #[test]
    fn test_optional_regions() {
        let cx = RenderContext::default();
        let bare = Shell::new("T").render(&cx);
        assert!(bare.find(&|e| e.tag() == "header").is_none());
        assert!(bare.find(&|e| e.tag() == "aside").is_none());
        assert!(bare.find(&|e| e.tag() == "main").is_some());

        let full = Shell::new("T")
            .header(el("header").text("Top"))
            .sidebar(el("aside").text("Side"))
            .render(&cx);
        assert!(full.find(&|e| e.tag() == "header").is_some());
        assert!(full.find(&|e| e.tag() == "aside").is_some());
    }
}
