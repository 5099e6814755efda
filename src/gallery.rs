//! Gallery
//!
//! Renders the built-in previews into one static HTML page. Each preview is
//! shown live next to a copy button holding its markup.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{Preview, PreviewGroup, previews, schema_json};
use crate::components::composite::{Card, Clipboard};
use crate::components::layout::{Header, HeaderLink, Shell, Sidebar, SidebarItem};
use crate::components::typography::{Heading, HeadingLevel, Subheading, Text};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::markup::{Element, Node, RenderContext, RenderOnce, div, el};
use crate::option::OptionValue;
use crate::theme::TextSize;

const INDEX_FILE: &str = "index.html";
const SCHEMA_FILE: &str = "schema.json";

fn group_anchor(group: PreviewGroup) -> String {
    format!("group-{group}")
}

fn canvas(node: Node) -> Element {
    let canvas = div().class("preview-canvas flex flex-wrap items-center gap-4 p-6");

    // Full documents get their own browsing context.
    match node {
        Node::Element(element) if element.tag() == "html" => canvas.child(
            el("iframe")
                .class("h-64 w-full rounded-md border border-gray-200 bg-white")
                .attr("title", "preview")
                .attr("srcdoc", element.to_document_html()),
        ),
        node => canvas.child(node),
    }
}

fn preview_card(preview: &Preview, cx: &RenderContext) -> Result<Element> {
    let node = preview.spec.build(cx)?;
    let html = node.to_html();
    let anchor = preview.anchor();
    debug!(preview = %preview.name, bytes = html.len(), "rendered preview");

    let mut card = Card::new()
        .header(
            Heading::new(&preview.name)
                .level(HeadingLevel::H3)
                .id(&anchor)
                .render(cx),
        )
        .footer(
            Clipboard::new(format!("{anchor}-html"), html)
                .label(cx.t("gallery.copy-html"))
                .render(cx),
        );
    if !preview.description.is_empty() {
        card = card.child(
            Text::new(&preview.description)
                .size(TextSize::Sm)
                .render(cx),
        );
    }
    Ok(card.child(canvas(node)).render(cx))
}

/// Render the gallery page for `previews`
pub fn render_gallery(
    previews: &[Preview],
    config: &CatalogConfig,
    cx: &RenderContext,
) -> Result<String> {
    let groups: Vec<PreviewGroup> = PreviewGroup::ALL
        .iter()
        .copied()
        .filter(|group| previews.iter().any(|p| p.group == *group))
        .collect();

    let sidebar = Sidebar::new(
        groups
            .iter()
            .map(|group| SidebarItem::new(group.title(), format!("#{}", group_anchor(*group)))),
    )
    .title(cx.t("gallery.components"));

    let header = Header::new(&config.title)
        .link(HeaderLink::new(cx.t("gallery.title"), "#").active(true))
        .link(HeaderLink::new("Schema", SCHEMA_FILE));

    let mut shell = Shell::new(format!("{} | {}", cx.t("gallery.title"), config.title))
        .stylesheets(&config.stylesheets)
        .scripts(&config.scripts)
        .header(header.render(cx))
        .sidebar(sidebar.render(cx))
        .child(Heading::new(cx.t("gallery.title")).level(HeadingLevel::H1).render(cx))
        .child(Subheading::new(format!("{} · {}", config.title, cx.locale.display_name())).render(cx));

    for group in groups {
        let cards = previews
            .iter()
            .filter(|p| p.group == group)
            .map(|p| preview_card(p, cx))
            .collect::<Result<Vec<_>>>()?;

        shell = shell.child(
            el("section")
                .class("mt-10 space-y-6")
                .id(group_anchor(group))
                .child(Heading::new(group.title()).level(HeadingLevel::H2).render(cx))
                .children(cards),
        );
    }

    Ok(shell.render_html(cx))
}

/// Write `index.html` and `schema.json` into `dir`, returning the index path
pub fn write_gallery(dir: &Path, config: &CatalogConfig, cx: &RenderContext) -> Result<PathBuf> {
    let previews = previews()?;
    let index = dir.join(INDEX_FILE);

    crate::helpers::write_text(&index, &render_gallery(&previews, config, cx)?)?;
    crate::helpers::write_text(&dir.join(SCHEMA_FILE), &schema_json()?)?;

    info!(dir = ?dir, previews = previews.len(), locale = %cx.locale, "Gallery written");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_gallery_lists_every_preview() {
        let previews = previews().expect("previews");
        let html = render_gallery(&previews, &CatalogConfig::default(), &RenderContext::default())
            .expect("gallery");

        assert!(html.starts_with("<!DOCTYPE html>"));
        for preview in &previews {
            assert!(html.contains(&format!("id=\"{}\"", preview.anchor())));
        }
        for group in PreviewGroup::ALL {
            assert!(html.contains(&format!("href=\"#group-{group}\"")));
        }
    }

    #[test]
    fn test_documents_are_sandboxed_in_iframes() {
        let previews = previews().expect("previews");
        let html = render_gallery(&previews, &CatalogConfig::default(), &RenderContext::default())
            .expect("gallery");
        assert_eq!(html.matches("<html").count(), 1);
        assert!(html.contains("<iframe"));
    }

    #[test]
    fn test_gallery_uses_locale_and_config_assets() {
        let config = CatalogConfig {
            stylesheets: vec!["/tailwind.css".to_string()],
            ..Default::default()
        };
        let html = render_gallery(
            &previews().expect("previews"),
            &config,
            &RenderContext::new(Locale::ZhCN),
        )
        .expect("gallery");
        assert!(html.contains("lang=\"zh-CN\""));
        assert!(html.contains("href=\"/tailwind.css\""));
        assert!(html.contains("复制"));
    }

    #[test]
    fn test_write_gallery_outputs_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let index = write_gallery(dir.path(), &CatalogConfig::default(), &RenderContext::default())
            .expect("write");
        assert!(index.exists());
        let schema = std::fs::read_to_string(dir.path().join(SCHEMA_FILE)).expect("schema");
        assert!(schema.contains("tree-view"));
    }
}
