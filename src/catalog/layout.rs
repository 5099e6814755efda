//! Layout component parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ComponentParams, ComponentSpec, build_children, required_list, required_text};
use crate::components::layout::{Header, HeaderLink, Shell, Sidebar, SidebarItem};
use crate::components::primitives::IconName;
use crate::error::Result;
use crate::markup::{Element, RenderContext, RenderOnce};
use crate::option::parse_option;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ShellParams {
    pub title: Option<String>,
    pub lang: Option<String>,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    pub header: Option<Box<ComponentSpec>>,
    pub sidebar: Option<Box<ComponentSpec>>,
    pub main: Vec<ComponentSpec>,
}

impl ComponentParams for ShellParams {
    const NAME: &'static str = "shell";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let mut shell = Shell::new(required_text(Self::NAME, "title", &self.title)?)
            .stylesheets(&self.stylesheets)
            .scripts(&self.scripts)
            .children(build_children(&self.main, cx)?);

        if let Some(lang) = &self.lang {
            shell = shell.lang(lang);
        }
        if let Some(header) = &self.header {
            shell = shell.header(header.build(cx)?);
        }
        if let Some(sidebar) = &self.sidebar {
            shell = shell.sidebar(sidebar.build(cx)?);
        }
        Ok(shell.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LinkParams {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderParams {
    pub brand: Option<String>,
    pub brand_href: Option<String>,
    pub links: Vec<LinkParams>,
    pub actions: Vec<ComponentSpec>,
}

impl ComponentParams for HeaderParams {
    const NAME: &'static str = "header";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let mut header = Header::new(required_text(Self::NAME, "brand", &self.brand)?).links(
            self.links
                .iter()
                .map(|link| HeaderLink::new(&link.label, &link.href).active(link.active)),
        );

        if let Some(href) = &self.brand_href {
            header = header.brand_href(href);
        }
        for action in build_children(&self.actions, cx)? {
            header = header.action(action);
        }
        Ok(header.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SidebarItemParams {
    pub label: String,
    pub href: String,
    #[serde(default)]
    #[schemars(with = "Option<IconName>")]
    pub icon: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarParams {
    pub title: Option<String>,
    pub items: Option<Vec<SidebarItemParams>>,
}

impl ComponentParams for SidebarParams {
    const NAME: &'static str = "sidebar";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let items = required_list(component, "items", &self.items)?
            .iter()
            .map(|item| {
                let sidebar_item = SidebarItem::new(&item.label, &item.href).active(item.active);
                Ok(match &item.icon {
                    Some(icon) => sidebar_item.icon(parse_option(component, "icon", icon)?),
                    None => sidebar_item,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let sidebar = Sidebar::new(items);
        let sidebar = match &self.title {
            Some(title) => sidebar.title(title),
            None => sidebar,
        };
        Ok(sidebar.render(cx))
    }
}
