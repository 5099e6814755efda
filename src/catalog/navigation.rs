//! Navigation component parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ComponentParams, choice, required, required_list, required_text};
use crate::components::navigation::{
    Breadcrumb, BreadcrumbItem, BreadcrumbSeparator, Dock, DockItem, DockPosition, Pagination,
};
use crate::components::primitives::IconName;
use crate::error::Result;
use crate::markup::{Element, RenderContext, RenderOnce};
use crate::option::parse_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BreadcrumbItemParams {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbParams {
    pub items: Option<Vec<BreadcrumbItemParams>>,
    #[schemars(with = "Option<BreadcrumbSeparator>")]
    pub separator: Option<String>,
}

impl ComponentParams for BreadcrumbParams {
    const NAME: &'static str = "breadcrumb";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let items = required_list(component, "items", &self.items)?
            .iter()
            .map(|item| BreadcrumbItem {
                label: item.label.clone(),
                href: item.href.clone(),
            });

        Ok(Breadcrumb::new(items)
            .separator(choice(component, "separator", &self.separator)?)
            .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationParams {
    pub current: Option<usize>,
    pub total_pages: Option<usize>,
    pub base_url: Option<String>,
    pub total_items: Option<usize>,
    pub window: Option<usize>,
}

impl ComponentParams for PaginationParams {
    const NAME: &'static str = "pagination";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let mut pagination = Pagination::new(
            required(component, "current", self.current)?,
            required(component, "total_pages", self.total_pages)?,
        );
        pagination.validate()?;

        if let Some(base_url) = &self.base_url {
            pagination = pagination.base_url(base_url);
        }
        if let Some(total_items) = self.total_items {
            pagination = pagination.total_items(total_items);
        }
        if let Some(window) = self.window {
            pagination = pagination.window(window);
        }
        Ok(pagination.render(cx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DockItemParams {
    pub label: String,
    #[schemars(with = "IconName")]
    pub icon: String,
    pub href: String,
    #[serde(default)]
    pub hotkey: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct DockParams {
    pub id: Option<String>,
    pub items: Option<Vec<DockItemParams>>,
    #[schemars(with = "Option<DockPosition>")]
    pub position: Option<String>,
}

impl ComponentParams for DockParams {
    const NAME: &'static str = "dock";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let items = required_list(component, "items", &self.items)?
            .iter()
            .map(|item| {
                let icon = parse_option(component, "icon", &item.icon)?;
                let dock_item = DockItem::new(&item.label, icon, &item.href);
                Ok(match &item.hotkey {
                    Some(hotkey) => dock_item.hotkey(hotkey),
                    None => dock_item,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let dock = Dock::new(required_text(component, "id", &self.id)?, items)
            .position(choice(component, "position", &self.position)?);
        dock.hotkeys()?;
        Ok(dock.render(cx))
    }
}
