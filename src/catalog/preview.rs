//! Built-in preview set shown by the gallery and `trellis list`.

use serde::Deserialize;

use super::ComponentSpec;
use crate::error::Result;

const PREVIEWS: &str = include_str!("../../assets/previews.toml");

option_enum! {
    /// Gallery section a preview belongs to
    pub enum PreviewGroup {
        Primitives => "primitives",
        Typography => "typography",
        Navigation => "navigation",
        Composite => "composite",
        Layout => "layout",
    }
}

impl PreviewGroup {
    pub fn title(&self) -> &'static str {
        match self {
            PreviewGroup::Primitives => "Primitives",
            PreviewGroup::Typography => "Typography",
            PreviewGroup::Navigation => "Navigation",
            PreviewGroup::Composite => "Composite",
            PreviewGroup::Layout => "Layout",
        }
    }
}

/// A named example spec
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preview {
    pub name: String,
    pub group: PreviewGroup,
    #[serde(default)]
    pub description: String,
    pub spec: ComponentSpec,
}

impl Preview {
    /// Anchor id used by the gallery
    pub fn anchor(&self) -> String {
        format!("preview-{}", crate::helpers::slugify(&self.name))
    }
}

#[derive(Deserialize)]
struct PreviewFile {
    preview: Vec<Preview>,
}

/// Parse the embedded preview set, in file order
pub fn previews() -> Result<Vec<Preview>> {
    let file: PreviewFile = toml::from_str(PREVIEWS)?;
    Ok(file.preview)
}
