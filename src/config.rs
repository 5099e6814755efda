//! Configuration
//!
//! `trellis.toml` holds the gallery title, locale and the asset hrefs the
//! rendered pages link to. A missing or empty file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, get_or_create_data_dir, read_text, write_text};
use crate::i18n::Locale;

pub const CONFIG_FILE_NAME: &str = "trellis.toml";
const DEFAULT_TITLE: &str = "Trellis UI";

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            locale: None,
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            output_dir: None,
        }
    }
}

impl CatalogConfig {
    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };
        if !path.exists() {
            info!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = read_text(&path)?;
        Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_text(path, &self.to_toml()?)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    /// The configured locale; unset or unsupported values fall back to the
    /// system locale
    pub fn resolved_locale(&self) -> Locale {
        match self.locale.as_deref().map(str::trim) {
            None | Some("") => Locale::detect(),
            Some(tag) => tag.parse().unwrap_or_else(|e| {
                let fallback = Locale::detect();
                warn!(error = %e, fallback = %fallback, "Unsupported locale in config");
                fallback
            }),
        }
    }

    /// Where the gallery is written when no `--out` is given
    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(get_or_create_data_dir()?.join("gallery")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CatalogConfig::from_toml("  \n").expect("empty"), CatalogConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CatalogConfig::from_toml(r#"stylesheets = ["/app.css"]"#).expect("config");
        assert_eq!(config.title, "Trellis UI");
        assert_eq!(config.stylesheets, vec!["/app.css"]);
        assert!(config.scripts.is_empty());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(CatalogConfig::from_toml("theme = \"dark\"").is_err());
    }

    #[test]
    fn test_explicit_locale() {
        let config = CatalogConfig {
            locale: Some("zh-CN".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_locale(), Locale::ZhCN);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = CatalogConfig {
            title: "Docs".to_string(),
            output_dir: Some(PathBuf::from("site")),
            ..Default::default()
        };
        config.save(&path).expect("save");
        assert_eq!(CatalogConfig::load(Some(&path)).expect("load"), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = CatalogConfig::load(Some(&dir.path().join("absent.toml"))).expect("load");
        assert_eq!(config, CatalogConfig::default());
    }
}
