//! i18n - Internationalization Module
//!
//! Locale selection and lookups for the labels components render on their
//! own (loading text, close buttons, pagination, empty states).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::ZhCN];

    /// Locale tag understood by the translation tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Value for the document `lang` attribute
    pub fn html_lang(&self) -> &'static str {
        self.as_str()
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a system or user locale tag such as `en-US`, `zh_CN.UTF-8` or `zh`.
    ///
    /// Only the language part decides; unknown languages yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Detect the locale from the operating system, falling back to English
    pub fn detect() -> Self {
        let system = locale_config::Locale::current().to_string();
        system
            .split(',')
            .find_map(Self::from_tag)
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::InvalidOption {
            component: "config",
            field: "locale",
            value: s.to_string(),
            allowed: Locale::ALL.iter().map(Locale::as_str).collect(),
        })
    }
}

/// Translate a key for the given locale
pub fn t(locale: Locale, key: &str) -> String {
    rust_i18n::t!(key, locale = locale.as_str()).to_string()
}

/// Translate a key and substitute `%{name}` placeholders
pub fn t_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(t(locale, key), |text, (name, value)| {
            text.replace(&format!("%{{{name}}}"), value)
        })
}
