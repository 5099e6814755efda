//! Error types for Trellis UI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A parameter value outside its fixed set of allowed values
    #[snafu(display(
        "Invalid {field} for {component}: {value:?} (expected one of: {})",
        allowed.join(", ")
    ))]
    InvalidOption {
        component: &'static str,
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A required parameter was not supplied
    #[snafu(display("Missing required parameter `{field}` for {component}"))]
    MissingParam {
        component: &'static str,
        field: &'static str,
    },

    /// A scalar parameter outside its accepted range
    #[snafu(display("Invalid {field} for {component}: {message}"))]
    InvalidParam {
        component: &'static str,
        field: &'static str,
        message: String,
    },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Reading a file failed
    #[snafu(display("Failed to read {}: {source}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing a file failed
    #[snafu(display("Failed to write {}: {source}", path.display()))]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error (directory creation, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_names_field_and_value() {
        let err = Error::InvalidOption {
            component: "badge",
            field: "tone",
            value: "sparkly".to_string(),
            allowed: vec!["neutral", "info"],
        };
        let message = err.to_string();
        assert!(message.contains("tone"));
        assert!(message.contains("badge"));
        assert!(message.contains("\"sparkly\""));
        assert!(message.contains("neutral, info"));
    }

    #[test]
    fn test_missing_param_message() {
        let err = Error::MissingParam {
            component: "button",
            field: "label",
        };
        assert_eq!(
            err.to_string(),
            "Missing required parameter `label` for button"
        );
    }
}
