//! File System Utilities
//!
//! Configuration directory management and file output.

use crate::error::{Error, ReadFileSnafu, Result, WriteFileSnafu};
use directories::ProjectDirs;
use snafu::ResultExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "trellis", "trellis-ui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/trellis-ui/` or `$XDG_CONFIG_HOME/trellis-ui/`
/// - **macOS**: `~/Library/Application Support/dev.trellis.trellis-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\trellis\trellis-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory, used as the default gallery output location
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/trellis-ui/`
/// - **macOS**: `~/Library/Application Support/dev.trellis.trellis-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\trellis\trellis-ui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Read a UTF-8 file, attaching the path to any error
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(ReadFileSnafu { path })
}

/// Write a file, creating parent directories as needed
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(WriteFileSnafu { path })?;
    }
    fs::write(path, contents).context(WriteFileSnafu { path })?;
    info!(path = ?path, bytes = contents.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_creates_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/index.html");
        write_text(&path, "<p>hi</p>").expect("write");
        assert_eq!(read_text(&path).expect("read"), "<p>hi</p>");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml");
        let err = read_text(&path).expect_err("missing file");
        assert!(matches!(err, Error::ReadFile { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
