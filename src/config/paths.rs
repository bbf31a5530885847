//! Cross-platform resource path resolution
//!
//! Resolves the primary and fallback directories configuration resources are
//! read from.
//! - Linux/macOS: XDG Base Directory specification (~/.config, ~/.local/share)
//! - Windows: Known Folder API (AppData\Roaming, AppData\Local)

use std::path::{Path, PathBuf};

const APP_DIR: &str = "appdeck";

/// Primary resource directory.
///
/// Checks the APPDECK_CONFIG_DIR environment variable first, then falls back
/// to the platform configuration directory joined with "appdeck".
pub fn config_dir() -> PathBuf {
    std::env::var("APPDECK_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| platform_dir(DirKind::Config))
}

/// Fallback resource directory for shared, installed defaults.
///
/// Checks the APPDECK_DATA_DIR environment variable first, then falls back
/// to the platform data directory joined with "appdeck".
pub fn data_dir() -> PathBuf {
    std::env::var("APPDECK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| platform_dir(DirKind::Data))
}

#[derive(Clone, Copy)]
enum DirKind {
    Config,
    Data,
}

fn platform_dir(kind: DirKind) -> PathBuf {
    use directories::BaseDirs;

    let relative = match kind {
        DirKind::Config => Path::new(".config").to_path_buf(),
        DirKind::Data => Path::new(".local").join("share"),
    };

    BaseDirs::new()
        .map(|dirs| match kind {
            DirKind::Config => dirs.config_dir().to_path_buf(),
            DirKind::Data => dirs.data_dir().to_path_buf(),
        })
        .unwrap_or_else(|| PathBuf::from(".").join(relative))
        .join(APP_DIR)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_end_with_app_name() {
        // Skip when the env overrides are set in the test environment
        if std::env::var("APPDECK_CONFIG_DIR").is_err() {
            assert!(config_dir().to_string_lossy().contains(APP_DIR));
        }
        if std::env::var("APPDECK_DATA_DIR").is_err() {
            assert!(data_dir().to_string_lossy().contains(APP_DIR));
        }
    }

    #[test]
    fn test_ensure_dir() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
