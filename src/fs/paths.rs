//! Output directory management.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Pick the output directory.
///
/// An explicit directory wins, then the remembered last directory if it
/// still exists, then the current directory.
pub fn resolve_output_dir(explicit: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    if let Some(dir) = settings.remembered_output_dir() {
        tracing::debug!("Using remembered output directory {}", dir.display());
        return dir.to_path_buf();
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(Error::write(
            path,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "output path exists and is not a directory",
            ),
        ));
    }

    std::fs::create_dir_all(path).map_err(|e| Error::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            last_output_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let resolved = resolve_output_dir(Some(Path::new("/explicit")), &settings);
        assert_eq!(resolved, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_remembered_dir_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            last_output_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        assert_eq!(resolve_output_dir(None, &settings), dir.path());
    }

    #[test]
    fn test_stale_remembered_dir_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            last_output_dir: Some(dir.path().join("gone")),
            ..Default::default()
        };

        assert_ne!(resolve_output_dir(None, &settings), dir.path().join("gone"));
    }

    #[test]
    fn test_ensure_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();

        let file = dir.path().join("file");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(ensure_dir(&file), Err(Error::Write { .. })));
    }
}
