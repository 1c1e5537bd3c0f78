//! Scoped artifact writes.
//!
//! Bytes go to a temporary file inside the target directory which is then
//! renamed over the final name, so a failed write never leaves a partial
//! artifact behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Write `bytes` to `dir/name` atomically and return the final path.
pub fn write_atomic(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let target = dir.join(name);

    // Dropping the temp file on any error path removes it.
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::write(&target, e))?;
    temp.write_all(bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| Error::write(&target, e))?;

    temp.persist(&target)
        .map_err(|e| Error::write(&target, e.error))?;

    tracing::debug!("Wrote {} ({} bytes)", target.display(), bytes.len());

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_atomic(dir.path(), "out.bin", b"payload").unwrap();

        assert_eq!(path, dir.path().join("out.bin"));
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("out.bin"), b"old").unwrap();

        write_atomic(dir.path(), "out.bin", b"new").unwrap();
        assert_eq!(std::fs::read(dir.path().join("out.bin")).unwrap(), b"new");
    }

    #[test]
    fn test_write_atomic_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        match write_atomic(&missing, "out.bin", b"x") {
            Err(Error::Write { path, .. }) => assert_eq!(path, missing.join("out.bin")),
            other => panic!("expected write error, got {:?}", other),
        }
    }
}
