//! Validation of export requests before any file is touched.

use std::path::PathBuf;

use crate::config::modes::OutputMode;
use crate::error::{Error, Result};
use crate::fs::naming::pack_file_name;

/// Validate the list of input files.
pub fn validate_inputs(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(Error::NoInputs);
    }

    if let Some(dir) = files.iter().find(|f| f.is_dir()) {
        return Err(Error::ConfigValidation {
            field: "files".to_string(),
            message: format!("'{}' is a directory, not a file", dir.display()),
        });
    }

    Ok(())
}

/// Validate mode-specific options.
///
/// In pack mode, returns the archive file name (`.zip` appended) built
/// from the required base name.
pub fn validate_export(mode: OutputMode, pack_name: Option<&str>) -> Result<Option<String>> {
    match (mode, pack_name) {
        (OutputMode::Single, None) => Ok(None),
        (OutputMode::Single, Some(_)) => {
            tracing::warn!("Archive name ignored in single mode");
            Ok(None)
        }
        (OutputMode::Pack, None) => Err(Error::ConfigValidation {
            field: "pack_name".to_string(),
            message: "An archive base name is required in pack mode (--pack-name)".to_string(),
        }),
        (OutputMode::Pack, Some(name)) => pack_file_name(name).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_inputs() {
        assert!(matches!(validate_inputs(&[]), Err(Error::NoInputs)));
        assert!(validate_inputs(&[PathBuf::from("missing.png")]).is_ok());

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_inputs(&[dir.path().to_path_buf()]),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_export_single() {
        assert_eq!(validate_export(OutputMode::Single, None).unwrap(), None);
        assert_eq!(
            validate_export(OutputMode::Single, Some("Pack")).unwrap(),
            None
        );
    }

    #[test]
    fn test_validate_export_pack() {
        assert_eq!(
            validate_export(OutputMode::Pack, Some("MyPack")).unwrap(),
            Some("MyPack.zip".to_string())
        );
        assert!(matches!(
            validate_export(OutputMode::Pack, None),
            Err(Error::ConfigValidation { .. })
        ));
        assert!(matches!(
            validate_export(OutputMode::Pack, Some("../x")),
            Err(Error::InvalidFilename(_))
        ));
    }
}
