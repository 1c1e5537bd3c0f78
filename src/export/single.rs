//! Single-file export: one renamed copy per source file.

use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::config::OutputMode;
use crate::error::{Error, Result};
use crate::export::state::{Artifact, ExportReport};
use crate::export::ExportOptions;
use crate::fs::atomic::write_atomic;
use crate::fs::paths::ensure_dir;
use crate::hash::{derive_reversed_hash, hash_file};
use crate::source::item::file_name_of;
use crate::source::SourceFile;

/// Hash and name a source file without writing anything.
pub fn plan_single(source: &SourceFile, options: &ExportOptions) -> Artifact {
    let hash = derive_reversed_hash(&source.bytes);
    Artifact {
        source: source.path.clone(),
        name: options.compose(&hash, &source.name),
        hash,
        size: source.bytes.len() as u64,
        path: None,
    }
}

/// Hash and name a file on disk by streaming it.
pub fn describe_file(path: &Path, options: &ExportOptions) -> Result<Artifact> {
    let original = file_name_of(path)?;
    let hash = hash_file(path)?;
    let size = std::fs::metadata(path)
        .map_err(|e| Error::read(path, e))?
        .len();

    Ok(Artifact {
        source: Some(path.to_path_buf()),
        name: options.compose(&hash, original),
        hash,
        size,
        path: None,
    })
}

/// Export each file under its composed name in `out_dir`.
///
/// Files are handled independently: a read or write failure is recorded in
/// the report and the remaining files are still processed.
pub fn export_single(
    files: &[PathBuf],
    options: &ExportOptions,
    out_dir: &Path,
    dry_run: bool,
    progress: &ProgressBar,
) -> Result<ExportReport> {
    let mut report = ExportReport::new(OutputMode::Single, dry_run);

    if !dry_run {
        if let Err(e) = ensure_dir(out_dir) {
            // Every file would fail the same write.
            for path in files {
                report.fail(path, &e);
                progress.inc(1);
            }
            return Ok(report);
        }
    }

    tracing::info!(
        "Exporting {} file(s) as {} to {}",
        files.len(),
        options.category,
        out_dir.display()
    );

    for path in files {
        progress.set_message(path.display().to_string());

        let outcome = if dry_run {
            describe_file(path, options)
        } else {
            export_one(path, options, out_dir)
        };

        match outcome {
            Ok(artifact) => {
                tracing::debug!("{} -> {}", path.display(), artifact.name);
                report.artifacts.push(artifact);
            }
            Err(e) => report.fail(path, &e),
        }

        progress.inc(1);
    }

    Ok(report)
}

fn export_one(path: &Path, options: &ExportOptions, out_dir: &Path) -> Result<Artifact> {
    let source = SourceFile::read(path)?;
    let mut artifact = plan_single(&source, options);
    artifact.path = Some(write_atomic(out_dir, &artifact.name, &source.bytes)?);
    Ok(artifact)
}
