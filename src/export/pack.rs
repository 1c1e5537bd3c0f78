//! ZIP-packed export: all files in one archive named after its own bytes.

use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::config::{ArchiveNaming, OutputMode};
use crate::error::Result;
use crate::export::single::plan_single;
use crate::export::state::{Artifact, ExportReport};
use crate::export::ExportOptions;
use crate::fs::atomic::write_atomic;
use crate::fs::paths::ensure_dir;
use crate::hash::{derive_reversed_hash, ReversedHash};
use crate::pack::ZipBuilder;
use crate::source::SourceFile;

/// A serialised archive and the name it will be written under.
#[derive(Debug, Clone)]
pub struct PackedArchive {
    pub bytes: Vec<u8>,

    /// Output filename for the archive.
    pub name: String,

    /// Reversed MD5 of `bytes`.
    pub hash: ReversedHash,

    /// Entries in archive order, each named like a single-file export.
    pub members: Vec<Artifact>,

    /// Sources dropped because an identical entry was already packed.
    pub skipped: Vec<PathBuf>,
}

/// Pack `sources` into an archive and name it.
///
/// `pack_file_name` is the user's archive name (already ending in `.zip`).
pub fn build_pack(
    sources: &[SourceFile],
    options: &ExportOptions,
    pack_file_name: &str,
) -> Result<PackedArchive> {
    let mut builder = ZipBuilder::new(options.compression);
    let mut members = Vec::with_capacity(sources.len());
    let mut skipped = Vec::new();

    for source in sources {
        let member = plan_single(source, options);

        // Same bytes under the same encoded name; one entry is enough.
        if builder.contains(&member.name) {
            tracing::warn!("Skipping duplicate entry {}", member.name);
            skipped.push(source.origin());
            continue;
        }

        builder.add_entry(&member.name, &source.bytes)?;
        members.push(member);
    }

    tracing::debug!("Serialising archive with {} entries", builder.len());
    let bytes = builder.finish()?;
    let hash = derive_reversed_hash(&bytes);
    let name = match options.archive_naming {
        ArchiveNaming::Hashed => options.compose(&hash, pack_file_name),
        ArchiveNaming::Plain => pack_file_name.to_string(),
    };

    Ok(PackedArchive {
        bytes,
        name,
        hash,
        members,
        skipped,
    })
}

/// Read `files`, pack them and write the archive to `out_dir`.
///
/// Unreadable files are recorded as failures and left out of the archive.
/// The archive is written in one atomic step; on failure nothing is left
/// in `out_dir`.
pub fn export_pack(
    files: &[PathBuf],
    options: &ExportOptions,
    out_dir: &Path,
    pack_file_name: &str,
    dry_run: bool,
    progress: &ProgressBar,
) -> Result<ExportReport> {
    let mut report = ExportReport::new(OutputMode::Pack, dry_run);
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        progress.set_message(path.display().to_string());
        match SourceFile::read(path) {
            Ok(source) => sources.push(source),
            Err(e) => report.fail(path, &e),
        }
        progress.inc(1);
    }

    if sources.is_empty() {
        tracing::warn!("No readable files to pack");
        return Ok(report);
    }

    let archive = build_pack(&sources, options, pack_file_name)?;
    tracing::info!(
        "Packed {} file(s) into {} ({} bytes, {})",
        archive.members.len(),
        archive.name,
        archive.bytes.len(),
        options.compression
    );

    let mut artifact = Artifact {
        source: None,
        name: archive.name.clone(),
        hash: archive.hash,
        size: archive.bytes.len() as u64,
        path: None,
    };

    report.members = archive.members;
    report.skipped = archive.skipped;

    if !dry_run {
        let written = ensure_dir(out_dir)
            .and_then(|_| write_atomic(out_dir, &archive.name, &archive.bytes));
        match written {
            Ok(path) => artifact.path = Some(path),
            Err(e) => {
                report.fail(out_dir.join(&archive.name), &e);
                return Ok(report);
            }
        }
    }

    report.artifacts.push(artifact);
    Ok(report)
}
