//! Export outcome tracking.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::OutputMode;
use crate::error::Error;
use crate::hash::ReversedHash;

/// A file produced (or, in a dry run, planned) by an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Source file the artifact was derived from; `None` for archives.
    pub source: Option<PathBuf>,

    /// Composed output filename.
    pub name: String,

    /// Reversed MD5 of the artifact bytes.
    pub hash: ReversedHash,

    /// Size of the artifact in bytes.
    pub size: u64,

    /// Where it was written; `None` when nothing was written.
    pub path: Option<PathBuf>,
}

/// Which step failed for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Read,
    Write,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Read => write!(f, "read"),
            FailureKind::Write => write!(f, "write"),
            FailureKind::Other => write!(f, "other"),
        }
    }
}

/// A per-file failure, kept so the rest of the export can continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    /// Record `error` against `path`.
    pub fn new(path: impl Into<PathBuf>, error: &Error) -> Self {
        let kind = match error {
            Error::Read { .. } => FailureKind::Read,
            Error::Write { .. } => FailureKind::Write,
            _ => FailureKind::Other,
        };
        Self {
            path: path.into(),
            kind,
            message: error.to_string(),
        }
    }
}

/// Outcome of one export invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    pub mode: OutputMode,

    /// Whether this was a dry run (nothing written).
    pub dry_run: bool,

    /// Files written to the output directory.
    pub artifacts: Vec<Artifact>,

    /// Archive entries (pack mode only).
    pub members: Vec<Artifact>,

    /// Inputs skipped as duplicates.
    pub skipped: Vec<PathBuf>,

    pub failures: Vec<Failure>,
}

impl ExportReport {
    /// Create an empty report for `mode`.
    pub fn new(mode: OutputMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            ..Default::default()
        }
    }

    /// Record a failure and log it.
    pub fn fail(&mut self, path: impl Into<PathBuf>, error: &Error) {
        let failure = Failure::new(path, error);
        tracing::warn!("{} failed for {}: {}", failure.kind, failure.path.display(), error);
        self.failures.push(failure);
    }

    /// Whether any file failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Whether at least one artifact was produced.
    pub fn has_artifacts(&self) -> bool {
        !self.artifacts.is_empty()
    }

    /// Total bytes across produced artifacts.
    pub fn total_bytes(&self) -> u64 {
        self.artifacts.iter().map(|a| a.size).sum()
    }
}
