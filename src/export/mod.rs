//! Export module for writing cache-named artifacts.
//!
//! This module provides:
//! - Export options shared by both modes
//! - Single-file export
//! - ZIP-packed export
//! - Per-file outcome reporting

pub mod pack;
pub mod single;
pub mod state;

pub use pack::{build_pack, export_pack, PackedArchive};
pub use single::{describe_file, export_single, plan_single};
pub use state::{Artifact, ExportReport, Failure, FailureKind};

use crate::config::{ArchiveNaming, NameEncoding, Settings};
use crate::fs::naming::compose_filename_with;
use crate::hash::ReversedHash;
use crate::pack::CompressionMethod;
use crate::source::CacheCategory;

/// Choices that shape every name and archive produced by one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub category: CacheCategory,
    pub name_encoding: NameEncoding,
    pub compression: CompressionMethod,
    pub archive_naming: ArchiveNaming,
}

impl ExportOptions {
    /// Options taken from the persisted defaults.
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = &settings.defaults;
        Self {
            category: defaults.category,
            name_encoding: defaults.name_encoding,
            compression: defaults.compression,
            archive_naming: defaults.archive_naming,
        }
    }

    /// Compose the cache filename for `original` under these options.
    pub fn compose(&self, hash: &ReversedHash, original: &str) -> String {
        compose_filename_with(hash, self.category, original, self.name_encoding)
    }
}
