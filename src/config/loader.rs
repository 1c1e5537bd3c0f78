//! Settings structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::config::modes::{ArchiveNaming, NameEncoding, OutputMode};
use crate::error::{Error, Result};
use crate::pack::CompressionMethod;
use crate::source::CacheCategory;

/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "settings.toml";

/// Persisted user settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the last export was written to.
    #[serde(default)]
    pub last_output_dir: Option<PathBuf>,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Defaults applied when the command line leaves a choice open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Cache category (images, sounds, music, mods, advert).
    #[serde(default)]
    pub category: CacheCategory,

    /// Output mode (single, pack).
    #[serde(default)]
    pub mode: OutputMode,

    /// Original filename treatment.
    #[serde(default)]
    pub name_encoding: NameEncoding,

    /// ZIP entry compression.
    #[serde(default)]
    pub compression: CompressionMethod,

    /// Archive naming scheme.
    #[serde(default)]
    pub archive_naming: ArchiveNaming,
}

impl Settings {
    /// Default settings file location for this user.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cache-hash-generator")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Settings file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save settings to a TOML file, creating its directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// The remembered output directory, if it still exists.
    pub fn remembered_output_dir(&self) -> Option<&Path> {
        self.last_output_dir.as_deref().filter(|dir| dir.is_dir())
    }

    /// Remember `dir` as the last output directory.
    pub fn remember_output_dir(&mut self, dir: &Path) {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        self.last_output_dir = Some(dir);
    }
}
