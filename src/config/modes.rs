//! Export mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How selected files are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One renamed copy per source file (default).
    #[default]
    Single,
    /// All files packed into one renamed ZIP archive.
    Pack,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Single => write!(f, "single"),
            OutputMode::Pack => write!(f, "pack"),
        }
    }
}

/// Treatment of the original filename inside a composed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameEncoding {
    /// Append the original filename unchanged (default).
    #[default]
    Verbatim,
    /// Percent-encode the whole filename when it has non-ASCII characters.
    PercentNonAscii,
}

impl fmt::Display for NameEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameEncoding::Verbatim => write!(f, "verbatim"),
            NameEncoding::PercentNonAscii => write!(f, "percent-non-ascii"),
        }
    }
}

/// How the packed archive itself is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveNaming {
    /// Cache-style name derived from the archive bytes (default).
    #[default]
    Hashed,
    /// The base name as given, with `.zip` appended.
    Plain,
}

impl fmt::Display for ArchiveNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveNaming::Hashed => write!(f, "hashed"),
            ArchiveNaming::Plain => write!(f, "plain"),
        }
    }
}
