//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ArchiveNaming, NameEncoding, OutputMode};
use crate::export::ExportOptions;
use crate::pack::CompressionMethod;
use crate::source::CacheCategory;

/// Trackmania cache filename generator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "cache-hash",
    version,
    about = "Generate reversed-MD5 cache filenames for Trackmania skins and media",
    long_about = "Copies files under their Trackmania cache names \
                  (<reversed MD5>_<encoded cache path><filename>), \
                  or packs them into a ZIP archive named the same way."
)]
pub struct Args {
    /// Files to process.
    pub files: Vec<PathBuf>,

    /// Cache category the files belong to.
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Output mode.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Output directory (defaults to the last one used).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Archive base name for pack mode (".zip" is appended if missing).
    #[arg(short = 'n', long)]
    pub pack_name: Option<String>,

    /// Store archive entries without compression.
    #[arg(long)]
    pub store: bool,

    /// Percent-encode original filenames that contain non-ASCII characters.
    #[arg(long)]
    pub encode_non_ascii: bool,

    /// Name the archive "<pack-name>.zip" instead of hashing it.
    #[arg(long)]
    pub plain_archive_name: bool,

    /// Print the names that would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Decode existing cache filenames instead of exporting.
    #[arg(long, conflicts_with_all = ["dry_run", "json"])]
    pub inspect: bool,

    /// Print the export report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to the settings file.
    #[arg(long, env = "CACHE_HASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Hide progress and summary output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI cache category argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// Skins\MediaTracker\Images\
    Images,
    /// Skins\MediaTracker\Sounds\
    Sounds,
    /// Skins\ChallengeMusics\
    Music,
    /// Skins\Stadium\Mod\
    Mods,
    /// Skins\Any\Advertisement\
    #[value(alias = "advertisement")]
    Advert,
}

impl From<CategoryArg> for CacheCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Images => CacheCategory::Images,
            CategoryArg::Sounds => CacheCategory::Sounds,
            CategoryArg::Music => CacheCategory::Music,
            CategoryArg::Mods => CacheCategory::Mods,
            CategoryArg::Advert => CacheCategory::Advert,
        }
    }
}

/// CLI output mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Write each file under its cache name.
    Single,
    /// Pack all files into one ZIP archive.
    Pack,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => OutputMode::Single,
            ModeArg::Pack => OutputMode::Pack,
        }
    }
}

impl Args {
    /// Output mode: CLI argument, or the default when absent.
    pub fn output_mode(&self, default: OutputMode) -> OutputMode {
        self.mode.map(Into::into).unwrap_or(default)
    }

    /// Merge CLI arguments into export options, overriding where specified.
    pub fn merge_into_options(&self, options: &mut ExportOptions) {
        if let Some(category) = self.category {
            options.category = category.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.store {
            options.compression = CompressionMethod::Store;
        }

        if self.encode_non_ascii {
            options.name_encoding = NameEncoding::PercentNonAscii;
        }

        if self.plain_archive_name {
            options.archive_naming = ArchiveNaming::Plain;
        }
    }
}
