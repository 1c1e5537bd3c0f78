//! Cache Hash Generator - Trackmania-style cache filenames.
//!
//! The game's cache loader expects files named
//! `<reversed MD5>_<URL-encoded cache path><original filename>`, where the
//! reversed MD5 is the file's MD5 digest with its 16 bytes in reverse
//! order, rendered as uppercase hex.
//!
//! # Features
//!
//! - Reversed-MD5 derivation for bytes, readers and files
//! - Filename composition for the five fixed cache categories
//! - Single-file export with atomic writes
//! - Reproducible ZIP packing, with the archive named after its own bytes
//! - Decoding of existing cache filenames
//!
//! # Example
//!
//! ```
//! use cache_hash_generator::{compose_filename, derive_reversed_hash, CacheCategory};
//!
//! let hash = derive_reversed_hash(b"");
//! let name = compose_filename(&hash, CacheCategory::Images, "logo.png");
//! assert_eq!(
//!     name,
//!     "7E42F8EC980980E904B2008FD98C1DD4_Skins%5cMediaTracker%5cImages%5clogo.png"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod hash;
pub mod output;
pub mod pack;
pub mod source;

// Re-exports for convenience
pub use config::{OutputMode, Settings};
pub use error::{Error, Result};
pub use export::{build_pack, export_pack, export_single, ExportOptions, ExportReport};
pub use fs::{compose_filename, encode_cache_path};
pub use hash::{derive_reversed_hash, parse_composed_filename, ReversedHash};
pub use source::{CacheCategory, SourceFile};
