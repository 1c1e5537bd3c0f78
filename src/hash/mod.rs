//! Hash module.
//!
//! Provides:
//! - Reversed-MD5 derivation over bytes, readers and files
//! - Decoding of existing cache filenames

pub mod parse;
pub mod reversed;

pub use parse::{parse_composed_filename, ParsedName};
pub use reversed::{derive_reversed_hash, hash_file, hash_reader, ReversedHash, DIGEST_LEN};
