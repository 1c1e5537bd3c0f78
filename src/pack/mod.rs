//! Pack module for deterministic ZIP archives.
//!
//! Archives are written byte-for-byte reproducibly: timestamps, version
//! fields and attributes are pinned, and entries keep insertion order.

pub mod writer;

pub use writer::{CompressionMethod, ZipBuilder};
