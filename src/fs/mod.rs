//! Filesystem module.
//!
//! Provides:
//! - Cache filename composition
//! - Output directory management
//! - Atomic artifact writes

pub mod atomic;
pub mod naming;
pub mod paths;

pub use atomic::write_atomic;
pub use naming::{
    compose_filename, compose_filename_with, encode_cache_path, pack_file_name,
    sanitize_pack_name,
};
pub use paths::{ensure_dir, resolve_output_dir};
