//! Configuration module for the cache-hash-generator.
//!
//! This module handles:
//! - Loading and saving persisted settings
//! - Export mode definitions
//! - Settings validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{DefaultsConfig, Settings};
pub use modes::{ArchiveNaming, NameEncoding, OutputMode};
pub use validation::{validate_export, validate_inputs};
