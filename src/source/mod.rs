//! Source module for input files and cache categories.

pub mod category;
pub mod item;

pub use category::CacheCategory;
pub use item::SourceFile;
