//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Export reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_error, print_export_summary, print_info, print_success, print_warning,
};
pub use progress::create_item_bar;
pub use stats::{print_json, print_listing, print_parsed_name, print_report};
