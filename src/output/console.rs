//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the export settings about to be used.
pub fn print_export_summary(mode: &str, category: &str, cache_path: &str, output_dir: &str) {
    println!();
    println!("{}", style("Export:").bold());
    println!("  Mode:      {}", mode);
    println!("  Category:  {} ({})", category, cache_path);
    println!("  Directory: {}", output_dir);
    println!();
}
