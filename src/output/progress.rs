//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for item counts, hidden when `visible` is false.
pub fn create_item_bar(total: u64, message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    let template = format!(
        "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {{wide_msg}}",
        message
    );
    match ProgressStyle::default_bar().template(&template) {
        Ok(style) => bar.set_style(style.progress_chars("#>-")),
        Err(e) => tracing::debug!("Invalid progress template: {}", e),
    }
    bar
}
