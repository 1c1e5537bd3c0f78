//! Export reporting.

use console::style;

use crate::error::Result;
use crate::export::ExportReport;
use crate::hash::ParsedName;

/// Print the composed names from a report, one per line.
pub fn print_listing(report: &ExportReport) {
    for member in &report.members {
        println!("  {} {}", style("+").dim(), member.name);
    }
    for artifact in &report.artifacts {
        println!("{}", artifact.name);
    }
}

/// Print statistics for an export.
pub fn print_report(report: &ExportReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export Statistics:").bold());
    println!("  Mode:     {}", report.mode);
    println!("  Written:  {}", report.artifacts.len());
    if !report.members.is_empty() {
        println!("  Packed:   {}", report.members.len());
    }
    if !report.skipped.is_empty() {
        println!("  Skipped:  {} (duplicates)", style(report.skipped.len()).yellow());
    }
    if report.has_failures() {
        println!("  Failed:   {}", style(report.failures.len()).red());
        for failure in &report.failures {
            println!(
                "    {} {}: {}",
                style(failure.kind).red(),
                failure.path.display(),
                failure.message
            );
        }
    }
    println!("  Bytes:    {}", report.total_bytes());
    println!("{}", style("═".repeat(50)).dim());
}

/// Print a report as pretty JSON.
pub fn print_json(report: &ExportReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print what a composed filename decodes to.
pub fn print_parsed_name(filename: &str, parsed: Option<&ParsedName>) {
    match parsed {
        Some(parsed) => {
            println!("{}", style(filename).bold());
            println!("  Reversed: {}", parsed.hash);
            println!("  MD5:      {}", parsed.hash.md5_hex());
            match parsed.category {
                Some(category) => println!("  Category: {}", category),
                None => println!("  Category: {}", style("unknown").yellow()),
            }
            println!("  Original: {}", parsed.decoded_original());
        }
        None => println!(
            "{} {}",
            style(filename).bold(),
            style("(not a cache filename)").yellow()
        ),
    }
}
