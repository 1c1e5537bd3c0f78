//! Cache Hash Generator - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cache_hash_generator::{
    cli::Args,
    config::{validate_export, validate_inputs, OutputMode, Settings},
    error::{exit_codes, Error, Result},
    export::{export_pack, export_single, ExportOptions, ExportReport},
    fs::resolve_output_dir,
    hash::parse_composed_filename,
    output::{
        create_item_bar, print_error, print_export_summary, print_info, print_json,
        print_listing, print_parsed_name, print_report, print_success, print_warning,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.inspect {
        inspect(&args.files)?;
        return Ok(exit_codes::SUCCESS);
    }

    // Load settings
    let settings_path = args.config.clone().or_else(Settings::default_path);
    let mut settings = match &settings_path {
        Some(path) => Settings::load_or_default(path)?,
        None => {
            tracing::debug!("No config directory available, using default settings");
            Settings::default()
        }
    };

    // Merge CLI arguments over persisted defaults
    let mode = args.output_mode(settings.defaults.mode);
    let mut options = ExportOptions::from_settings(&settings);
    args.merge_into_options(&mut options);

    // Validate before touching any file
    validate_inputs(&args.files)?;
    let pack_file_name = validate_export(mode, args.pack_name.as_deref())?;

    let output_dir = resolve_output_dir(args.output.as_deref(), &settings);
    let chatty = !args.quiet && !args.json;

    if chatty {
        print_export_summary(
            &mode.to_string(),
            &options.category.to_string(),
            options.category.raw_path(),
            &output_dir.display().to_string(),
        );
    }

    let progress = create_item_bar(
        args.files.len() as u64,
        "Hashing",
        chatty && args.files.len() > 1,
    );

    let report = match (mode, pack_file_name) {
        (OutputMode::Pack, Some(pack_file_name)) => export_pack(
            &args.files,
            &options,
            &output_dir,
            &pack_file_name,
            args.dry_run,
            &progress,
        )?,
        _ => export_single(&args.files, &options, &output_dir, args.dry_run, &progress)?,
    };

    progress.finish_and_clear();

    report_outcome(&args, &report)?;

    // Remember the output directory for next time
    if !args.dry_run && report.has_artifacts() {
        settings.remember_output_dir(&output_dir);
        if let Some(path) = &settings_path {
            if let Err(e) = settings.save(path) {
                print_warning(&format!("Could not save settings: {}", e));
            }
        }
    }

    if report.has_failures() {
        return Ok(exit_codes::SOME_FILES_FAILED);
    }

    Ok(exit_codes::SUCCESS)
}

/// Print the report in the requested form.
fn report_outcome(args: &Args, report: &ExportReport) -> Result<()> {
    if args.json {
        return print_json(report);
    }

    if args.dry_run || !args.quiet {
        print_listing(report);
    }

    if args.quiet {
        return Ok(());
    }

    print_report(report);

    if report.dry_run {
        print_info("Dry run, nothing written");
    } else if report.has_artifacts() && !report.has_failures() {
        print_success("All files saved");
    } else if !report.has_artifacts() {
        print_warning("Nothing was written");
    }

    Ok(())
}

/// Decode each argument as a cache filename.
fn inspect(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(Error::NoInputs);
    }

    for file in files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        let parsed = parse_composed_filename(&name);
        print_parsed_name(&name, parsed.as_ref());
    }

    Ok(())
}
