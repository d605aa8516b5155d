//! Command implementations for the survey cross-checker CLI
//!
//! Orchestrates one cross-check run: logging setup, configuration loading,
//! reference indexing (fatal on error), survey file indexing (errors isolated
//! per file), report assembly, and output. Logs go to stderr so the report on
//! stdout stays clean.

use std::time::Instant;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::app::models::FileIndex;
use crate::app::services::crosscheck::report::{build_report, CrosscheckReport};
use crate::app::services::crosscheck::stats::CrosscheckStats;
use crate::app::services::{indexing, survey_reader};
use crate::cli::args::{Args, CheckArgs, Commands, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner.
///
/// Reference file errors abort the run; survey file errors become inline
/// report entries so one bad input does not prevent reporting on the others.
pub fn run(args: Args) -> Result<CrosscheckStats> {
    let start_time = Instant::now();
    let Commands::Check(check) = args.get_command();

    setup_logging(&check);

    info!("Starting survey cross-check");
    debug!("Command line arguments: {:?}", check);

    check.validate()?;
    let config = load_configuration(&check)?;
    debug!("Loaded configuration: {:?}", config);

    // Reference path is fatal: no comparison is meaningful without it
    let reference_set = survey_reader::read_record_set(&check.reference)?;
    let reference_index = indexing::build_reference_index(&reference_set, &config.pipeline_column)?;
    info!(
        "Indexed {} reference pipelines from {}",
        reference_index.len(),
        check.reference.display()
    );

    // Survey files, with per-file error isolation
    let progress_bar = if check.show_progress() && check.inputs.len() > 1 {
        let pb = ProgressBar::new(check.inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Indexing survey files...");
        Some(pb)
    } else {
        None
    };

    let mut file_index = FileIndex::new();
    for (i, path) in check.inputs.iter().enumerate() {
        if let Some(pb) = &progress_bar {
            pb.set_position(i as u64);
            pb.set_message(format!("{}", path.display()));
        }

        match indexing::index_survey_file(path, &config.id_column) {
            Ok(file) => {
                debug!("Indexed {} as segment '{}'", path.display(), file.id);
                file_index.push_indexed(file);
            }
            Err(error) => {
                warn!("Could not index {}: {}", path.display(), error);
                file_index.push_failure(path.clone(), error.to_string());
            }
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let report = build_report(&file_index, &reference_index, &config);
    let stats = CrosscheckStats::from_report(&report, &reference_index, start_time.elapsed());

    emit_output(&check, &report, &stats)?;

    info!(
        "Cross-check complete: {} files, {} discrepancies",
        stats.files_supplied, stats.discrepancies_found
    );

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(check: &CheckArgs) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = check.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("survey_crosscheck={}", log_level)));

    // try_init so repeated calls in one process are harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration: file layer first, then CLI overrides
fn load_configuration(check: &CheckArgs) -> Result<Config> {
    let mut config = Config::load_layered(check.config_file.as_deref())?;

    if let Some(tolerance) = check.tolerance {
        config = config.with_tolerance(tolerance);
    }

    config.validate()?;
    Ok(config)
}

/// Emit the report and run summary in the requested format
fn emit_output(check: &CheckArgs, report: &CrosscheckReport, stats: &CrosscheckStats) -> Result<()> {
    let body = match check.output_format {
        OutputFormat::Human => report.render(),
        OutputFormat::Json => {
            let document = serde_json::json!({
                "report": report,
                "summary": stats,
            });
            let mut body = serde_json::to_string_pretty(&document)
                .map_err(|e| Error::configuration(format!("Failed to encode JSON output: {}", e)))?;
            body.push('\n');
            body
        }
    };

    match &check.output_file {
        Some(path) => {
            std::fs::write(path, &body).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", body),
    }

    if matches!(check.output_format, OutputFormat::Human) && !check.quiet {
        print_summary(stats);
    }

    Ok(())
}

/// Human-readable run summary, after the report body
fn print_summary(stats: &CrosscheckStats) {
    println!("Cross-check summary:");
    println!("  Reference pipelines: {}", stats.reference_pipelines);
    println!(
        "  Survey files checked: {} ({} matched, {} not in reference)",
        stats.files_supplied, stats.segments_matched, stats.segments_unmatched
    );

    if stats.discrepancies_found > 0 {
        println!(
            "  Discrepancies found: {}",
            stats.discrepancies_found.to_string().red().bold()
        );
    } else {
        println!("  {}", "No discrepancies found".green());
    }

    if stats.files_failed > 0 {
        println!(
            "  {}",
            format!("Files skipped due to errors: {}", stats.files_failed).yellow()
        );
    }

    println!(
        "  Completed in {:.3}s",
        stats.processing_time.as_secs_f64()
    );
}
