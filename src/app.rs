//! Application orchestration.
//!
//! Wires the pipeline together: validate roots, enumerate both trees,
//! fingerprint them on one shared engine, match, report, confirm,
//! remove, summarize. All interactive and process-level concerns live
//! here so the pipeline modules stay pure and testable.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::actions::{execute_removal, plan_removal, RemovalDecision, RemovalOutcome};
use crate::cli::{Cli, OutputFormat};
use crate::duplicates::{
    build_reference_index, match_targets, EngineConfig, FingerprintEngine, MatchOutcome,
};
use crate::error::ExitCode;
use crate::output::{json::JsonReport, text};
use crate::progress::{Progress, ProgressCallback};
use crate::scanner::{validate_root, FsEntry, HashMode, Walker};

/// Run the application with parsed CLI arguments.
///
/// # Errors
///
/// Returns an error for fatal preconditions (invalid roots, unbuildable
/// engine) and report-file I/O failures. Per-file problems never
/// propagate here.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    crate::logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    validate_root(&cli.reference)?;
    validate_root(&cli.target)?;

    let mode = if cli.fast {
        HashMode::Fast
    } else {
        HashMode::Full
    };

    let reference_entries: Vec<FsEntry> = Walker::new(&cli.reference).walk().collect();
    let target_entries: Vec<FsEntry> = Walker::new(&cli.target).walk().collect();
    log::info!(
        "Enumerated {} reference and {} target entries",
        reference_entries.len(),
        target_entries.len()
    );

    let mut config = EngineConfig::default()
        .with_threads(cli.threads)
        .with_mode(mode);
    // Progress bars would garble piped JSON output
    if !cli.quiet && cli.output == OutputFormat::Text {
        let progress: Arc<dyn ProgressCallback> = Arc::new(Progress::new(false));
        config = config.with_progress(progress);
    }
    let engine = FingerprintEngine::new(config)?;

    let (reference_fps, reference_stats) = engine.fingerprint_all("reference", &reference_entries);
    let (target_fps, target_stats) = engine.fingerprint_all("target", &target_entries);

    let index = build_reference_index(&reference_entries, &reference_fps);
    let outcome = match_targets(&index, &target_entries, &target_fps);

    let removal = if outcome.is_empty() {
        RemovalOutcome::default()
    } else {
        if !cli.no_report {
            let report = text::write_duplicates_report(&cli.report_dir, &outcome.pairs)
                .context("failed to write duplicate report")?;
            log::info!("Wrote duplicate report to {}", report.display());
        }

        let plan = plan_removal(&outcome.removal_candidates, &target_entries);
        let decision = decide_removal(&cli, &outcome)?;
        let removal = execute_removal(&plan, decision);

        if removal.executed && !cli.no_report {
            let report = text::write_removed_report(&cli.report_dir, &removal)
                .context("failed to write removal report")?;
            log::info!("Wrote removal report to {}", report.display());
        }
        removal
    };

    let exit_code = if outcome.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    };

    match cli.output {
        OutputFormat::Text => {
            if !cli.quiet {
                text::print_summary(
                    &cli.reference,
                    &cli.target,
                    &outcome.pairs,
                    &removal,
                    &reference_stats,
                    &target_stats,
                );
            }
        }
        OutputFormat::Json => {
            let report = JsonReport::new(
                &cli.reference,
                &cli.target,
                mode,
                &outcome.pairs,
                &removal,
                &reference_stats,
                &target_stats,
                exit_code,
            );
            println!("{}", report.to_json_pretty()?);
        }
    }

    Ok(exit_code)
}

/// Resolve the removal confirmation gate from flags or the prompt.
fn decide_removal(cli: &Cli, outcome: &MatchOutcome) -> anyhow::Result<RemovalDecision> {
    if cli.dry_run {
        log::info!("Dry run: skipping removal");
        return Ok(RemovalDecision::Declined);
    }
    if cli.yes {
        return Ok(RemovalDecision::Confirmed);
    }
    prompt_confirmation(outcome.removal_candidates.len(), &cli.target)
}

/// Ask on stdin whether to remove the matched duplicates.
///
/// The prompt goes to stderr so stdout stays a clean output channel
/// (one JSON document under `--output json`). Anything other than an
/// explicit yes, including EOF, declines.
fn prompt_confirmation(count: usize, target: &Path) -> anyhow::Result<RemovalDecision> {
    let stdin = io::stdin();
    confirm_removal(count, target, &mut stdin.lock(), &mut io::stderr())
}

fn confirm_removal(
    count: usize,
    target: &Path,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> anyhow::Result<RemovalDecision> {
    write!(
        prompt,
        "Remove {} duplicate file(s) from {}? [y/N] ",
        count,
        target.display()
    )?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Ok(RemovalDecision::Declined);
    }

    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(RemovalDecision::Confirmed),
        _ => Ok(RemovalDecision::Declined),
    }
}
