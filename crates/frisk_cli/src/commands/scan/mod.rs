//! Scan command - scans files for secrets.

mod output;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context as _;
use frisk_core::prelude::*;
use tokio::sync::mpsc;

use self::output::{ScanStats, write_output};
use crate::files::collect_files;
use crate::ui::{colors, create_file_progress, exit, print_command_header};
use crate::{CONFIG_FILENAME, OutputFormat, ScanArgs};

/// Executes the `frisk scan` command.
pub fn run(args: &ScanArgs) -> super::Result {
    let show_progress = should_show_progress(args);
    let start = Instant::now();

    if show_progress {
        print_command_header("scan");
    }

    let config_path = args.config.as_deref().unwrap_or(Path::new(CONFIG_FILENAME));
    let mut config = Config::load(config_path).context("loading config")?;
    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    let minimum_confidence = args.minimum_confidence.unwrap_or(config.minimum_confidence);
    let max_file_size = args.max_file_size.or(config.max_file_size);
    let files = collect_scan_files(args, &config, max_file_size);

    if files.is_empty() {
        print_no_files();
        return Ok(());
    }

    let orchestrator = ScanOrchestrator::from_config(&config).context("building scan pipeline")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating async runtime")?;
    let report = runtime.block_on(run_scan(&orchestrator, &files, show_progress));

    let total_findings = report.findings.len();
    let findings: Vec<Finding> = report
        .findings
        .into_iter()
        .filter(|f| f.confidence >= minimum_confidence)
        .collect();

    let stats = ScanStats {
        file_count: report.files_scanned,
        elapsed: start.elapsed(),
        total_findings,
        filtered_count: total_findings - findings.len(),
        partial: report.partial,
    };

    write_output(args, &findings, &stats)?;

    handle_exit_code(args, &findings);

    Ok(())
}

const fn should_show_progress(args: &ScanArgs) -> bool {
    args.output.is_none() && matches!(args.format, OutputFormat::Text)
}

fn collect_scan_files(args: &ScanArgs, config: &Config, max_file_size: Option<u64>) -> Vec<PathBuf> {
    let all_excludes: Vec<String> = config
        .exclude_paths
        .iter()
        .chain(args.exclude.iter())
        .cloned()
        .collect();

    collect_files(&args.paths, &all_excludes, !args.skip_gitignore, max_file_size)
}

/// Runs the full scan, wiring Ctrl-C to cooperative cancellation and
/// progress snapshots to the terminal bar.
async fn run_scan(orchestrator: &ScanOrchestrator, files: &[PathBuf], show_progress: bool) -> ScanReport {
    let cancel = CancelFlag::new();

    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    if !show_progress {
        return orchestrator.scan_files(files, None, &cancel).await;
    }

    let bar = create_file_progress(files.len());
    let (tx, mut rx) = mpsc::unbounded_channel::<frisk_core::ScanProgress>();

    let drain_bar = bar.clone();
    let drain = tokio::spawn(async move {
        while let Some(snapshot) = rx.recv().await {
            drain_bar.set_position(snapshot.scanned as u64);
        }
    });

    let report = orchestrator.scan_files(files, Some(tx), &cancel).await;
    let _ = drain.await;
    bar.finish_and_clear();

    report
}

fn print_no_files() {
    println!("{} no files to scan", colors::warning().apply_to("●"));
    println!();
    println!("  Check your .gitignore or exclude patterns.");
    println!();
}

fn handle_exit_code(args: &ScanArgs, findings: &[Finding]) {
    if args.exit_zero {
        return;
    }

    let high_confidence_count = findings.iter().filter(|f| f.confidence == Confidence::High).count();

    if high_confidence_count > 0 {
        std::process::exit(exit::FINDINGS);
    }
}
