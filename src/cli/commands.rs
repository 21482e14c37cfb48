//! Command implementations for the debarker processor CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and user-facing output for the CLI interface. Parse failures are
//! reported per file and never abort a multi-file ingest.

use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::services::record_parser;
use crate::app::services::spreadsheet_writer;
use crate::cli::args::{Args, Commands, DeleteArgs, ExportArgs, IngestArgs, ShowArgs};
use crate::constants::EXPORT_FILE_EXTENSION;
use crate::{ArchiveStore, BatchRecord};

/// Main command runner for the debarker processor
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args);

    info!("Starting debarker processor");
    debug!("Command line arguments: {:?}", args);

    let store = ArchiveStore::from_config(&args.config());
    debug!("Using archive file: {}", store.path().display());

    match args
        .command
        .clone()
        .context("A subcommand is required; run with --help for usage")?
    {
        Commands::Ingest(ingest) => run_ingest(&args, &store, &ingest),
        Commands::List => run_list(&store),
        Commands::Show(show) => run_show(&store, &show),
        Commands::Delete(delete) => run_delete(&store, &delete),
        Commands::Export(export) => run_export(&store, &export),
    }
}

/// Set up tracing with a verbosity-derived filter
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("debarker_processor={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Parse and archive one or more export files
fn run_ingest(args: &Args, store: &ArchiveStore, ingest: &IngestArgs) -> anyhow::Result<()> {
    ingest.validate()?;

    let mut files = ingest.files.clone();
    if let Some(dir) = &ingest.dir {
        files.extend(discover_exports(dir));
    }

    if files.is_empty() {
        println!("{}", "No export files found to ingest.".yellow());
        return Ok(());
    }

    let progress_bar = if args.show_progress() && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut archived = 0usize;
    let mut rejected = 0usize;

    for file in &files {
        if let Some(pb) = &progress_bar {
            pb.set_message(file.display().to_string());
        }

        match ingest_one(store, file) {
            Ok(filename) => {
                archived += 1;
                if progress_bar.is_none() {
                    println!("{} {}", "Archived".green(), filename);
                }
            }
            Err(e) => {
                rejected += 1;
                warn!("Rejected {}: {:#}", file.display(), e);
                eprintln!("{} {}: {:#}", "Rejected".red(), file.display(), e);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    println!(
        "{} {} archived, {} rejected",
        "Ingest complete:".bold(),
        archived,
        rejected
    );

    if archived == 0 && rejected > 0 {
        anyhow::bail!("all {} export file(s) were rejected", rejected);
    }
    Ok(())
}

/// Parse a single export file and archive it under its basename
fn ingest_one(store: &ArchiveStore, file: &Path) -> anyhow::Result<String> {
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("Cannot derive a filename from {}", file.display()))?;

    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let record = record_parser::parse_export(&bytes)?;
    store.put(&filename, record)?;
    Ok(filename)
}

/// Find .txt exports under a directory
fn discover_exports(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_FILE_EXTENSION))
        })
        .map(|e| e.into_path())
        .collect();

    files.sort();
    debug!("Discovered {} export file(s) under {}", files.len(), dir.display());
    files
}

/// List archived batches with their row counts
fn run_list(store: &ArchiveStore) -> anyhow::Result<()> {
    let archive = store.get_all()?;

    if archive.is_empty() {
        println!("No archived batches. Ingest an export file first.");
        return Ok(());
    }

    let mut filenames: Vec<&String> = archive.keys().collect();
    filenames.sort();

    println!("{}", format!("Archived batches ({}):", filenames.len()).bold());
    for filename in filenames {
        let record = &archive[filename];
        println!(
            "  {}  ({} log row(s), {} - {})",
            filename,
            record.row_count(),
            record.start_date,
            record.end_date
        );
    }
    Ok(())
}

/// Display one archived batch in full
fn run_show(store: &ArchiveStore, show: &ShowArgs) -> anyhow::Result<()> {
    let record = lookup(store, &show.filename)?;

    println!("{}", show.filename.bold());
    println!("Start: {} {}", record.start_date, record.start_time);
    println!("End:   {} {}", record.end_date, record.end_time);
    println!("Total pieces:    {}", record.total_value_1);
    println!("Total volume M3: {}", record.total_value_2);

    if record.log_rows.is_empty() {
        println!("\n(no log rows)");
    } else {
        println!("\n{:<10} {:<12} {:<10}", "BOX", "Quantidade", "M3");
        for row in &record.log_rows {
            println!("{:<10} {:<12} {:<10}", row.box_id, row.quantity, row.volume);
        }
    }

    if !record.metadata.is_empty() {
        let mut keys: Vec<&String> = record.metadata.keys().collect();
        keys.sort();
        println!();
        for key in keys {
            println!("{}: {}", key, record.metadata[key]);
        }
    }
    Ok(())
}

/// Delete one archived batch
fn run_delete(store: &ArchiveStore, delete: &DeleteArgs) -> anyhow::Result<()> {
    if store.delete(&delete.filename)? {
        println!("{} {}", "Deleted".green(), delete.filename);
    } else {
        println!(
            "{} no archived batch named '{}'",
            "Nothing to delete:".yellow(),
            delete.filename
        );
    }
    Ok(())
}

/// Export one archived batch to an .xlsx file
fn run_export(store: &ArchiveStore, export: &ExportArgs) -> anyhow::Result<()> {
    let record = lookup(store, &export.filename)?;

    let output = export
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(spreadsheet_writer::export_filename(&export.filename)));

    let buffer = spreadsheet_writer::write_batch_workbook(&record)?;
    std::fs::write(&output, &buffer)
        .with_context(|| format!("Failed to write spreadsheet to {}", output.display()))?;

    println!(
        "{} {} ({} log row(s)) -> {}",
        "Exported".green(),
        export.filename,
        record.row_count(),
        output.display()
    );
    Ok(())
}

/// Fetch one record from the archive by filename
fn lookup(store: &ArchiveStore, filename: &str) -> crate::Result<BatchRecord> {
    store
        .get_all()?
        .remove(filename)
        .ok_or_else(|| crate::Error::record_not_found(filename))
}
