//! CLI entry point for the bookstore catalog.
//!
//! # Responsibility
//! - Wire store, service and presenter together for a quick local run.
//! - Register each argument as a new book (default: `New Book`).
//!
//! # Configuration
//! - `BOOKSTORE_LOG_DIR`: absolute directory; enables file logging when set.
//! - `BOOKSTORE_LOG_LEVEL`: overrides the build-mode default level.

use bookstore_core::{
    core_version, init_logging, write_record, CatalogService, InMemoryRecordRepository,
    LogSettings,
};
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

const DEFAULT_TITLE: &str = "New Book";

fn main() -> ExitCode {
    let log_dir = std::env::var("BOOKSTORE_LOG_DIR").ok();
    let log_level = std::env::var("BOOKSTORE_LOG_LEVEL").ok();
    if let Some(err) = setup_logging(log_dir, log_level) {
        eprintln!("bookstore: logging disabled: {err}");
    }

    let titles: Vec<String> = std::env::args().skip(1).collect();
    match run(&titles, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bookstore: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Starts file logging when a directory is configured.
///
/// Returns the failure message instead of aborting; the catalog runs either
/// way.
fn setup_logging(log_dir: Option<String>, level: Option<String>) -> Option<String> {
    let log_dir = log_dir?;
    LogSettings::parse(&log_dir, level.as_deref())
        .and_then(|settings| init_logging(&settings))
        .err()
        .map(|err| err.to_string())
}

fn run(titles: &[String], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "bookstore_core version={}", core_version())?;

    let mut catalog = CatalogService::new(InMemoryRecordRepository::seeded());
    for record in catalog.list() {
        write_record(out, &record)?;
    }

    if titles.is_empty() {
        catalog.register(DEFAULT_TITLE);
    } else {
        for title in titles {
            catalog.register(title.as_str());
        }
    }

    writeln!(out, "--")?;
    let records = catalog.list();
    for record in &records {
        write_record(out, record)?;
    }
    info!("event=cli_run module=cli status=ok records={}", records.len());
    Ok(())
}
