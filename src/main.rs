//! GameSpace: disk space used by installed games.
//!
//! Thin binary entry point. All logic lives in the `gamespace-core` crate.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use gamespace_core::{cleanup, platform, report, scanner};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::info!("GameSpace starting");

    match &cli.cleanup {
        Some(words) => run_cleanup(&cli, words),
        None => run_report(&cli),
    }
}

fn run_cleanup(cli: &Cli, words: &[String]) -> anyhow::Result<()> {
    let target = cleanup::cleanup_target(words);
    let mut out = io::stdout().lock();
    cleanup::run_cleanup(&target, &cli.cleanup_config(), &mut out)
        .with_context(|| format!("cleanup of {target:?} failed"))?;
    out.flush()?;
    Ok(())
}

fn run_report(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.scan_config();

    let volume = platform::query_volume(&config.drive)
        .with_context(|| format!("cannot read capacity of {}", config.drive.display()))?;
    let result = scanner::scan(&config).context("game scan failed")?;

    let mut out = io::stdout().lock();
    report::write_report(&mut out, &result, &config.roots, volume)?;
    out.flush()?;
    Ok(())
}
