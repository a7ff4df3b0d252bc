mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use colored::*;
use dotenv::dotenv;
use soulseek_cleaner::{cleanup_directory, format_report, CleaningConfig, Settings};
use std::io::{self, IsTerminal};
use std::process;
use tracing::debug;

fn main() {
    dotenv().ok();

    let ansi = io::stderr().is_terminal();
    colored::control::set_override(ansi);

    let guard = logging::init_logger(ansi);

    let result = run(Cli::parse());

    if let Err(err) = &result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
    }

    // process::exit skips destructors; flush the file log first.
    drop(guard);

    if result.is_err() {
        process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let settings = Settings::load().context("Error loading configuration")?;
    debug!("settings: {:?}", settings);

    let config = CleaningConfig::new(args.path)
        .with_dry_run(args.dry_run)
        .with_patterns(settings.resolve_patterns(args.extensions));

    let report = cleanup_directory(&config)?;
    println!("{}", format_report(&report));

    Ok(())
}
