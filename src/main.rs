use clap::{Parser, error::ErrorKind};
use log::*;
use std::process;

mod artifacts;
mod cli;
mod error;
mod extractor;
mod forge;
mod notes;

use crate::error::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("extract_pr_info")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap renders its own help, version, and usage output
            err.print().ok();
            process::exit(parse_exit_code(&err));
        }
    };

    if color_eyre::install().is_err() {
        eprintln!("failed to install error report handler");
        process::exit(1);
    }

    if let Err(err) = initialize_logger(args.debug) {
        eprintln!("failed to initialize logger: {err}");
        process::exit(1);
    }

    if let Err(err) = run(args).await {
        error!("extraction failed: {err}");
        process::exit(1);
    }
}

/// Requested help or version output is not a failure.
fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

async fn run(args: cli::Args) -> Result<()> {
    // fails before any network call when no token is configured
    let config = args.remote_config()?;

    let forge = forge::github::Github::new(config)?;
    let record = extractor::extract(&forge, args.pr_number).await?;

    artifacts::write_artifacts(&record, &args.output_dir)?;

    info!("successfully extracted PR info for #{}", record.number);
    info!(
        "release notes: {}",
        if record.release_notes.is_empty() {
            "none"
        } else {
            "found"
        }
    );
    info!("copyable labels: {}", record.copyable_labels.len());

    Ok(())
}
