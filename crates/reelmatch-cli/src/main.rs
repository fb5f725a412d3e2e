#![forbid(unsafe_code)]

//! Reelmatch CLI
//!
//! Genre-similarity movie recommendations over the IMDb dataset.

use clap::Parser;
use reelmatch_cli::cli::Args;
use reelmatch_cli::error::exit_status;
use reelmatch_cli::{commands, logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    commands::run(args).await?;
    Ok(())
}
