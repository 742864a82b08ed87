// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mapred - render map-reduce job files

mod commands;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, render};

#[derive(Parser)]
#[command(
    name = "mapred",
    version,
    about = "Build map-reduce job documents from TOML job files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON request body for a job file
    Render(render::RenderArgs),
    /// Validate a job file without rendering it
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    logging::setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render::render(args),
        Commands::Check(args) => check::check(args),
    }
}
