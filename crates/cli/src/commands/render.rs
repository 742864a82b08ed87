// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mapred render <file>` - Print the job request body

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Job file (TOML), or `-` for stdin
    pub file: PathBuf,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let job = super::load_job(&args.file)?;
    tracing::info!(
        file = %args.file.display(),
        phases = job.phases().len(),
        "rendering job"
    );

    let body = if args.pretty {
        job.to_json_pretty()?
    } else {
        job.to_json()?
    };
    println!("{}", body);
    Ok(())
}
