// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mapred check <file>` - Validate a job file

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use mapred_core::Job;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Job file (TOML), or `-` for stdin
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Serialize)]
struct JobSummary {
    inputs: &'static str,
    keys: usize,
    phases: Vec<String>,
}

impl JobSummary {
    fn new(job: &Job) -> Self {
        let inputs = job.inputs();
        let wire = inputs.to_wire();
        let kind = if inputs.is_empty() {
            "none"
        } else if wire.is_string() {
            "scalar"
        } else {
            "keys"
        };
        Self {
            inputs: kind,
            keys: inputs.keys().len(),
            phases: job
                .phases()
                .iter()
                .map(|p| p.kind().to_string())
                .collect(),
        }
    }
}

impl fmt::Display for JobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ok: {} phase(s)", self.phases.len())?;
        if !self.phases.is_empty() {
            write!(f, " ({})", self.phases.join(" -> "))?;
        }
        write!(f, ", inputs: {}", self.inputs)
    }
}

pub fn check(args: CheckArgs) -> Result<()> {
    let job = super::load_job(&args.file)?;
    output::print(&JobSummary::new(&job), args.output)
}
