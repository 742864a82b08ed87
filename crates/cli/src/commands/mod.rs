// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod render;

use anyhow::{Context, Result};
use mapred_core::Job;
use std::io::Read;
use std::path::Path;

/// Load a job file, or read TOML from stdin when the path is `-`
pub fn load_job(path: &Path) -> Result<Job> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("reading job from stdin")?;
        return Ok(mapred_core::parse_job(&content)?);
    }
    Ok(mapred_core::load_job_file(path)?)
}
