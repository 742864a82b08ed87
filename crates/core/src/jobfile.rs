// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML job files
//!
//! A job file describes a [`Job`] declaratively:
//!
//! ```toml
//! inputs = "people"
//!
//! [[phase]]
//! type = "map"
//! function = "function(v) { return [v]; }"
//!
//! [[phase]]
//! type = "link"
//! bucket = "people"
//! tag = "friend"
//! keep = true
//! ```
//!
//! Key tuples are listed as `[[input]]` tables with `bucket`, `key` and an
//! optional `keydata`. The scalar `inputs` is applied before the tuples.

use crate::error::PhaseError;
use crate::function::{Language, PhaseFunction};
use crate::input::KeyInput;
use crate::job::Job;
use crate::phase::{PhaseKind, PhaseOptions};
use mapred_walk::WalkFields;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a job file
#[derive(Debug, Error)]
pub enum JobFileError {
    /// TOML syntax error
    #[error("TOML syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("phase[{index}]: {source}")]
    Phase {
        index: usize,
        #[source]
        source: PhaseError,
    },

    #[error("phase[{index}]: link phase takes either function or bucket/tag, not both")]
    AmbiguousLink { index: usize },

    #[error("phase[{index}]: bucket/tag are only valid in link phases")]
    WalkFieldsOutsideLink { index: usize },
}

/// Raw job file, mirroring the TOML structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawJobFile {
    #[serde(default)]
    pub inputs: Option<String>,
    #[serde(default, rename = "input")]
    pub keys: Vec<RawKeyInput>,
    #[serde(default, rename = "phase")]
    pub phases: Vec<RawPhase>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawKeyInput {
    pub bucket: String,
    pub key: String,
    #[serde(default)]
    pub keydata: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPhase {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub function: Option<Value>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub keep: bool,
    #[serde(default)]
    pub arg: Option<Value>,
    // Link phases
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Parse a job from TOML string content
pub fn parse_job(toml_content: &str) -> Result<Job, JobFileError> {
    let raw: RawJobFile = toml::from_str(toml_content)?;
    build_job(raw)
}

/// Parse a job from a TOML file
pub fn load_job_file(path: &Path) -> Result<Job, JobFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| JobFileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loading job file");
    parse_job(&content)
}

fn build_job(raw: RawJobFile) -> Result<Job, JobFileError> {
    let mut job = Job::new();

    if let Some(inputs) = raw.inputs {
        job.add_input(inputs);
    }
    for key in raw.keys {
        let input = KeyInput {
            bucket: key.bucket,
            key: key.key,
            keydata: key.keydata,
        };
        job.add_input(input);
    }

    for (index, phase) in raw.phases.into_iter().enumerate() {
        add_raw_phase(&mut job, index, phase)?;
    }

    Ok(job)
}

fn add_raw_phase(job: &mut Job, index: usize, raw: RawPhase) -> Result<(), JobFileError> {
    let phase_err = |source: PhaseError| JobFileError::Phase { index, source };

    let kind: PhaseKind = raw.kind.parse().map_err(phase_err)?;
    let language = raw
        .language
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()
        .map_err(phase_err)?;
    let function = raw
        .function
        .map(PhaseFunction::try_from)
        .transpose()
        .map_err(phase_err)?;

    let options = PhaseOptions {
        language,
        keep: raw.keep,
        arg: raw.arg,
        function: None,
    };

    let has_walk_fields = raw.bucket.is_some() || raw.tag.is_some();
    match (kind, function) {
        (PhaseKind::Link, Some(_)) if has_walk_fields => {
            return Err(JobFileError::AmbiguousLink { index });
        }
        (PhaseKind::Link, None) => {
            let walk = WalkFields {
                bucket: raw.bucket,
                tag: raw.tag,
                keep: None,
            };
            job.add_link(walk, options).map_err(phase_err)?;
        }
        (PhaseKind::Map | PhaseKind::Reduce, _) if has_walk_fields => {
            return Err(JobFileError::WalkFieldsOutsideLink { index });
        }
        (kind, function) => {
            job.add_phase(kind, function, options).map_err(phase_err)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "jobfile_tests.rs"]
mod tests;
