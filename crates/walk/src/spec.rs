// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Walk specification types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Matches any bucket or tag
pub const WILDCARD: &str = "_";

/// Errors that can occur while reading a walk specification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalkSpecError {
    #[error("walk segment must be bucket,tag,keep: {0:?}")]
    InvalidSegment(String),
    #[error("invalid keep flag in walk segment: {0:?}")]
    InvalidKeep(String),
}

/// A normalized link-walk specification
///
/// Produced by [`normalize`](crate::normalize); `bucket` and `tag` are
/// always present, using [`WILDCARD`] when the caller left them open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSpec {
    pub bucket: String,
    pub tag: String,
    #[serde(default)]
    pub keep: bool,
}

impl WalkSpec {
    pub fn new(bucket: impl Into<String>, tag: impl Into<String>, keep: bool) -> Self {
        Self {
            bucket: bucket.into(),
            tag: tag.into(),
            keep,
        }
    }

    /// Follow every link regardless of bucket or tag
    pub fn any() -> Self {
        Self::new(WILDCARD, WILDCARD, false)
    }

    /// Check whether a link would be followed by this walk
    pub fn matches(&self, link: &crate::Link) -> bool {
        (self.bucket == WILDCARD || self.bucket == link.bucket)
            && (self.tag == WILDCARD || self.tag == link.tag)
    }
}

/// Renders the link-walking path segment, e.g. `people,friend,1`
impl fmt::Display for WalkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keep = if self.keep { "1" } else { WILDCARD };
        write!(f, "{},{},{}", self.bucket, self.tag, keep)
    }
}

impl FromStr for WalkSpec {
    type Err = WalkSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        let [bucket, tag, keep] = parts.as_slice() else {
            return Err(WalkSpecError::InvalidSegment(s.to_string()));
        };

        let keep = match *keep {
            "1" | "true" => true,
            "" | "_" | "0" | "false" => false,
            other => return Err(WalkSpecError::InvalidKeep(other.to_string())),
        };

        Ok(WalkSpec {
            bucket: or_wildcard(bucket),
            tag: or_wildcard(tag),
            keep,
        })
    }
}

fn or_wildcard(part: &str) -> String {
    if part.is_empty() {
        WILDCARD.to_string()
    } else {
        part.to_string()
    }
}

/// Loose walk-spec fields as supplied by a caller
///
/// Any field may be missing; normalization fills in wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkFields {
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub keep: Option<bool>,
}

impl WalkFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn keep(mut self, keep: bool) -> Self {
        self.keep = Some(keep);
        self
    }

    pub(crate) fn into_spec(self) -> WalkSpec {
        WalkSpec {
            bucket: self.bucket.unwrap_or_else(|| WILDCARD.to_string()),
            tag: self.tag.unwrap_or_else(|| WILDCARD.to_string()),
            keep: self.keep.unwrap_or(false),
        }
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
