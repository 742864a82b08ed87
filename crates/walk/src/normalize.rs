// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Walk-spec normalization

use crate::spec::{WalkFields, WalkSpec, WalkSpecError};

/// Anything that can be normalized into a [`WalkSpec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkSource {
    /// An already-built specification, passed through untouched
    Spec(WalkSpec),
    /// Loose fields; missing bucket/tag become wildcards
    Fields(WalkFields),
    /// A `bucket,tag,keep` path segment
    Segment(String),
}

impl From<WalkSpec> for WalkSource {
    fn from(spec: WalkSpec) -> Self {
        WalkSource::Spec(spec)
    }
}

impl From<WalkFields> for WalkSource {
    fn from(fields: WalkFields) -> Self {
        WalkSource::Fields(fields)
    }
}

/// Positional `(bucket, tag)` form
impl<B: Into<String>, T: Into<String>> From<(B, T)> for WalkSource {
    fn from((bucket, tag): (B, T)) -> Self {
        WalkSource::Fields(WalkFields::new().bucket(bucket).tag(tag))
    }
}

/// Positional `(bucket, tag, keep)` form
impl<B: Into<String>, T: Into<String>> From<(B, T, bool)> for WalkSource {
    fn from((bucket, tag, keep): (B, T, bool)) -> Self {
        WalkSource::Fields(WalkFields::new().bucket(bucket).tag(tag).keep(keep))
    }
}

impl WalkSource {
    fn into_spec(self) -> Result<WalkSpec, WalkSpecError> {
        match self {
            WalkSource::Spec(spec) => Ok(spec),
            WalkSource::Fields(fields) => Ok(fields.into_spec()),
            WalkSource::Segment(segment) => segment.parse(),
        }
    }
}

/// Normalize a sequence of walk sources into canonical specifications
///
/// Order is preserved, one spec per source. Fails on the first malformed
/// path segment.
pub fn normalize<I, S>(sources: I) -> Result<Vec<WalkSpec>, WalkSpecError>
where
    I: IntoIterator<Item = S>,
    S: Into<WalkSource>,
{
    sources
        .into_iter()
        .map(|source| source.into().into_spec())
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
