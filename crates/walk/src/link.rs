// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Links attached to stored objects

use serde::{Deserialize, Serialize};

/// A tagged link from one object to another
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Bucket of the target object
    pub bucket: String,
    /// Key of the target object
    pub key: String,
    /// Relationship tag
    pub tag: String,
}

impl Link {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            tag: tag.into(),
        }
    }
}
