// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bucket and object references
//!
//! The builder only reads names through these traits; anything that can
//! report a bucket name (and, for objects, a key) can select job inputs.

/// Something that names a bucket
pub trait BucketRef {
    fn name(&self) -> &str;
}

/// Something that names a stored object
pub trait ObjectRef {
    fn bucket_name(&self) -> &str;
    fn key(&self) -> &str;
}

/// A bucket by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bucket {
    name: String,
}

impl Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Reference an object in this bucket
    pub fn object(&self, key: impl Into<String>) -> RObject {
        RObject {
            bucket: self.clone(),
            key: key.into(),
        }
    }
}

impl BucketRef for Bucket {
    fn name(&self) -> &str {
        &self.name
    }
}

/// An object by bucket and key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RObject {
    bucket: Bucket,
    key: String,
}

impl RObject {
    pub fn new(bucket: Bucket, key: impl Into<String>) -> Self {
        Self {
            bucket,
            key: key.into(),
        }
    }

    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }
}

impl ObjectRef for RObject {
    fn bucket_name(&self) -> &str {
        self.bucket.name()
    }

    fn key(&self) -> &str {
        &self.key
    }
}
