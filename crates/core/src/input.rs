// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job input selection
//!
//! A job reads either a whole bucket (or an opaque literal input the service
//! understands), or an explicit list of bucket/key pairs. The two forms live
//! in separate slots: scalar selections replace each other, key tuples
//! accumulate. Whichever slot was written last is what goes on the wire.

use crate::reference::{BucketRef, ObjectRef};
use serde_json::Value;

/// One bucket/key tuple, optionally carrying key data for the phases
#[derive(Debug, Clone, PartialEq)]
pub struct KeyInput {
    pub bucket: String,
    pub key: String,
    pub keydata: Option<Value>,
}

impl KeyInput {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            keydata: None,
        }
    }

    pub fn with_keydata(mut self, keydata: Value) -> Self {
        self.keydata = Some(keydata);
        self
    }

    /// `[bucket, key]` or `[bucket, key, keydata]`
    pub fn to_wire(&self) -> Value {
        let mut tuple = vec![
            Value::String(self.bucket.clone()),
            Value::String(self.key.clone()),
        ];
        if let Some(keydata) = &self.keydata {
            tuple.push(keydata.clone());
        }
        Value::Array(tuple)
    }
}

/// A single input selection added to a job
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Scan every key in the named bucket
    Bucket(String),
    /// Opaque input passed through to the service as-is
    Literal(String),
    /// Append one bucket/key tuple
    Key(KeyInput),
}

impl Input {
    /// Scan every key in a bucket
    pub fn bucket(bucket: &impl BucketRef) -> Self {
        Input::Bucket(bucket.name().to_string())
    }

    /// Scan every key in a bucket given by name
    pub fn bucket_scan(name: impl Into<String>) -> Self {
        Input::Bucket(name.into())
    }

    /// Select a single stored object
    pub fn object(object: &impl ObjectRef) -> Self {
        Input::Key(KeyInput::new(object.bucket_name(), object.key()))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Input::Literal(value.into())
    }

    /// Select `key` from a bucket reference
    pub fn bucket_key(bucket: &impl BucketRef, key: impl Into<String>) -> Self {
        Input::Key(KeyInput::new(bucket.name(), key))
    }

    pub fn key(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Input::Key(KeyInput::new(bucket, key))
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Literal(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Literal(value)
    }
}

impl From<KeyInput> for Input {
    fn from(key: KeyInput) -> Self {
        Input::Key(key)
    }
}

impl<B: Into<String>, K: Into<String>> From<(B, K)> for Input {
    fn from((bucket, key): (B, K)) -> Self {
        Input::Key(KeyInput::new(bucket, key))
    }
}

impl<B: Into<String>, K: Into<String>> From<(B, K, Value)> for Input {
    fn from((bucket, key, keydata): (B, K, Value)) -> Self {
        Input::Key(KeyInput::new(bucket, key).with_keydata(keydata))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Scalar,
    Keys,
}

/// Accumulated inputs of a job
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobInputs {
    scalar: Option<String>,
    keys: Vec<KeyInput>,
    last: Option<Slot>,
}

impl JobInputs {
    pub fn add(&mut self, input: Input) {
        match input {
            Input::Bucket(name) | Input::Literal(name) => {
                self.scalar = Some(name);
                self.last = Some(Slot::Scalar);
            }
            Input::Key(key) => {
                self.keys.push(key);
                self.last = Some(Slot::Keys);
            }
        }
    }

    /// The current bucket name or literal, if one was set
    pub fn scalar(&self) -> Option<&str> {
        self.scalar.as_deref()
    }

    /// All bucket/key tuples in the order they were added
    pub fn keys(&self) -> &[KeyInput] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// The `inputs` value of the wire document
    ///
    /// With nothing selected this is an empty tuple list.
    pub fn to_wire(&self) -> Value {
        match (self.last, &self.scalar) {
            (Some(Slot::Scalar), Some(scalar)) => Value::String(scalar.clone()),
            _ => Value::Array(self.keys.iter().map(KeyInput::to_wire).collect()),
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
