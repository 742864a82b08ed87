// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase functions and execution languages

use crate::error::PhaseError;
use mapred_walk::WalkSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Language the service runs a phase function in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Javascript,
    Erlang,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Erlang => "erlang",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" => Ok(Language::Javascript),
            "erlang" => Ok(Language::Erlang),
            _ => Err(PhaseError::InvalidLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = PhaseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// What a phase runs
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseFunction {
    /// Function source, e.g. `function(v) { return [v]; }`
    Source(String),
    /// Function stored in the database; must name `bucket` and `key` except
    /// in link phases. Any other entries are sent along verbatim.
    Stored(Map<String, Value>),
    /// Compiled `module:function` reference
    Native { module: String, function: String },
    /// Links to follow (link phases only)
    Walk(WalkSpec),
}

impl PhaseFunction {
    pub fn source(source: impl Into<String>) -> Self {
        PhaseFunction::Source(source.into())
    }

    /// Reference a function stored at `bucket`/`key`
    pub fn stored(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("bucket".to_string(), Value::String(bucket.into()));
        fields.insert("key".to_string(), Value::String(key.into()));
        PhaseFunction::Stored(fields)
    }

    pub fn native(module: impl Into<String>, function: impl Into<String>) -> Self {
        PhaseFunction::Native {
            module: module.into(),
            function: function.into(),
        }
    }

    /// Build a native reference from a dynamically sized list
    pub fn native_from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, PhaseError> {
        match parts {
            [module, function] => Ok(Self::native(module.as_ref(), function.as_ref())),
            _ => Err(PhaseError::ModuleFunctionPair(parts.len())),
        }
    }

    /// Language implied by this representation, if any
    pub fn language(&self) -> Option<Language> {
        match self {
            PhaseFunction::Native { .. } => Some(Language::Erlang),
            PhaseFunction::Source(_) | PhaseFunction::Stored(_) => Some(Language::Javascript),
            PhaseFunction::Walk(_) => None,
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            PhaseFunction::Source(_) => "source",
            PhaseFunction::Stored(_) => "stored",
            PhaseFunction::Native { .. } => "native",
            PhaseFunction::Walk(_) => "walk",
        }
    }
}

impl From<&str> for PhaseFunction {
    fn from(source: &str) -> Self {
        PhaseFunction::Source(source.to_string())
    }
}

impl From<String> for PhaseFunction {
    fn from(source: String) -> Self {
        PhaseFunction::Source(source)
    }
}

impl From<WalkSpec> for PhaseFunction {
    fn from(spec: WalkSpec) -> Self {
        PhaseFunction::Walk(spec)
    }
}

/// Dynamic form used by job files: a string is source, a two-element array
/// is a `[module, function]` reference, a table is a stored-function
/// descriptor.
impl TryFrom<Value> for PhaseFunction {
    type Error = PhaseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(source) => Ok(PhaseFunction::Source(source)),
            Value::Object(fields) => Ok(PhaseFunction::Stored(fields)),
            Value::Array(items) => match <[Value; 2]>::try_from(items) {
                Ok([Value::String(module), Value::String(function)]) => {
                    Ok(Self::native(module, function))
                }
                Ok(pair) => Err(PhaseError::InvalidFunction(
                    Value::Array(pair.into()).to_string(),
                )),
                Err(items) => Err(PhaseError::ModuleFunctionPair(items.len())),
            },
            other => Err(PhaseError::InvalidFunction(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod tests;
