// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query phases
//!
//! A phase is validated once, when it is built, and is immutable afterwards.
//! Rendering a valid phase cannot fail.

use crate::error::PhaseError;
use crate::function::{Language, PhaseFunction};
use mapred_walk::{normalize, WalkFields, WalkSource, WalkSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Pipeline stage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PhaseKind {
    Map,
    Reduce,
    Link,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Map => "map",
            PhaseKind::Reduce => "reduce",
            PhaseKind::Link => "link",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"MAP"`, `"Map"` and `"map"` are all [`PhaseKind::Map`]
impl FromStr for PhaseKind {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "map" => Ok(PhaseKind::Map),
            "reduce" => Ok(PhaseKind::Reduce),
            "link" => Ok(PhaseKind::Link),
            _ => Err(PhaseError::InvalidKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for PhaseKind {
    type Error = PhaseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Optional phase settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseOptions {
    /// Language to assume when the function does not imply one
    pub language: Option<Language>,
    /// Include this phase's output in the job results
    pub keep: bool,
    /// Static argument handed to the function
    pub arg: Option<Value>,
    /// Function, when not given positionally
    pub function: Option<PhaseFunction>,
}

impl PhaseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    pub fn arg(mut self, arg: impl Into<Value>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn function(mut self, function: impl Into<PhaseFunction>) -> Self {
        self.function = Some(function.into());
        self
    }
}

/// One stage of a map-reduce query
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    kind: PhaseKind,
    function: PhaseFunction,
    language: Language,
    keep: bool,
    arg: Option<Value>,
    walk: Option<WalkSpec>,
}

impl Phase {
    pub(crate) fn new(
        kind: PhaseKind,
        function: Option<PhaseFunction>,
        options: PhaseOptions,
    ) -> Result<Self, PhaseError> {
        let PhaseOptions {
            language,
            keep,
            arg,
            function: optional_function,
        } = options;

        let function = function
            .or(optional_function)
            .ok_or(PhaseError::MissingFunction(kind))?;

        match &function {
            PhaseFunction::Stored(fields) => {
                let complete = fields.contains_key("bucket") && fields.contains_key("key");
                if kind != PhaseKind::Link && !complete {
                    return Err(PhaseError::IncompleteStoredFunction);
                }
            }
            PhaseFunction::Walk(_) if kind != PhaseKind::Link => {
                return Err(PhaseError::WalkOutsideLink(kind));
            }
            _ => {}
        }

        let walk = match kind {
            PhaseKind::Link => Some(resolve_walk(&function)?),
            PhaseKind::Map | PhaseKind::Reduce => None,
        };

        let language = function
            .language()
            .or(language)
            .unwrap_or_default();

        Ok(Self {
            kind,
            function,
            language,
            keep,
            arg,
            walk,
        })
    }

    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    pub fn function(&self) -> &PhaseFunction {
        &self.function
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn keep(&self) -> bool {
        self.keep
    }

    pub fn arg(&self) -> Option<&Value> {
        self.arg.as_ref()
    }

    /// The resolved walk of a link phase
    pub fn walk(&self) -> Option<&WalkSpec> {
        self.walk.as_ref()
    }

    /// Render as `{"<kind>": {...}}` for the job's `query` list
    pub fn to_wire_fragment(&self) -> Value {
        let mut body = Map::new();

        match &self.walk {
            Some(walk) => {
                body.insert("bucket".to_string(), Value::String(walk.bucket.clone()));
                body.insert("tag".to_string(), Value::String(walk.tag.clone()));
                body.insert("keep".to_string(), Value::Bool(walk.keep || self.keep));
            }
            None => {
                body.insert(
                    "language".to_string(),
                    Value::String(self.language.as_str().to_string()),
                );
                body.insert("keep".to_string(), Value::Bool(self.keep));
                match &self.function {
                    PhaseFunction::Stored(fields) => {
                        body.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
                    }
                    PhaseFunction::Source(source) => {
                        body.insert("source".to_string(), Value::String(source.clone()));
                    }
                    PhaseFunction::Native { module, function } => {
                        body.insert("module".to_string(), Value::String(module.clone()));
                        body.insert("function".to_string(), Value::String(function.clone()));
                    }
                    // Rejected at construction for map and reduce
                    PhaseFunction::Walk(_) => {}
                }
            }
        }

        if let Some(arg) = &self.arg {
            body.insert("arg".to_string(), arg.clone());
        }

        let mut fragment = Map::new();
        fragment.insert(self.kind.as_str().to_string(), Value::Object(body));
        Value::Object(fragment)
    }
}

/// Normalize whatever a link phase was given into one walk spec
fn resolve_walk(function: &PhaseFunction) -> Result<WalkSpec, PhaseError> {
    let source = match function {
        PhaseFunction::Walk(spec) => WalkSource::Spec(spec.clone()),
        PhaseFunction::Stored(fields) => WalkSource::Fields(WalkFields {
            bucket: descriptor_entry(fields, "bucket", Value::as_str)?.map(String::from),
            tag: descriptor_entry(fields, "tag", Value::as_str)?.map(String::from),
            keep: descriptor_entry(fields, "keep", Value::as_bool)?,
        }),
        PhaseFunction::Source(segment) => WalkSource::Segment(segment.clone()),
        PhaseFunction::Native { .. } => return Err(PhaseError::LinkRequiresWalk),
    };

    normalize([source])?
        .into_iter()
        .next()
        .ok_or(PhaseError::EmptyWalk)
}

/// Read one walk entry from a link descriptor; absent entries stay `None`
fn descriptor_entry<'a, T>(
    fields: &'a Map<String, Value>,
    name: &str,
    get: impl Fn(&'a Value) -> Option<T>,
) -> Result<Option<T>, PhaseError> {
    match fields.get(name) {
        None => Ok(None),
        Some(value) => get(value).map(Some).ok_or_else(|| {
            PhaseError::InvalidFunction(format!("link {} has the wrong type: {}", name, value))
        }),
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
