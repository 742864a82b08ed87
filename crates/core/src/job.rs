// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Map-reduce job builder

use crate::error::PhaseError;
use crate::function::PhaseFunction;
use crate::input::{Input, JobInputs, KeyInput};
use crate::phase::{Phase, PhaseKind, PhaseOptions};
use crate::reference::{BucketRef, ObjectRef};
use mapred_walk::{normalize, WalkSource};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// The request body submitted to the job endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDocument {
    /// Bucket name, literal input, or `[[bucket, key(, keydata)], ...]`
    pub inputs: Value,
    /// One `{"<kind>": {...}}` fragment per phase, in pipeline order
    pub query: Vec<Value>,
}

/// A map-reduce job: inputs plus an ordered phase pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    inputs: JobInputs,
    phases: Vec<Phase>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input selection
    ///
    /// Bucket scans and literals replace the current scalar input; key
    /// tuples are appended.
    pub fn add_input(&mut self, input: impl Into<Input>) -> &mut Self {
        let input = input.into();
        match &input {
            Input::Bucket(name) => tracing::debug!(bucket = %name, "input: bucket scan"),
            Input::Literal(value) => tracing::debug!(value = %value, "input: literal"),
            Input::Key(key) => tracing::debug!(
                bucket = %key.bucket,
                key = %key.key,
                keydata = key.keydata.is_some(),
                "input: key"
            ),
        }
        self.inputs.add(input);
        self
    }

    /// Scan every key in `bucket`
    pub fn add_bucket(&mut self, bucket: &impl BucketRef) -> &mut Self {
        self.add_input(Input::bucket(bucket))
    }

    /// Select one stored object
    pub fn add_object(&mut self, object: &impl ObjectRef) -> &mut Self {
        self.add_input(Input::object(object))
    }

    pub fn add_key(&mut self, bucket: impl Into<String>, key: impl Into<String>) -> &mut Self {
        self.add_input(KeyInput::new(bucket, key))
    }

    pub fn add_key_with_data(
        &mut self,
        bucket: impl Into<String>,
        key: impl Into<String>,
        keydata: Value,
    ) -> &mut Self {
        self.add_input(KeyInput::new(bucket, key).with_keydata(keydata))
    }

    /// Append a map phase
    pub fn add_map(
        &mut self,
        function: impl Into<Option<PhaseFunction>>,
        options: PhaseOptions,
    ) -> Result<&mut Self, PhaseError> {
        self.add_phase(PhaseKind::Map, function.into(), options)
    }

    /// Append a reduce phase
    pub fn add_reduce(
        &mut self,
        function: impl Into<Option<PhaseFunction>>,
        options: PhaseOptions,
    ) -> Result<&mut Self, PhaseError> {
        self.add_phase(PhaseKind::Reduce, function.into(), options)
    }

    /// Append a link phase following the links described by `walk`
    ///
    /// Only the first normalized walk spec is used; `options.function` is
    /// ignored.
    pub fn add_link(
        &mut self,
        walk: impl Into<WalkSource>,
        options: PhaseOptions,
    ) -> Result<&mut Self, PhaseError> {
        let spec = normalize([walk])?
            .into_iter()
            .next()
            .ok_or(PhaseError::EmptyWalk)?;
        let options = PhaseOptions {
            function: None,
            ..options
        };
        self.add_phase(PhaseKind::Link, Some(PhaseFunction::Walk(spec)), options)
    }

    /// Append a phase of any kind
    ///
    /// On error the job is left unchanged.
    pub fn add_phase(
        &mut self,
        kind: PhaseKind,
        function: Option<PhaseFunction>,
        options: PhaseOptions,
    ) -> Result<&mut Self, PhaseError> {
        let phase = Phase::new(kind, function, options).inspect_err(|e| {
            tracing::debug!(kind = %kind, error = %e, "rejected phase");
        })?;
        tracing::debug!(
            kind = %phase.kind(),
            function = phase.function().describe(),
            language = %phase.language(),
            keep = phase.keep(),
            index = self.phases.len(),
            "phase added"
        );
        self.phases.push(phase);
        Ok(self)
    }

    pub fn inputs(&self) -> &JobInputs {
        &self.inputs
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Build the request body
    pub fn to_wire_document(&self) -> WireDocument {
        tracing::trace!(phases = self.phases.len(), "rendering job");
        WireDocument {
            inputs: self.inputs.to_wire(),
            query: self.phases.iter().map(Phase::to_wire_fragment).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_wire_document())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_wire_document())
    }
}

impl Serialize for Job {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire_document().serialize(serializer)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
