// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase construction errors

use crate::phase::PhaseKind;
use mapred_walk::WalkSpecError;
use thiserror::Error;

/// Invalid arguments supplied while building a phase
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PhaseError {
    #[error("invalid phase type: {0:?} (expected map, reduce, or link)")]
    InvalidKind(String),
    #[error("invalid execution language: {0:?} (expected javascript or erlang)")]
    InvalidLanguage(String),
    #[error("module/function reference must have exactly 2 elements, got {0}")]
    ModuleFunctionPair(usize),
    #[error("stored function must name both bucket and key")]
    IncompleteStoredFunction,
    #[error("walk specification is only valid in a link phase, not {0}")]
    WalkOutsideLink(PhaseKind),
    #[error("link phase requires a walk specification, got a module/function reference")]
    LinkRequiresWalk,
    #[error("invalid phase function: {0}")]
    InvalidFunction(String),
    #[error("{0} phase has no function")]
    MissingFunction(PhaseKind),
    #[error("link phase resolved to no walk specification")]
    EmptyWalk,
    #[error("invalid walk specification: {0}")]
    Walk(#[from] WalkSpecError),
}
