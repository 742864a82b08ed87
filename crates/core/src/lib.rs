// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mapred-core: map-reduce job builder
//!
//! This crate provides:
//! - Input selection (bucket scans, literals, bucket/key tuples)
//! - Validated map, reduce and link phases
//! - Rendering to the JSON document the job endpoint accepts
//! - TOML job files
//!
//! ```
//! use mapred_core::{Job, PhaseFunction, PhaseOptions};
//!
//! let mut job = Job::new();
//! job.add_input("people")
//!     .add_map(PhaseFunction::native("riak_kv_mapreduce", "map_object_value"), PhaseOptions::new())?
//!     .add_reduce(PhaseFunction::source("function(v) { return v; }"), PhaseOptions::new().keep(true))?;
//!
//! let doc = job.to_wire_document();
//! assert_eq!(doc.inputs, "people");
//! assert_eq!(doc.query.len(), 2);
//! # Ok::<(), mapred_core::PhaseError>(())
//! ```

pub mod error;
pub mod function;
pub mod input;
pub mod job;
pub mod jobfile;
pub mod phase;
pub mod reference;

pub use error::PhaseError;
pub use function::{Language, PhaseFunction};
pub use input::{Input, JobInputs, KeyInput};
pub use job::{Job, WireDocument};
pub use jobfile::{load_job_file, parse_job, JobFileError};
pub use phase::{Phase, PhaseKind, PhaseOptions};
pub use reference::{Bucket, BucketRef, ObjectRef, RObject};

pub use mapred_walk::{Link, WalkFields, WalkSource, WalkSpec};
