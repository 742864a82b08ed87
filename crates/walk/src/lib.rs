// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Link-walk specifications
//!
//! A walk specification tells a link phase which links to follow from an
//! object: links pointing into `bucket` carrying `tag`, with `keep`
//! controlling whether the phase result is returned. Either side may be the
//! wildcard `_`.

mod link;
mod normalize;
mod spec;

pub use link::Link;
pub use normalize::{normalize, WalkSource};
pub use spec::{WalkFields, WalkSpec, WalkSpecError, WILDCARD};
