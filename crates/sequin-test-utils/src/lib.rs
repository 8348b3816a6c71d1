// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for sequin crates.
//!
//! - [`DropCounter`] / [`Tracked`]: element lifetime accounting, used to check
//!   that containers drop every element exactly once.
//! - [`index_permutations`]: exhaustive orderings for insert/remove tests.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod tracked;

pub use permutations::index_permutations;
pub use tracked::{DropCounter, Tracked};
