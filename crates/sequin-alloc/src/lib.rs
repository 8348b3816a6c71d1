// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage shared by the sequin containers.
//!
//! This crate owns the parts of a growable buffer that do not depend on what
//! the buffer holds:
//!
//! - [`RawBuf`]: an owned block of uninitialized slots. It never drops
//!   elements; the container on top decides which slots are live.
//! - [`growth`]: the geometric growth policy (floor of 4, factor of 2).
//! - [`AllocError`]: the recoverable error returned by every `try_*` growth path.
//! - [`trace`]: structured logging hooks, compiled out unless the `tracing`
//!   feature is enabled.
//!
//! # Example
//!
//! ```rust
//! use sequin_alloc::{AllocError, RawBuf, growth};
//!
//! fn example() -> Result<(), AllocError> {
//!     let mut buf = RawBuf::<u32>::try_with_capacity(growth::MIN_NON_ZERO_CAPACITY)?;
//!     unsafe {
//!         buf.as_ptr().write(7);
//!
//!         // Moves the single live slot into a block twice as large.
//!         let new_capacity = growth::next_capacity(buf.capacity(), 5);
//!         buf.try_relocate(new_capacity, 1)?;
//!
//!         assert_eq!(buf.capacity(), 8);
//!         assert_eq!(buf.as_ptr().read(), 7);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to get [`AllocBehaviour`], which containers
//! consult before allocating so tests can exercise the failure paths.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod error;
mod raw_buf;

pub mod growth;
pub mod trace;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::AllocBehaviour;
pub use error::AllocError;
pub use raw_buf::RawBuf;
