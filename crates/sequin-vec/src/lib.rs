// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A contiguous growable array with an explicit growth policy.
//!
//! [`DynArray`] keeps its elements in one block of storage. The first
//! growth-triggering insertion allocates 4 slots and every later one doubles
//! the capacity. Explicit reservation (`reserve`, `resize`,
//! `extend_from_slice`) grows to exactly what was asked.
//!
//! Relocation moves elements bitwise into the new block, so growth never
//! clones or drops anything. Elements removed by `truncate`, `clear` or
//! `resize` are dropped immediately.
//!
//! ## Example
//!
//! ```rust
//! use sequin_vec::DynArray;
//!
//! let mut arr = DynArray::new();
//! for i in 0..5 {
//!     arr.push(i);
//! }
//!
//! assert_eq!(arr.capacity(), 8);
//! assert_eq!(arr, [0, 1, 2, 3, 4]);
//! ```
//!
//! ## Fallible growth
//!
//! ```rust
//! use sequin_vec::{AllocError, DynArray};
//!
//! fn fill(arr: &mut DynArray<u8>) -> Result<(), AllocError> {
//!     arr.try_reserve(16)?;
//!     for byte in 0..16 {
//!         arr.try_push(byte)?;
//!     }
//!     Ok(())
//! }
//!
//! let mut arr = DynArray::new();
//! fill(&mut arr).expect("Failed to fill");
//! assert_eq!(arr.capacity(), 16);
//! ```
//!
//! ## Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```rust
//! use sequin_vec::{AllocBehaviour, DynArray};
//!
//! let mut arr = DynArray::from([1, 2, 3, 4]);
//! arr.change_behaviour(AllocBehaviour::FailAtAlloc);
//!
//! assert!(arr.try_push(5).is_err());
//! assert_eq!(arr, [1, 2, 3, 4]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dyn_array;
mod into_iter;

#[cfg(test)]
mod tests;

pub use dyn_array::DynArray;
pub use into_iter::IntoIter;
pub use sequin_alloc::AllocError;

#[cfg(any(test, feature = "test_utils"))]
pub use sequin_alloc::AllocBehaviour;
