// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A growable byte string that always keeps a null terminator.
//!
//! [`ByteString`] stores `len` bytes followed by a `0` byte, so
//! [`as_bytes_with_nul`](ByteString::as_bytes_with_nul) can be handed to C
//! code at any point. An empty string does not allocate: its terminator is a
//! shared static byte.
//!
//! Growth follows [`sequin_alloc::growth`]: appends and inserts grow to
//! `max(needed, 2 * capacity)` with a floor of 4, while
//! [`reserve`](ByteString::reserve) is exact.
//!
//! ## Example
//!
//! ```rust
//! use sequin_string::ByteString;
//!
//! let mut s = ByteString::from("Hello");
//! s += " World!";
//!
//! assert_eq!(s, "Hello World!");
//! assert_eq!(s.substr(6, 5), "World");
//! assert_eq!(s.as_bytes_with_nul().last(), Some(&0));
//! ```
//!
//! ## Inserting a string into itself
//!
//! Shared borrows cannot overlap a mutable one, so inserting a string's own
//! content goes through dedicated methods that copy the source out first:
//!
//! ```rust
//! use sequin_string::ByteString;
//!
//! let mut s = ByteString::from("ab");
//! s.insert_self(1);
//! assert_eq!(s, "aabb");
//!
//! s.extend_from_within(..2);
//! assert_eq!(s, "aabbaa");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod byte_string;
mod traits;

#[cfg(test)]
mod tests;

pub use byte_string::{ByteString, NPOS};
pub use sequin_alloc::AllocError;

#[cfg(any(test, feature = "test_utils"))]
pub use sequin_alloc::AllocBehaviour;
