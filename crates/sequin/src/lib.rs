// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sequence containers with explicit growth, lifetime and aliasing guarantees.
//!
//! | Module     | Type                                  | Storage                                   |
//! |------------|---------------------------------------|-------------------------------------------|
//! | [`vec`]    | [`DynArray<T>`](vec::DynArray)        | one contiguous block, geometric growth    |
//! | [`string`] | [`ByteString`](string::ByteString)    | contiguous bytes plus a `0` terminator    |
//! | [`list`]   | [`LinkedList<T>`](list::LinkedList)   | sentinel-based circular ring of nodes     |
//! | [`adapt`]  | [`Stack`](adapt::Stack), [`Queue`](adapt::Queue) | any back/front sequence        |
//! | [`alloc`]  | [`RawBuf<T>`](alloc::RawBuf)          | raw storage and the growth policy         |
//!
//! # Quick Start
//!
//! ```rust
//! use sequin::{ByteString, DynArray, Queue, Stack};
//!
//! let mut arr = DynArray::from([10, 30]);
//! arr.insert(1, 20);
//! assert_eq!(arr, [10, 20, 30]);
//!
//! let mut greeting = ByteString::from("Hello");
//! greeting += " World!";
//! assert_eq!(greeting.as_bytes_with_nul(), b"Hello World!\0");
//!
//! let mut stack = Stack::new();
//! let mut queue = Queue::new();
//! for value in arr {
//!     stack.push(value);
//!     queue.push(value);
//! }
//! assert_eq!(stack.pop(), 30);
//! assert_eq!(queue.pop(), 10);
//! ```
//!
//! # Allocation failures
//!
//! Every growing operation of [`DynArray`] and [`ByteString`] has a `try_*`
//! form returning [`AllocError`]. The container is unchanged when it fails.
//! The infallible forms behave like `Vec` on allocation failure.
//!
//! # Feature Flags
//!
//! - `tracing`: emit reallocation and allocation-failure events through
//!   the [`tracing`](https://docs.rs/tracing) crate.
//! - `test_utils`: enable `change_behaviour` on `DynArray` and `ByteString`
//!   to inject allocation failures.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub use sequin_adapt as adapt;
pub use sequin_alloc as alloc;
pub use sequin_list as list;
pub use sequin_string as string;
pub use sequin_vec as vec;

pub use sequin_adapt::{Queue, Stack};
pub use sequin_alloc::AllocError;
pub use sequin_list::LinkedList;
pub use sequin_string::ByteString;
pub use sequin_vec::DynArray;
