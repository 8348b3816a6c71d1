// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LIFO and FIFO adapters over sequence containers.
//!
//! [`Stack`] and [`Queue`] forward to an underlying container through the
//! [`BackSequence`] and [`FrontSequence`] traits and add no policy of their
//! own. `Stack` defaults to a [`DynArray`](sequin_vec::DynArray) and `Queue`
//! to a [`LinkedList`](sequin_list::LinkedList); any implementor works.
//!
//! ```rust
//! use std::collections::VecDeque;
//!
//! use sequin_adapt::{Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), 2);
//!
//! let mut queue: Queue<u8, _> = Queue::from_container(VecDeque::new());
//! queue.push(1);
//! queue.push(2);
//! assert_eq!(queue.pop(), 1);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod queue;
mod sequence;
mod stack;

#[cfg(test)]
mod tests;

pub use queue::Queue;
pub use sequence::{BackSequence, FrontSequence};
pub use stack::Stack;
