// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A circular doubly linked list built around a sentinel node.
//!
//! The sentinel is allocated with the list and never holds a value. It sits
//! between the back and the front, so every node always has a valid `prev`
//! and `next` and insertion or removal never special-cases the ends.
//!
//! [`CursorMut`] walks the ring in both directions. At the sentinel it
//! points at the "ghost" position, which has no element and acts as the end.
//!
//! ## Example
//!
//! ```rust
//! use sequin_list::LinkedList;
//!
//! let mut list = LinkedList::from([1, 3]);
//! list.push_front(0);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.move_next();
//! cursor.move_next();
//! cursor.insert_before(2);
//! assert_eq!(cursor.current(), Some(&mut 3));
//!
//! assert_eq!(list, [0, 1, 2, 3]);
//! assert_eq!(list.pop_back(), 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cursor;
mod iter;
mod linked_list;

#[cfg(test)]
mod tests;

pub use cursor::CursorMut;
pub use iter::{IntoIter, Iter, IterMut};
pub use linked_list::LinkedList;
