// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::linked_list::{Link, LinkedList, Node};

/// A bidirectional cursor that can edit the list it walks.
///
/// The cursor always rests on a node of the ring. When that node is the
/// sentinel the cursor is at the ghost position: [`current`](Self::current)
/// returns `None`, moving forward wraps to the front and moving backward
/// wraps to the back.
///
/// ```rust
/// use sequin_list::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// let mut cursor = list.cursor_front_mut();
///
/// cursor.move_next();
/// assert_eq!(cursor.remove_current(), 2);
/// assert_eq!(cursor.current(), Some(&mut 3));
///
/// cursor.move_next();
/// assert!(cursor.is_ghost());
/// cursor.insert_before(4);
///
/// assert_eq!(list, [1, 3, 4]);
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    current: Link<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>, current: Link<T>, index: usize) -> Self {
        Self { list, current, index }
    }

    /// Returns `true` at the ghost position.
    #[inline]
    pub fn is_ghost(&self) -> bool {
        self.current == self.list.sentinel()
    }

    /// Index of the current element, or `None` at the ghost position.
    pub fn index(&self) -> Option<usize> {
        if self.is_ghost() { None } else { Some(self.index) }
    }

    /// Returns the current element, or `None` at the ghost position.
    pub fn current(&mut self) -> Option<&mut T> {
        if self.is_ghost() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): not the sentinel; the borrow is tied to &mut self
        Some(unsafe { Node::value_mut(self.current) })
    }

    /// Moves to the following node. From the last element this reaches the
    /// ghost position; from the ghost position it wraps to the front.
    pub fn move_next(&mut self) {
        if self.is_ghost() {
            self.index = 0;
        } else {
            self.index += 1;
        }

        // SAFETY (PRECONDITIONS ARE MET): every ring node has a valid `next`
        self.current = unsafe { (*self.current.as_ptr()).next };
    }

    /// Moves to the preceding node. From the first element this reaches the
    /// ghost position; from the ghost position it wraps to the back.
    pub fn move_prev(&mut self) {
        if self.is_ghost() {
            self.index = self.list.len().saturating_sub(1);
        } else if self.index == 0 {
            self.index = self.list.len();
        } else {
            self.index -= 1;
        }

        // SAFETY (PRECONDITIONS ARE MET): every ring node has a valid `prev`
        self.current = unsafe { (*self.current.as_ptr()).prev };
    }

    /// Inserts `value` before the cursor. The cursor keeps pointing at the
    /// same node; at the ghost position this appends to the back.
    pub fn insert_before(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): `current` is a node of this list
        unsafe { self.list.link_before(self.current, value) };
        self.index += 1;
    }

    /// Inserts `value` after the cursor. The cursor keeps pointing at the
    /// same node; at the ghost position this prepends to the front.
    pub fn insert_after(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): `current` is a node of this list, so is its successor
        unsafe {
            let next = (*self.current.as_ptr()).next;
            self.list.link_before(next, value);
        }

        if self.is_ghost() {
            self.index = self.list.len();
        }
    }

    /// Removes the current element and moves to the following node.
    ///
    /// Returns `None` at the ghost position.
    pub fn try_remove_current(&mut self) -> Option<T> {
        if self.is_ghost() {
            return None;
        }

        let node = self.current;
        // SAFETY (PRECONDITIONS ARE MET): `node` is an element node of this list
        unsafe {
            self.current = (*node.as_ptr()).next;
            Some(self.list.unlink(node))
        }
    }

    /// Removes the current element and moves to the following node.
    ///
    /// # Panics
    ///
    /// Panics at the ghost position.
    pub fn remove_current(&mut self) -> T {
        match self.try_remove_current() {
            Some(value) => value,
            None => panic!("remove_current at the ghost position"),
        }
    }
}
