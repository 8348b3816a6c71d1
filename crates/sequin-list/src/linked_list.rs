// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::MaybeUninit,
    ptr::NonNull,
};

use crate::{
    cursor::CursorMut,
    iter::{IntoIter, Iter, IterMut},
};

pub(crate) type Link<T> = NonNull<Node<T>>;

/// A ring node. The sentinel's `value` is never initialized.
pub(crate) struct Node<T> {
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
    pub(crate) value: MaybeUninit<T>,
}

impl<T> Node<T> {
    /// # Safety
    ///
    /// `node` must be a live element node (not the sentinel) outliving `'a`.
    #[inline]
    pub(crate) unsafe fn value<'a>(node: Link<T>) -> &'a T {
        // SAFETY (PRECONDITIONS ARE MET): element nodes always hold an initialized value
        unsafe { (*node.as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    ///
    /// Same as [`Node::value`], and no other reference to the value may exist for `'a`.
    #[inline]
    pub(crate) unsafe fn value_mut<'a>(node: Link<T>) -> &'a mut T {
        // SAFETY (PRECONDITIONS ARE MET): element nodes always hold an initialized value
        unsafe { (*node.as_ptr()).value.assume_init_mut() }
    }
}

/// A circular doubly linked list with a sentinel node.
///
/// `push_*`/`pop_*` at either end and insertion or removal through a
/// [`CursorMut`] are O(1). `pop_*`, `front` and `back` panic on an empty
/// list; the `try_*` forms return `Option` instead.
pub struct LinkedList<T> {
    sentinel: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY (PRECONDITIONS ARE MET): the list uniquely owns its nodes, like Box<T>
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY (PRECONDITIONS ARE MET): shared access only hands out &T
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates an empty list. Allocates the sentinel node.
    pub fn new() -> Self {
        let sentinel = NonNull::from(Box::leak(Box::new(Node {
            prev: NonNull::dangling(),
            next: NonNull::dangling(),
            value: MaybeUninit::uninit(),
        })));

        // SAFETY (PRECONDITIONS ARE MET): the sentinel was just allocated and is uniquely owned
        unsafe {
            (*sentinel.as_ptr()).prev = sentinel;
            (*sentinel.as_ptr()).next = sentinel;
        }

        Self {
            sentinel,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn sentinel(&self) -> Link<T> {
        self.sentinel
    }

    #[inline]
    fn head(&self) -> Link<T> {
        // SAFETY (PRECONDITIONS ARE MET): the sentinel lives as long as the list
        unsafe { (*self.sentinel.as_ptr()).next }
    }

    #[inline]
    fn tail(&self) -> Link<T> {
        // SAFETY (PRECONDITIONS ARE MET): the sentinel lives as long as the list
        unsafe { (*self.sentinel.as_ptr()).prev }
    }

    /// Links a new node holding `value` right before `at` and returns it.
    ///
    /// # Safety
    ///
    /// `at` must be a node of this list (the sentinel included).
    pub(crate) unsafe fn link_before(&mut self, at: Link<T>, value: T) -> Link<T> {
        // SAFETY (PRECONDITIONS ARE MET): `at` and its predecessor belong to this ring
        unsafe {
            let prev = (*at.as_ptr()).prev;
            let node = NonNull::from(Box::leak(Box::new(Node {
                prev,
                next: at,
                value: MaybeUninit::new(value),
            })));

            (*prev.as_ptr()).next = node;
            (*at.as_ptr()).prev = node;
            self.len += 1;
            node
        }
    }

    /// Unlinks `node`, frees it and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must be an element node of this list, not the sentinel.
    pub(crate) unsafe fn unlink(&mut self, node: Link<T>) -> T {
        debug_assert!(node != self.sentinel);

        // SAFETY (PRECONDITIONS ARE MET): `node` is an element of this ring, allocated by link_before
        unsafe {
            let prev = (*node.as_ptr()).prev;
            let next = (*node.as_ptr()).next;
            (*prev.as_ptr()).next = next;
            (*next.as_ptr()).prev = prev;
            self.len -= 1;

            let boxed = Box::from_raw(node.as_ptr());
            boxed.value.assume_init()
        }
    }

    // =========================================================================
    // Ends
    // =========================================================================

    /// Appends `value` at the back.
    pub fn push_back(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): the sentinel belongs to this list
        unsafe { self.link_before(self.sentinel, value) };
    }

    /// Prepends `value` at the front.
    pub fn push_front(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): the head (or the sentinel when empty) belongs to this list
        unsafe { self.link_before(self.head(), value) };
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    pub fn try_pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): non-empty, so the tail is an element node
        Some(unsafe { self.unlink(self.tail()) })
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn try_pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): non-empty, so the head is an element node
        Some(unsafe { self.unlink(self.head()) })
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        match self.try_pop_back() {
            Some(value) => value,
            None => panic!("pop_back on an empty LinkedList"),
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Some(value) => value,
            None => panic!("pop_front on an empty LinkedList"),
        }
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn try_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): non-empty, so the head is an element node
        Some(unsafe { Node::value(self.head()) })
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn try_back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): non-empty, so the tail is an element node
        Some(unsafe { Node::value(self.tail()) })
    }

    /// Mutable form of [`try_front`](Self::try_front).
    pub fn try_front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): non-empty, and &mut self makes the borrow unique
        Some(unsafe { Node::value_mut(self.head()) })
    }

    /// Mutable form of [`try_back`](Self::try_back).
    pub fn try_back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): non-empty, and &mut self makes the borrow unique
        Some(unsafe { Node::value_mut(self.tail()) })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn front(&self) -> &T {
        match self.try_front() {
            Some(value) => value,
            None => panic!("front on an empty LinkedList"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn back(&self) -> &T {
        match self.try_back() {
            Some(value) => value,
            None => panic!("back on an empty LinkedList"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.try_front_mut() {
            Some(value) => value,
            None => panic!("front_mut on an empty LinkedList"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.try_back_mut() {
            Some(value) => value,
            None => panic!("back_mut on an empty LinkedList"),
        }
    }

    /// Drops every element. The sentinel stays allocated.
    pub fn clear(&mut self) {
        while self.try_pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists. O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.tail(), self.len)
    }

    /// Returns a front-to-back iterator yielding mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head(), self.tail(), self.len)
    }

    /// Returns a cursor on the first element, or on the ghost position if empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head();
        CursorMut::new(self, head, 0)
    }

    /// Returns a cursor on the last element, or on the ghost position if empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail();
        let index = self.len.saturating_sub(1);
        CursorMut::new(self, tail, index)
    }

    /// Returns a cursor on the ghost position, one past the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let sentinel = self.sentinel;
        let len = self.len;
        CursorMut::new(self, sentinel, len)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();

        // SAFETY (PRECONDITIONS ARE MET): the ring is empty and the sentinel value was never initialized
        unsafe { drop(Box::from_raw(self.sentinel.as_ptr())) };
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for LinkedList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.len == N && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for LinkedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
