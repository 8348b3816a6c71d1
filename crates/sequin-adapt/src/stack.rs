// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::{fmt, marker::PhantomData};

use sequin_vec::DynArray;

use crate::sequence::BackSequence;

/// A LIFO stack over the back of a [`BackSequence`].
pub struct Stack<T, C = DynArray<T>> {
    container: C,
    _marker: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack over a [`DynArray`].
    pub fn new() -> Self {
        Self::from_container(DynArray::new())
    }
}

impl<T, C: BackSequence<T> + Default> Default for Stack<T, C> {
    fn default() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: BackSequence<T>> Stack<T, C> {
    /// Wraps an existing container. Its back becomes the top of the stack.
    pub fn from_container(container: C) -> Self {
        Self {
            container,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying container.
    pub fn into_inner(self) -> C {
        self.container
    }

    /// Pushes `value` on top.
    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.container.pop_back()
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => panic!("pop on an empty Stack"),
        }
    }

    /// Returns the top element, or `None` if the stack is empty.
    pub fn try_top(&self) -> Option<&T> {
        self.container.back()
    }

    /// Mutable form of [`try_top`](Self::try_top).
    pub fn try_top_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    /// Returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn top(&self) -> &T {
        match self.try_top() {
            Some(value) => value,
            None => panic!("top on an empty Stack"),
        }
    }

    /// Returns the top element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut T {
        match self.try_top_mut() {
            Some(value) => value,
            None => panic!("top_mut on an empty Stack"),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T, C: Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for Stack<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.container).finish()
    }
}
