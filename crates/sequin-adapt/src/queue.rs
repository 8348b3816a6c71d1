// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::{fmt, marker::PhantomData};

use sequin_list::LinkedList;

use crate::sequence::FrontSequence;

/// A FIFO queue: pushes at the back of a [`FrontSequence`], pops at its front.
pub struct Queue<T, C = LinkedList<T>> {
    container: C,
    _marker: PhantomData<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue over a [`LinkedList`].
    pub fn new() -> Self {
        Self::from_container(LinkedList::new())
    }
}

impl<T, C: FrontSequence<T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: FrontSequence<T>> Queue<T, C> {
    /// Wraps an existing container. Its front is the next element to leave.
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

    /// Enqueues `value` at the back.
    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
    }

    /// Dequeues the front element, or returns `None` if the queue is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    /// Dequeues the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => panic!("pop on an empty Queue"),
        }
    }

    /// Returns the next element to leave, or `None` if the queue is empty.
    pub fn try_front(&self) -> Option<&T> {
        self.container.front()
    }

    /// Mutable form of [`try_front`](Self::try_front).
    pub fn try_front_mut(&mut self) -> Option<&mut T> {
        self.container.front_mut()
    }

    /// Returns the most recently enqueued element, or `None` if the queue is empty.
    pub fn try_back(&self) -> Option<&T> {
        self.container.back()
    }

    /// Mutable form of [`try_back`](Self::try_back).
    pub fn try_back_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    /// Returns the next element to leave.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn front(&self) -> &T {
        match self.try_front() {
            Some(value) => value,
            None => panic!("front on an empty Queue"),
        }
    }

    /// Returns the next element to leave, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.try_front_mut() {
            Some(value) => value,
            None => panic!("front_mut on an empty Queue"),
        }
    }

    /// Returns the most recently enqueued element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn back(&self) -> &T {
        match self.try_back() {
            Some(value) => value,
            None => panic!("back on an empty Queue"),
        }
    }

    /// Returns the most recently enqueued element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.try_back_mut() {
            Some(value) => value,
            None => panic!("back_mut on an empty Queue"),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T, C: Clone> Clone for Queue<T, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for Queue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.container).finish()
    }
}
