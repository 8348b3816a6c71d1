// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::{collections::VecDeque, vec::Vec};

use sequin_list::LinkedList;
use sequin_vec::DynArray;

/// A sequence with O(1) access at its back.
pub trait BackSequence<T> {
    /// Appends `value` at the back.
    fn push_back(&mut self, value: T);

    /// Removes the last element, or returns `None` if empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Returns the last element.
    fn back(&self) -> Option<&T>;

    /// Returns the last element mutably.
    fn back_mut(&mut self) -> Option<&mut T>;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence with O(1) access at both ends.
pub trait FrontSequence<T>: BackSequence<T> {
    /// Removes the first element, or returns `None` if empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Returns the first element.
    fn front(&self) -> Option<&T>;

    /// Returns the first element mutably.
    fn front_mut(&mut self) -> Option<&mut T>;
}

impl<T> BackSequence<T> for DynArray<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        DynArray::len(self)
    }
}

impl<T> BackSequence<T> for Vec<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> BackSequence<T> for LinkedList<T> {
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back()
    }

    fn back(&self) -> Option<&T> {
        self.try_back()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.try_back_mut()
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> FrontSequence<T> for LinkedList<T> {
    fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front()
    }

    fn front(&self) -> Option<&T> {
        self.try_front()
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        self.try_front_mut()
    }
}

impl<T> BackSequence<T> for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> FrontSequence<T> for VecDeque<T> {
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        VecDeque::front_mut(self)
    }
}
