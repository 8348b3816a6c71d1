// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lifetime accounting for container elements.

use std::cell::Cell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

/// Shared counter of [`Tracked`] values created and dropped.
///
/// # Example
///
/// ```
/// use sequin_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let a = counter.track(1);
/// let b = a.clone();
/// assert_eq!(counter.live(), 2);
///
/// drop(a);
/// drop(b);
/// assert_eq!(counter.created(), 2);
/// assert_eq!(counter.dropped(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    counts: Rc<Counts>,
}

impl DropCounter {
    /// Creates a counter with no tracked values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter whose values panic on the clone after `budget` successful clones.
    pub fn with_clone_budget(budget: usize) -> Self {
        let counter = Self::new();
        counter.counts.clone_budget.set(Some(budget));
        counter
    }

    /// Wraps `value` so its drop is counted here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.counts.created.set(self.created() + 1);
        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Number of values created through this counter, clones included.
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Number of values dropped.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Number of values currently alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }

    fn spend_clone(&self) {
        if let Some(budget) = self.counts.clone_budget.get() {
            if budget == 0 {
                panic!("clone budget exhausted");
            }
            self.counts.clone_budget.set(Some(budget - 1));
        }
    }
}

/// A value whose construction and drop are recorded by a [`DropCounter`].
pub struct Tracked<T> {
    value: T,
    counter: DropCounter,
}

impl<T> Tracked<T> {
    /// Returns the wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counter.spend_clone();
        self.counter.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let dropped = self.counter.dropped() + 1;
        assert!(
            dropped <= self.counter.created(),
            "more values dropped ({dropped}) than created ({})",
            self.counter.created()
        );
        self.counter.counts.dropped.set(dropped);
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
