// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    ptr, slice,
};

use sequin_alloc::{AllocError, RawBuf, growth, trace};

#[cfg(any(test, feature = "test_utils"))]
use sequin_alloc::AllocBehaviour;

use crate::into_iter::IntoIter;

const CONTAINER: &str = "DynArray";

/// A contiguous growable array.
///
/// Slots `[0, len)` hold live elements and slots `[len, capacity)` are
/// uninitialized. Storage is allocated on the first growth-triggering
/// mutation and grows geometrically (see [`sequin_alloc::growth`]): a full
/// array grows to `max(4, 2 * capacity)`.
///
/// Every growth path has a fallible `try_*` form that leaves the array
/// untouched on [`AllocError`]. Out-of-range positions are programmer errors
/// and panic.
///
/// # Example
///
/// ```rust
/// use sequin_vec::DynArray;
///
/// let mut arr = DynArray::from([10, 30]);
/// arr.insert(0, 0);
/// arr.insert(arr.len(), 40);
/// arr.insert(2, 20);
/// assert_eq!(arr, [0, 10, 20, 30, 40]);
///
/// assert_eq!(arr.remove(0), 0);
/// assert_eq!(arr, [10, 20, 30, 40]);
/// ```
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: AllocBehaviour,
}

impl<T> DynArray<T> {
    /// Creates a new empty `DynArray` without allocating.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: AllocBehaviour::default(),
        }
    }

    /// Creates an empty `DynArray` with room for exactly `capacity` elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut arr = Self::new();
        arr.try_reserve(capacity)?;
        Ok(arr)
    }

    /// Infallible form of [`try_with_capacity`](Self::try_with_capacity).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| err.handle())
    }

    /// Creates a `DynArray` holding `len` clones of `value`, with capacity exactly `len`.
    pub fn try_with_len(len: usize, value: T) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut arr = Self::new();
        arr.try_resize(len, value)?;
        Ok(arr)
    }

    /// Infallible form of [`try_with_len`](Self::try_with_len).
    pub fn with_len(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::try_with_len(len, value).unwrap_or_else(|err| err.handle())
    }

    /// Creates a `DynArray` by cloning `src`, with capacity exactly `src.len()`.
    pub fn try_from_slice(src: &[T]) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut arr = Self::new();
        arr.try_extend_from_slice(src)?;
        Ok(arr)
    }

    /// Infallible form of [`try_from_slice`](Self::try_from_slice).
    pub fn from_slice(src: &[T]) -> Self
    where
        T: Clone,
    {
        Self::try_from_slice(src).unwrap_or_else(|err| err.handle())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    ///
    /// Zero-sized element types report `usize::MAX`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer is invalidated by any capacity-changing mutation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) are initialized and the pointer is aligned and non-null
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) are initialized and uniquely borrowed through &mut self
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Changes the test behaviour of this array.
    ///
    /// The behaviour is sticky and survives reallocation.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: AllocBehaviour) {
        self.behaviour = behaviour;
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Moves the live elements into a block of exactly `new_capacity` slots.
    fn try_grow_to(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        #[cfg(any(test, feature = "test_utils"))]
        self.behaviour
            .check::<T>(new_capacity)
            .inspect_err(|err| trace::on_alloc_failure(CONTAINER, err))?;

        let old_capacity = self.capacity();

        // SAFETY (PRECONDITIONS ARE MET): len <= capacity < new_capacity
        unsafe { self.buf.try_relocate(new_capacity, self.len) }
            .inspect_err(|err| trace::on_alloc_failure(CONTAINER, err))?;

        trace::on_grow(CONTAINER, old_capacity, new_capacity, self.len);
        Ok(())
    }

    /// Makes room for one more element, applying the growth policy when full.
    fn try_grow_for_one(&mut self) -> Result<(), AllocError> {
        if self.len < self.capacity() {
            return Ok(());
        }

        let required = self.len.checked_add(1).ok_or(AllocError::CapacityOverflow)?;
        self.try_grow_to(growth::next_capacity(self.capacity(), required))
    }

    /// Grows the storage to exactly `capacity` slots.
    ///
    /// Does nothing if the current capacity is already sufficient. Otherwise
    /// every live element is moved, in order, into a new block and the old
    /// block is released.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocation fails; the array is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), AllocError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.try_grow_to(capacity)
    }

    /// Infallible form of [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve(capacity) {
            err.handle()
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends `value`, growing to `max(4, 2 * capacity)` when full.
    ///
    /// Returns a reference to the stored element.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, AllocError> {
        self.try_grow_for_one()?;

        // SAFETY (PRECONDITIONS ARE MET): len < capacity after try_grow_for_one, so the slot is in bounds and uninitialized
        unsafe {
            let slot = self.buf.as_ptr().add(self.len);
            slot.write(value);
            self.len += 1;
            Ok(&mut *slot)
        }
    }

    /// Infallible form of [`try_push`](Self::try_push).
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            err.handle()
        }
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot toward the tail.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. The check happens before any allocation.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, AllocError> {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        self.try_grow_for_one()?;

        // SAFETY (PRECONDITIONS ARE MET): index <= len < capacity, the shifted run stays in bounds
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
            self.len = len + 1;
            Ok(&mut *slot)
        }
    }

    /// Infallible form of [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            err.handle()
        }
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot toward the head.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }

        // SAFETY (PRECONDITIONS ARE MET): index < len, the slot is live and is moved out exactly once
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            let removed = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            removed
        }
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY (PRECONDITIONS ARE MET): the slot at the old len - 1 is live and no longer counted
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) -> T {
        match self.pop() {
            Some(value) => value,
            None => panic!("pop_back on an empty DynArray"),
        }
    }

    /// Resizes to `len` elements.
    ///
    /// Growing reserves exactly `len` slots when needed and appends clones of
    /// `value`. Shrinking drops the out-of-range elements immediately.
    pub fn try_resize(&mut self, len: usize, value: T) -> Result<(), AllocError>
    where
        T: Clone,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.try_reserve(len)?;

        // len is bumped per element so a panicking clone leaves only live slots counted
        while self.len + 1 < len {
            // SAFETY (PRECONDITIONS ARE MET): self.len < len <= capacity
            unsafe { self.buf.as_ptr().add(self.len).write(value.clone()) };
            self.len += 1;
        }
        // SAFETY (PRECONDITIONS ARE MET): self.len == len - 1 < capacity
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;

        Ok(())
    }

    /// Infallible form of [`try_resize`](Self::try_resize).
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        if let Err(err) = self.try_resize(len, value) {
            err.handle()
        }
    }

    /// Drops every element past `len`. Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let dropped = self.len - len;
        // Shrink first: a panicking Drop must not leave dead slots counted as live.
        self.len = len;

        // SAFETY (PRECONDITIONS ARE MET): [len, len + dropped) were live and are no longer reachable
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(len),
                dropped,
            ));
        }
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends clones of every element of `src`.
    ///
    /// Reserves exactly `len + src.len()` slots when the current capacity is not enough.
    pub fn try_extend_from_slice(&mut self, src: &[T]) -> Result<(), AllocError>
    where
        T: Clone,
    {
        let required = self
            .len
            .checked_add(src.len())
            .ok_or(AllocError::CapacityOverflow)?;
        self.try_reserve(required)?;

        for value in src {
            // SAFETY (PRECONDITIONS ARE MET): self.len < required <= capacity
            unsafe { self.buf.as_ptr().add(self.len).write(value.clone()) };
            self.len += 1;
        }

        Ok(())
    }

    /// Infallible form of [`try_extend_from_slice`](Self::try_extend_from_slice).
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        if let Err(err) = self.try_extend_from_slice(src) {
            err.handle()
        }
    }

    /// Exchanges the storage of two arrays. O(1), never allocates.
    ///
    /// Test behaviours stay with their arrays.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Replaces the contents with a clone of `source` using copy-and-swap.
    ///
    /// The full copy is built before `self` is touched, so on error (or if
    /// `T::clone` panics) `self` keeps its previous contents.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError>
    where
        T: Clone,
    {
        let mut fresh = Self::new();
        #[cfg(any(test, feature = "test_utils"))]
        fresh.change_behaviour(self.behaviour);

        fresh.try_extend_from_slice(source.as_slice())?;
        self.swap(&mut fresh);
        Ok(())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(value) => value,
            None => panic!("front on an empty DynArray"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(value) => value,
            None => panic!("front_mut on an empty DynArray"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(value) => value,
            None => panic!("back on an empty DynArray"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(value) => value,
            None => panic!("back_mut on an empty DynArray"),
        }
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) are live; RawBuf releases the block afterwards
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len));
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep-copies into storage sized exactly to `self.len()`.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            err.handle()
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(src: &[T]) -> Self {
        Self::from_slice(src)
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(src: [T; N]) -> Self {
        let mut arr = Self::with_capacity(N);
        for value in src {
            arr.push(value);
        }
        arr
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len.saturating_add(lower));

        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let this = mem::ManuallyDrop::new(self);
        // SAFETY (PRECONDITIONS ARE MET): `this` is never dropped, so the buffer is moved out exactly once
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter::new(buf, this.len)
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
