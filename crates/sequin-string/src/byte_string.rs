// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::{
    cmp, mem,
    ops::{Bound, RangeBounds},
    ptr, slice,
};

use sequin_alloc::{AllocError, RawBuf, growth, trace};

#[cfg(any(test, feature = "test_utils"))]
use sequin_alloc::AllocBehaviour;

/// "Until the end" length for [`ByteString::erase`], [`ByteString::substr`]
/// and [`ByteString::from_range`].
pub const NPOS: usize = usize::MAX;

const CONTAINER: &str = "ByteString";

/// Terminator of every string in the non-owning empty state.
static EMPTY: [u8; 1] = [0];

/// A growable byte string with a maintained null terminator.
///
/// The owned block holds `capacity + 1` bytes; `data[len]` is always `0`.
/// A string with capacity 0 owns nothing and points at a shared static
/// terminator, so `ByteString::new()` and `mem::take` never allocate.
///
/// Positions are byte indices. Out-of-range positions panic; allocation
/// failures surface through the `try_*` methods and leave the string unchanged.
pub struct ByteString {
    buf: RawBuf<u8>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: AllocBehaviour,
}

impl ByteString {
    /// Creates an empty string in the non-owning state.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: AllocBehaviour::None,
        }
    }

    /// Creates an empty string able to hold `capacity` bytes without reallocating.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut s = Self::new();
        s.try_reserve(capacity)?;
        Ok(s)
    }

    /// Infallible form of [`try_with_capacity`](Self::try_with_capacity).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| err.handle())
    }

    /// Copies `bytes` into a new string with capacity exactly `bytes.len()`.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, AllocError> {
        let mut s = Self::try_with_capacity(bytes.len())?;
        s.try_push_bytes(bytes)?;
        Ok(s)
    }

    /// Infallible form of [`try_from_bytes`](Self::try_from_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::try_from_bytes(bytes).unwrap_or_else(|err| err.handle())
    }

    /// Creates a string of `len` copies of `fill`.
    pub fn try_with_fill(len: usize, fill: u8) -> Result<Self, AllocError> {
        let mut s = Self::new();
        s.try_resize(len, fill)?;
        Ok(s)
    }

    /// Infallible form of [`try_with_fill`](Self::try_with_fill).
    pub fn with_fill(len: usize, fill: u8) -> Self {
        Self::try_with_fill(len, fill).unwrap_or_else(|err| err.handle())
    }

    /// Copies up to `len` bytes of `src` starting at `pos`.
    ///
    /// `len` is clamped to what remains after `pos`; pass [`NPOS`] for "until the end".
    ///
    /// # Panics
    ///
    /// Panics if `pos > src.len()`.
    pub fn try_from_range(src: &Self, pos: usize, len: usize) -> Result<Self, AllocError> {
        let src_len = src.len;
        if pos > src_len {
            panic!("substring start (is {pos}) should be <= len (is {src_len})");
        }

        let len = cmp::min(len, src_len - pos);
        Self::try_from_bytes(&src.as_bytes()[pos..pos + len])
    }

    /// Infallible form of [`try_from_range`](Self::try_from_range).
    ///
    /// # Panics
    ///
    /// Panics if `pos > src.len()`.
    pub fn from_range(src: &Self, pos: usize, len: usize) -> Self {
        Self::try_from_range(src, pos, len).unwrap_or_else(|err| err.handle())
    }

    /// Returns an independent copy of up to `len` bytes starting at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > self.len()`.
    pub fn try_substr(&self, pos: usize, len: usize) -> Result<Self, AllocError> {
        Self::try_from_range(self, pos, len)
    }

    /// Infallible form of [`try_substr`](Self::try_substr).
    ///
    /// # Panics
    ///
    /// Panics if `pos > self.len()`.
    pub fn substr(&self, pos: usize, len: usize) -> Self {
        Self::from_range(self, pos, len)
    }

    /// Number of bytes, terminator excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes the string can hold without reallocating, terminator excluded.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity().saturating_sub(1)
    }

    /// Returns a pointer to the first byte. `as_ptr().add(len())` reads `0`.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        if self.buf.is_allocated() {
            self.buf.as_ptr()
        } else {
            EMPTY.as_ptr()
        }
    }

    /// Returns the content, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) are initialized bytes of the current block
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the content as a mutable slice, terminator excluded.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        if !self.buf.is_allocated() {
            return &mut [];
        }

        // SAFETY (PRECONDITIONS ARE MET): the block is owned and [0, len) are initialized
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns the content followed by its `0` terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len] are initialized, data[len] is the terminator
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len + 1) }
    }

    /// Changes the test behaviour of this string.
    ///
    /// The behaviour is sticky and survives reallocation.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: AllocBehaviour) {
        self.behaviour = behaviour;
    }

    /// Sets the length and writes the terminator.
    ///
    /// # Safety
    ///
    /// The block must be owned, `len <= capacity()` and `[0, len)` initialized.
    #[inline]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(self.buf.is_allocated());
        debug_assert!(len <= self.capacity());

        // SAFETY (PRECONDITIONS ARE MET): len < capacity + 1 slots of the owned block
        unsafe { self.buf.as_ptr().add(len).write(0) };
        self.len = len;
    }

    /// Creates an empty string sharing the test behaviour of `self`.
    fn empty_like(&self) -> Self {
        #[allow(unused_mut)]
        let mut s = Self::new();
        #[cfg(any(test, feature = "test_utils"))]
        s.change_behaviour(self.behaviour);
        s
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Moves the content and terminator into a block of `new_capacity + 1` bytes.
    fn try_grow_to(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        let slots = new_capacity
            .checked_add(1)
            .ok_or(AllocError::CapacityOverflow)?;

        #[cfg(any(test, feature = "test_utils"))]
        self.behaviour
            .check::<u8>(slots)
            .inspect_err(|err| trace::on_alloc_failure(CONTAINER, err))?;

        let old_capacity = self.capacity();

        if self.buf.is_allocated() {
            // SAFETY (PRECONDITIONS ARE MET): len + 1 <= old slots < slots
            unsafe { self.buf.try_relocate(slots, self.len + 1) }
                .inspect_err(|err| trace::on_alloc_failure(CONTAINER, err))?;
        } else {
            let fresh = RawBuf::<u8>::try_with_capacity(slots)
                .inspect_err(|err| trace::on_alloc_failure(CONTAINER, err))?;
            // SAFETY (PRECONDITIONS ARE MET): the fresh block has at least one slot
            unsafe { fresh.as_ptr().write(0) };
            self.buf = fresh;
        }

        trace::on_grow(CONTAINER, old_capacity, new_capacity, self.len);
        Ok(())
    }

    /// Makes room for `needed` bytes using the growth policy.
    fn try_grow_for(&mut self, needed: usize) -> Result<(), AllocError> {
        if needed <= self.capacity() {
            return Ok(());
        }

        self.try_grow_to(growth::next_capacity(self.capacity(), needed))
    }

    /// Grows to hold exactly `capacity` bytes plus the terminator.
    ///
    /// Does nothing if `capacity <= self.capacity()`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocation fails; the string is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), AllocError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.try_grow_to(capacity)
    }

    /// Infallible form of [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(|err| err.handle())
    }

    // =========================================================================
    // Append
    // =========================================================================

    /// Appends one byte.
    pub fn try_push(&mut self, byte: u8) -> Result<(), AllocError> {
        self.try_push_bytes(&[byte])
    }

    /// Infallible form of [`try_push`](Self::try_push).
    pub fn push(&mut self, byte: u8) {
        self.try_push(byte).unwrap_or_else(|err| err.handle())
    }

    /// Appends `bytes`. Appending nothing never allocates.
    pub fn try_push_bytes(&mut self, bytes: &[u8]) -> Result<(), AllocError> {
        if bytes.is_empty() {
            return Ok(());
        }

        let needed = self
            .len
            .checked_add(bytes.len())
            .ok_or(AllocError::CapacityOverflow)?;
        self.try_grow_for(needed)?;

        // SAFETY (PRECONDITIONS ARE MET): needed <= capacity; `bytes` cannot overlap the uniquely borrowed block
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.buf.as_ptr().add(self.len), bytes.len());
            self.set_len(needed);
        }

        Ok(())
    }

    /// Infallible form of [`try_push_bytes`](Self::try_push_bytes).
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.try_push_bytes(bytes).unwrap_or_else(|err| err.handle())
    }

    /// Appends the content of `other`.
    pub fn try_push_string(&mut self, other: &Self) -> Result<(), AllocError> {
        self.try_push_bytes(other.as_bytes())
    }

    /// Infallible form of [`try_push_string`](Self::try_push_string).
    pub fn push_string(&mut self, other: &Self) {
        self.push_bytes(other.as_bytes())
    }

    /// Appends a copy of `self[range]`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn try_extend_from_within<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), AllocError> {
        self.try_insert_from_within(self.len, range)
    }

    /// Infallible form of [`try_extend_from_within`](Self::try_extend_from_within).
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn extend_from_within<R: RangeBounds<usize>>(&mut self, range: R) {
        self.try_extend_from_within(range).unwrap_or_else(|err| err.handle())
    }

    // =========================================================================
    // Insert
    // =========================================================================

    #[inline]
    fn check_insert_position(&self, pos: usize) {
        let len = self.len;
        if pos > len {
            panic!("insertion index (is {pos}) should be <= len (is {len})");
        }
    }

    /// Inserts `byte` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn try_insert(&mut self, pos: usize, byte: u8) -> Result<(), AllocError> {
        self.try_insert_bytes(pos, &[byte])
    }

    /// Infallible form of [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert(&mut self, pos: usize, byte: u8) {
        self.try_insert(pos, byte).unwrap_or_else(|err| err.handle())
    }

    /// Inserts `bytes` at `pos`, shifting the tail right by `bytes.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`. The check happens before any allocation.
    pub fn try_insert_bytes(&mut self, pos: usize, bytes: &[u8]) -> Result<(), AllocError> {
        self.check_insert_position(pos);
        if bytes.is_empty() {
            return Ok(());
        }

        let count = bytes.len();
        let needed = self.len.checked_add(count).ok_or(AllocError::CapacityOverflow)?;
        self.try_grow_for(needed)?;

        // SAFETY (PRECONDITIONS ARE MET): pos <= len and needed <= capacity; the tail move
        // includes the terminator and `bytes` cannot overlap the uniquely borrowed block
        unsafe {
            let gap = self.buf.as_ptr().add(pos);
            ptr::copy(gap, gap.add(count), self.len - pos + 1);
            ptr::copy_nonoverlapping(bytes.as_ptr(), gap, count);
        }
        self.len = needed;

        Ok(())
    }

    /// Infallible form of [`try_insert_bytes`](Self::try_insert_bytes).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert_bytes(&mut self, pos: usize, bytes: &[u8]) {
        self.try_insert_bytes(pos, bytes).unwrap_or_else(|err| err.handle())
    }

    /// Inserts the content of `other` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn try_insert_string(&mut self, pos: usize, other: &Self) -> Result<(), AllocError> {
        self.try_insert_bytes(pos, other.as_bytes())
    }

    /// Infallible form of [`try_insert_string`](Self::try_insert_string).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert_string(&mut self, pos: usize, other: &Self) {
        self.insert_bytes(pos, other.as_bytes())
    }

    /// Inserts a copy of the whole string into itself at `pos`.
    ///
    /// ```rust
    /// use sequin_string::ByteString;
    ///
    /// let mut s = ByteString::from("ab");
    /// s.insert_self(1);
    /// assert_eq!(s, "aabb");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn try_insert_self(&mut self, pos: usize) -> Result<(), AllocError> {
        self.try_insert_from_within(pos, ..)
    }

    /// Infallible form of [`try_insert_self`](Self::try_insert_self).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert_self(&mut self, pos: usize) {
        self.try_insert_self(pos).unwrap_or_else(|err| err.handle())
    }

    /// Inserts a copy of `self[range]` at `pos`.
    ///
    /// The source bytes are copied out before the string grows or shifts.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()` or `range` is out of bounds.
    pub fn try_insert_from_within<R: RangeBounds<usize>>(
        &mut self,
        pos: usize,
        range: R,
    ) -> Result<(), AllocError> {
        self.check_insert_position(pos);

        let bounds: (Bound<usize>, Bound<usize>) = (range.start_bound().cloned(), range.end_bound().cloned());
        let source = &self.as_bytes()[bounds];
        if source.is_empty() {
            return Ok(());
        }

        let mut snapshot = self.empty_like();
        snapshot.try_push_bytes(source)?;

        self.try_insert_bytes(pos, snapshot.as_bytes())
    }

    /// Infallible form of [`try_insert_from_within`](Self::try_insert_from_within).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()` or `range` is out of bounds.
    pub fn insert_from_within<R: RangeBounds<usize>>(&mut self, pos: usize, range: R) {
        self.try_insert_from_within(pos, range)
            .unwrap_or_else(|err| err.handle())
    }

    /// Inserts `count` bytes read from `src` at `pos`.
    ///
    /// `src` may point into this string's own content (anywhere in
    /// `[as_ptr(), as_ptr() + len()]`). Such a source is copied to an
    /// independent buffer before any reallocation or shift, so the result is
    /// the same as inserting an unrelated copy of those bytes.
    ///
    /// # Safety
    ///
    /// - `src` must be valid for reads of `count` initialized bytes.
    /// - If `src` points into this string, `src + count` must not pass the terminator.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub unsafe fn try_insert_raw(&mut self, pos: usize, src: *const u8, count: usize) -> Result<(), AllocError> {
        self.check_insert_position(pos);
        if count == 0 {
            return Ok(());
        }

        let start = self.as_ptr() as usize;
        let end = start + self.len;
        let addr = src as usize;

        if (start..=end).contains(&addr) {
            let mut snapshot = self.empty_like();
            // SAFETY (PRECONDITIONS ARE MET): the caller guarantees `count` readable bytes at `src`
            snapshot.try_push_bytes(unsafe { slice::from_raw_parts(src, count) })?;
            return self.try_insert_bytes(pos, snapshot.as_bytes());
        }

        // SAFETY (PRECONDITIONS ARE MET): `src` lies outside this string and holds `count` readable bytes
        let bytes = unsafe { slice::from_raw_parts(src, count) };
        self.try_insert_bytes(pos, bytes)
    }

    /// Infallible form of [`try_insert_raw`](Self::try_insert_raw).
    ///
    /// # Safety
    ///
    /// Same contract as [`try_insert_raw`](Self::try_insert_raw).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub unsafe fn insert_raw(&mut self, pos: usize, src: *const u8, count: usize) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller
        unsafe { self.try_insert_raw(pos, src, count) }.unwrap_or_else(|err| err.handle())
    }

    // =========================================================================
    // Remove / resize
    // =========================================================================

    /// Removes up to `len` bytes starting at `pos`.
    ///
    /// `len` is clamped to what remains after `pos`; pass [`NPOS`] to erase
    /// through the end.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`, even when `len` is 0.
    pub fn erase(&mut self, pos: usize, len: usize) {
        let cur_len = self.len;
        if pos >= cur_len {
            panic!("erase index (is {pos}) should be < len (is {cur_len})");
        }

        let count = cmp::min(len, cur_len - pos);

        // SAFETY (PRECONDITIONS ARE MET): pos < len so the block is owned; the moved tail includes the terminator
        unsafe {
            let gap = self.buf.as_ptr().add(pos);
            ptr::copy(gap.add(count), gap, cur_len - pos - count + 1);
        }
        self.len = cur_len - count;
    }

    /// Removes and returns the last byte, or `None` if the string is empty.
    pub fn pop(&mut self) -> Option<u8> {
        let last = *self.as_bytes().last()?;
        // SAFETY (PRECONDITIONS ARE MET): the string was non-empty, so the block is owned
        unsafe { self.set_len(self.len - 1) };
        Some(last)
    }

    /// Removes and returns the last byte.
    ///
    /// # Panics
    ///
    /// Panics if the string is empty.
    pub fn pop_back(&mut self) -> u8 {
        match self.pop() {
            Some(byte) => byte,
            None => panic!("pop_back on an empty ByteString"),
        }
    }

    /// Resizes to `len` bytes, padding with `fill` when growing.
    ///
    /// Growing applies the growth policy, as appends do.
    pub fn try_resize(&mut self, len: usize, fill: u8) -> Result<(), AllocError> {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.try_grow_for(len)?;

        // SAFETY (PRECONDITIONS ARE MET): len <= capacity after growth
        unsafe {
            ptr::write_bytes(self.buf.as_ptr().add(self.len), fill, len - self.len);
            self.set_len(len);
        }

        Ok(())
    }

    /// Infallible form of [`try_resize`](Self::try_resize).
    pub fn resize(&mut self, len: usize, fill: u8) {
        self.try_resize(len, fill).unwrap_or_else(|err| err.handle())
    }

    /// Shortens the string to `len` bytes. Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): the string is non-empty, so the block is owned
        unsafe { self.set_len(len) };
    }

    /// Empties the string, keeping its allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the storage of two strings. O(1), never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Replaces the contents with a copy of `source` using copy-and-swap.
    ///
    /// On error `self` keeps its previous contents.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        let mut fresh = self.empty_like();
        fresh.try_reserve(source.len)?;
        fresh.try_push_bytes(source.as_bytes())?;
        self.swap(&mut fresh);
        Ok(())
    }

    /// Copies the string into storage sized exactly to its length.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = self.empty_like();
        copy.try_clone_from(self)?;
        Ok(copy)
    }
}
