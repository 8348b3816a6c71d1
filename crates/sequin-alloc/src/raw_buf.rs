// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, dealloc};
use core::{alloc::Layout, marker::PhantomData, mem, ptr::NonNull};

use crate::error::AllocError;

/// An owned block of `capacity` uninitialized slots of `T`.
///
/// `RawBuf` only tracks the allocation. It never reads, writes or drops
/// elements, so the container on top is responsible for knowing which
/// slots are live and for dropping them before the buffer goes away.
///
/// Zero-sized types never allocate and report a capacity of `usize::MAX`.
/// A capacity of 0 means the pointer is dangling and nothing is freed on drop.
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Safety: RawBuf owns its block and hands out no references on its own.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: if Self::IS_ZST { usize::MAX } else { 0 },
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer of exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// - [`AllocError::CapacityOverflow`] if `capacity * size_of::<T>()` exceeds `isize::MAX`.
    /// - [`AllocError::AllocFailed`] if the global allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Self::layout_for(capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): layout has a non-zero size (capacity > 0, T is not a ZST)
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::failed(layout))?;

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Returns the layout of a block of `capacity` slots.
    pub fn layout_for(capacity: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is dangling when the capacity is 0.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the first slot as a [`NonNull`].
    #[inline]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    /// Returns `true` if the buffer currently owns an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !Self::IS_ZST && self.capacity != 0
    }

    /// Moves the first `len` slots into a fresh block of `new_capacity` slots
    /// and releases the old block.
    ///
    /// On error nothing has changed: the old block and its contents are intact.
    ///
    /// # Safety
    ///
    /// - `len <= self.capacity()` and `len <= new_capacity`.
    /// - After the call the moved slots belong to the new block only; the
    ///   caller must not use pointers obtained before the call.
    pub unsafe fn try_relocate(&mut self, new_capacity: usize, len: usize) -> Result<(), AllocError> {
        debug_assert!(len <= self.capacity);
        debug_assert!(len <= new_capacity);

        if Self::IS_ZST {
            return Ok(());
        }

        let fresh = Self::try_with_capacity(new_capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): both blocks hold at least `len` slots and never overlap
        unsafe {
            core::ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.ptr.as_ptr(), len);
        }

        // The old block drops here, releasing its memory without touching the slots.
        drop(mem::replace(self, fresh));

        Ok(())
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }

        // The layout was valid when the block was allocated, so this cannot fail.
        if let Ok(layout) = Self::layout_for(self.capacity) {
            // SAFETY (PRECONDITIONS ARE MET): ptr was returned by `alloc` with this exact layout
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> core::fmt::Debug for RawBuf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuf")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
