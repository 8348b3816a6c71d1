// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AllocError, RawBuf};

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new_is_unallocated() {
    let buf = RawBuf::<u32>::new();

    assert_eq!(buf.capacity(), 0);
    assert!(!buf.is_allocated());
}

#[test]
fn test_new_zst_has_max_capacity() {
    let buf = RawBuf::<()>::new();

    assert_eq!(buf.capacity(), usize::MAX);
    assert!(!buf.is_allocated());
}

// =============================================================================
// try_with_capacity()
// =============================================================================

#[test]
fn test_try_with_capacity() {
    let buf = RawBuf::<u64>::try_with_capacity(10).expect("Failed to try_with_capacity(10)");

    assert_eq!(buf.capacity(), 10);
    assert!(buf.is_allocated());
    assert_eq!(buf.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
}

#[test]
fn test_try_with_capacity_zero_does_not_allocate() {
    let buf = RawBuf::<u64>::try_with_capacity(0).expect("Failed to try_with_capacity(0)");

    assert_eq!(buf.capacity(), 0);
    assert!(!buf.is_allocated());
}

#[test]
fn test_try_with_capacity_overflow() {
    let result = RawBuf::<u64>::try_with_capacity(usize::MAX / 4);

    assert!(matches!(result, Err(AllocError::CapacityOverflow)));
}

// =============================================================================
// try_relocate()
// =============================================================================

#[test]
fn test_try_relocate_preserves_live_prefix() {
    let mut buf = RawBuf::<u32>::try_with_capacity(4).expect("Failed to try_with_capacity(4)");

    unsafe {
        for i in 0..3 {
            buf.as_ptr().add(i).write(i as u32 * 10);
        }

        buf.try_relocate(8, 3).expect("Failed to try_relocate(..)");

        assert_eq!(buf.capacity(), 8);
        for i in 0..3 {
            assert_eq!(buf.as_ptr().add(i).read(), i as u32 * 10);
        }
    }
}

#[test]
fn test_try_relocate_from_unallocated() {
    let mut buf = RawBuf::<u8>::new();

    unsafe { buf.try_relocate(4, 0) }.expect("Failed to try_relocate(..)");

    assert_eq!(buf.capacity(), 4);
    assert!(buf.is_allocated());
}

#[test]
fn test_try_relocate_failure_leaves_buffer_intact() {
    let mut buf = RawBuf::<u64>::try_with_capacity(2).expect("Failed to try_with_capacity(2)");
    let before = buf.as_ptr();

    unsafe {
        buf.as_ptr().write(99);

        let result = buf.try_relocate(usize::MAX / 4, 1);
        assert!(matches!(result, Err(AllocError::CapacityOverflow)));

        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.as_ptr(), before);
        assert_eq!(buf.as_ptr().read(), 99);
    }
}

#[test]
fn test_try_relocate_zst_is_noop() {
    let mut buf = RawBuf::<()>::new();

    unsafe { buf.try_relocate(1000, 10) }.expect("Failed to try_relocate(..)");

    assert_eq!(buf.capacity(), usize::MAX);
}
