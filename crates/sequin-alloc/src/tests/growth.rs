// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::growth::{GROWTH_FACTOR, MIN_NON_ZERO_CAPACITY, next_capacity};

// =============================================================================
// next_capacity()
// =============================================================================

#[test]
fn test_next_capacity_from_empty_uses_floor() {
    assert_eq!(next_capacity(0, 1), MIN_NON_ZERO_CAPACITY);
    assert_eq!(next_capacity(0, 3), 4);
    assert_eq!(next_capacity(0, 4), 4);
}

#[test]
fn test_next_capacity_from_empty_respects_large_requirement() {
    assert_eq!(next_capacity(0, 11), 11);
}

#[test]
fn test_next_capacity_doubles() {
    assert_eq!(next_capacity(4, 5), 4 * GROWTH_FACTOR);
    assert_eq!(next_capacity(8, 9), 16);
    assert_eq!(next_capacity(1, 2), 2);
}

#[test]
fn test_next_capacity_jumps_to_requirement() {
    // Doubling would only reach 8, so the requirement wins.
    assert_eq!(next_capacity(4, 13), 13);
}

#[test]
fn test_next_capacity_saturates() {
    assert_eq!(next_capacity(usize::MAX / 2 + 1, usize::MAX / 2 + 2), usize::MAX);
}

#[test]
fn test_push_sequence_reallocates_logarithmically() {
    let mut capacity = 0;
    let mut reallocations = 0;

    for len in 1..=10_000usize {
        if len > capacity {
            capacity = next_capacity(capacity, len);
            reallocations += 1;
        }
        assert!(capacity >= len);
    }

    // 4, 8, 16, ..., 16384
    assert_eq!(reallocations, 13);
}

proptest! {
    #[test]
    fn prop_next_capacity_covers_requirement(current in 0..=1usize << 40, extra in 1..=1usize << 20) {
        let required = current + extra;
        let next = next_capacity(current, required);

        prop_assert!(next >= required);
        prop_assert!(next >= MIN_NON_ZERO_CAPACITY);
        prop_assert!(next == required || next == (current * GROWTH_FACTOR).max(MIN_NON_ZERO_CAPACITY));
    }
}
