// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Geometric growth policy.
//!
//! Both the dynamic array and the byte string grow with the same rule:
//!
//! ```text
//! new_capacity = max(required, if current == 0 { 4 } else { current * 2 })
//! ```
//!
//! The floor and the factor are observable through `capacity()` and are
//! part of the containers' contract.

/// Capacity of the first allocation of an empty buffer.
pub const MIN_NON_ZERO_CAPACITY: usize = 4;

/// Factor applied to the current capacity on every growth step.
pub const GROWTH_FACTOR: usize = 2;

/// Returns the capacity a buffer of `current` slots grows to when it needs
/// room for at least `required` slots.
///
/// Saturates instead of overflowing; an unrepresentable result is caught
/// later as [`AllocError::CapacityOverflow`](crate::AllocError::CapacityOverflow)
/// when the layout is computed.
///
/// # Example
///
/// ```rust
/// use sequin_alloc::growth::next_capacity;
///
/// assert_eq!(next_capacity(0, 1), 4);
/// assert_eq!(next_capacity(4, 5), 8);
/// assert_eq!(next_capacity(4, 20), 20);
/// ```
#[inline]
pub const fn next_capacity(current: usize, required: usize) -> usize {
    let doubled = if current == 0 {
        MIN_NON_ZERO_CAPACITY
    } else {
        current.saturating_mul(GROWTH_FACTOR)
    };

    if doubled > required { doubled } else { required }
}
