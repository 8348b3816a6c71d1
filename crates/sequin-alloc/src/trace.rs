// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Structured logging hooks for buffer growth.
//!
//! With the `tracing` feature enabled these emit events through the
//! [`tracing`](https://docs.rs/tracing) crate. Without it they are empty
//! inline functions and compile to nothing.
//!
//! | Hook                  | Level   | Fields                                        |
//! |-----------------------|---------|-----------------------------------------------|
//! | [`on_grow`]           | `TRACE` | `container`, `old_capacity`, `new_capacity`, `len` |
//! | [`on_alloc_failure`]  | `DEBUG` | `container`, `error`                          |

use crate::error::AllocError;

/// Records a successful reallocation of `container` storage.
#[inline(always)]
pub fn on_grow(container: &'static str, old_capacity: usize, new_capacity: usize, len: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(container, old_capacity, new_capacity, len, "storage reallocated");

    #[cfg(not(feature = "tracing"))]
    let _ = (container, old_capacity, new_capacity, len);
}

/// Records a growth attempt of `container` that failed with `error`.
#[inline(always)]
pub fn on_alloc_failure(container: &'static str, error: &AllocError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(container, %error, "storage growth failed");

    #[cfg(not(feature = "tracing"))]
    let _ = (container, error);
}
