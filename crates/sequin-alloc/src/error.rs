// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for sequin-alloc.

use core::alloc::Layout;

use thiserror::Error;

/// Error returned when a buffer cannot grow.
///
/// Containers return this from their `try_*` methods and leave their
/// contents untouched. The infallible methods route it through
/// [`AllocError::handle`].
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested capacity does not fit in a valid [`Layout`].
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator returned null.
    #[error("memory allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Size of the requested block in bytes.
        size: usize,
        /// Alignment of the requested block.
        align: usize,
    },
}

impl AllocError {
    /// Creates an [`AllocError::AllocFailed`] for `layout`.
    pub fn failed(layout: Layout) -> Self {
        Self::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        }
    }

    /// Returns the layout of the failed request, if the error came from the allocator.
    pub fn layout(&self) -> Option<Layout> {
        match *self {
            Self::CapacityOverflow => None,
            Self::AllocFailed { size, align } => Layout::from_size_align(size, align).ok(),
        }
    }

    /// Diverges the same way `Vec` does on growth failure.
    ///
    /// Allocation failures go to [`alloc::alloc::handle_alloc_error`], capacity
    /// overflow panics.
    #[cold]
    #[inline(never)]
    pub fn handle(self) -> ! {
        match self.layout() {
            Some(layout) => alloc::alloc::handle_alloc_error(layout),
            None => panic!("capacity overflow"),
        }
    }
}
