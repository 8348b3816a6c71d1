// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{error::AllocError, raw_buf::RawBuf};

/// Test behaviour for injecting allocation failures into containers.
///
/// Only available with the `test_utils` feature. Containers consult it right
/// before every allocation; the behaviour is sticky and stays active until
/// changed back to [`AllocBehaviour::None`].
///
/// # Example
///
/// ```rust
/// use sequin_alloc::{AllocBehaviour, AllocError};
///
/// let behaviour = AllocBehaviour::FailAtAlloc;
/// let result = behaviour.check::<u32>(8);
///
/// assert!(matches!(result, Err(AllocError::AllocFailed { size: 32, .. })));
/// assert!(AllocBehaviour::None.check::<u32>(8).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every allocation fails with [`AllocError::AllocFailed`].
    FailAtAlloc,
}

impl AllocBehaviour {
    /// Returns the error an allocation of `capacity` slots of `T` should report, if any.
    pub fn check<T>(&self, capacity: usize) -> Result<(), AllocError> {
        match self {
            Self::None => Ok(()),
            Self::FailAtAlloc => Err(match RawBuf::<T>::layout_for(capacity) {
                Ok(layout) => AllocError::failed(layout),
                Err(err) => err,
            }),
        }
    }
}
