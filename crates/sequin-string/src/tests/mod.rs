// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod aliasing;

use crate::ByteString;

/// Asserts the byte after the content is the terminator.
fn assert_terminated(s: &ByteString) {
    assert_eq!(s.as_bytes_with_nul().len(), s.len() + 1);
    assert_eq!(s.as_bytes_with_nul()[s.len()], 0, "missing terminator in {s:?}");
    assert!(s.len() <= s.capacity());
}
