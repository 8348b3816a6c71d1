// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Deref, DerefMut},
};

use crate::ByteString;

impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ByteString {
    /// Copies into storage sized exactly to `self.len()`.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| err.handle())
    }

    fn clone_from(&mut self, source: &Self) {
        self.try_clone_from(source).unwrap_or_else(|err| err.handle())
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for ByteString {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_bytes()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl Extend<u8> for ByteString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len().saturating_add(lower));

        for byte in iter {
            self.push(byte);
        }
    }
}

impl<'a> Extend<&'a u8> for ByteString {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteString {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ByteString> for str {
    fn eq(&self, other: &ByteString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ByteString> for &str {
    fn eq(&self, other: &ByteString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

// =============================================================================
// Concatenation
// =============================================================================

impl AddAssign<&ByteString> for ByteString {
    fn add_assign(&mut self, rhs: &ByteString) {
        self.push_string(rhs);
    }
}

impl AddAssign<&[u8]> for ByteString {
    fn add_assign(&mut self, rhs: &[u8]) {
        self.push_bytes(rhs);
    }
}

impl AddAssign<&str> for ByteString {
    fn add_assign(&mut self, rhs: &str) {
        self.push_bytes(rhs.as_bytes());
    }
}

impl AddAssign<u8> for ByteString {
    fn add_assign(&mut self, rhs: u8) {
        self.push(rhs);
    }
}

impl Add<&ByteString> for ByteString {
    type Output = ByteString;

    fn add(mut self, rhs: &ByteString) -> ByteString {
        self += rhs;
        self
    }
}

impl Add<&[u8]> for ByteString {
    type Output = ByteString;

    fn add(mut self, rhs: &[u8]) -> ByteString {
        self += rhs;
        self
    }
}

impl Add<&str> for ByteString {
    type Output = ByteString;

    fn add(mut self, rhs: &str) -> ByteString {
        self += rhs;
        self
    }
}

impl Add<&ByteString> for &ByteString {
    type Output = ByteString;

    fn add(self, rhs: &ByteString) -> ByteString {
        self.clone() + rhs
    }
}

impl Add<&[u8]> for &ByteString {
    type Output = ByteString;

    fn add(self, rhs: &[u8]) -> ByteString {
        self.clone() + rhs
    }
}

impl Add<&str> for &ByteString {
    type Output = ByteString;

    fn add(self, rhs: &str) -> ByteString {
        self.clone() + rhs
    }
}

impl Add<&ByteString> for &str {
    type Output = ByteString;

    fn add(self, rhs: &ByteString) -> ByteString {
        ByteString::from(self) + rhs
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for ByteString {
    /// Writes the content as UTF-8, replacing invalid sequences with U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Write for ByteString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.try_push_bytes(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
