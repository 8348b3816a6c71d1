// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Inserting a string's own bytes into itself.

use super::assert_terminated;
use crate::ByteString;

// =============================================================================
// insert_self() / insert_from_within() / extend_from_within()
// =============================================================================

#[test]
fn test_insert_self_middle() {
    let mut s = ByteString::from("ab");
    s.insert_self(1);

    assert_eq!(s, "aabb");
    assert_terminated(&s);
}

#[test]
fn test_insert_self_ends() {
    let mut front = ByteString::from("ab");
    front.insert_self(0);
    assert_eq!(front, "abab");

    let mut back = ByteString::from("ab");
    back.insert_self(2);
    assert_eq!(back, "abab");
}

#[test]
fn test_insert_self_empty_is_noop() {
    let mut s = ByteString::new();
    s.insert_self(0);

    assert!(s.is_empty());
    assert_eq!(s.capacity(), 0);
}

#[test]
fn test_insert_from_within() {
    let mut s = ByteString::from("hello");
    s.insert_from_within(0, 2..);

    assert_eq!(s, "llohello");
    assert_terminated(&s);
}

#[test]
fn test_insert_from_within_inclusive_range() {
    let mut s = ByteString::from("abcdef");
    s.insert_from_within(3, 0..=1);

    assert_eq!(s, "abcabdef");
}

#[test]
fn test_extend_from_within() {
    let mut s = ByteString::from("abc");
    s.extend_from_within(1..3);
    s.extend_from_within(..);

    assert_eq!(s, "abcbcabcbc");
    assert_terminated(&s);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_insert_from_within_bad_range_panics() {
    let mut s = ByteString::from("abc");
    s.insert_from_within(0, 2..10);
}

#[test]
#[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
fn test_insert_self_past_end_panics() {
    ByteString::from("abc").insert_self(4);
}

// =============================================================================
// insert_raw()
// =============================================================================

#[test]
fn test_insert_raw_aliased_with_reallocation() {
    let mut s = ByteString::from("hello");
    assert_eq!(s.capacity(), 5);

    let src = s.as_ptr();
    // SAFETY: `src` points at the 5 live bytes of `s`
    unsafe { s.insert_raw(0, src, 5) };

    let mut expected = ByteString::from("hello");
    expected.insert_bytes(0, b"hello");

    assert_eq!(s, expected);
    assert_eq!(s, "hellohello");
    assert_terminated(&s);
}

#[test]
fn test_insert_raw_aliased_without_reallocation() {
    let mut s = ByteString::with_capacity(32);
    s.push_bytes(b"hello");

    // SAFETY: bytes 1..4 of `s` are live
    let src = unsafe { s.as_ptr().add(1) };
    unsafe { s.insert_raw(2, src, 3) };

    assert_eq!(s, "heellllo");
    assert_eq!(s.capacity(), 32);
}

#[test]
fn test_insert_raw_aliased_suffix_into_middle() {
    let mut s = ByteString::from("abcdef");

    // SAFETY: bytes 3..6 of `s` are live
    let src = unsafe { s.as_ptr().add(3) };
    unsafe { s.insert_raw(1, src, 3) };

    assert_eq!(s, "adefbcdef");
}

#[test]
fn test_insert_raw_pointer_at_terminator_is_aliased() {
    let mut s = ByteString::from("ab");

    // SAFETY: the terminator byte of `s` is readable
    let src = unsafe { s.as_ptr().add(s.len()) };
    unsafe { s.insert_raw(1, src, 1) };

    assert_eq!(s, b"a\0b");
    assert_terminated(&s);
}

#[test]
fn test_insert_raw_external() {
    let mut s = ByteString::from("ad");
    let external = *b"bc";

    // SAFETY: `external` holds 2 readable bytes
    unsafe { s.insert_raw(1, external.as_ptr(), external.len()) };

    assert_eq!(s, "abcd");
}

#[test]
fn test_insert_raw_zero_count_is_noop() {
    let mut s = ByteString::new();

    // SAFETY: nothing is read
    unsafe { s.insert_raw(0, core::ptr::null(), 0) };

    assert_eq!(s.capacity(), 0);
}
