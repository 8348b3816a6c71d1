// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::LinkedList;

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new_is_empty() {
    let list = LinkedList::<u32>::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.try_front().is_none());
    assert!(list.try_back().is_none());
}

// =============================================================================
// push_*() / pop_*()
// =============================================================================

#[test]
fn test_push_back_and_front() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list, [1, 2, 3]);
    assert_eq!(*list.front(), 1);
    assert_eq!(*list.back(), 3);
}

#[test]
fn test_pop_both_ends() {
    let mut list = LinkedList::from([1, 2, 3, 4]);

    assert_eq!(list.pop_front(), 1);
    assert_eq!(list.pop_back(), 4);
    assert_eq!(list, [2, 3]);

    assert_eq!(list.try_pop_back(), Some(3));
    assert_eq!(list.try_pop_front(), Some(2));
    assert_eq!(list.try_pop_front(), None);
    assert_eq!(list.try_pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn test_reuse_after_emptying() {
    let mut list = LinkedList::new();
    list.push_back('a');
    list.pop_back();
    list.push_front('b');

    assert_eq!(list, ['b']);
}

#[test]
#[should_panic(expected = "pop_back on an empty LinkedList")]
fn test_pop_back_empty_panics() {
    LinkedList::<u8>::new().pop_back();
}

#[test]
#[should_panic(expected = "pop_front on an empty LinkedList")]
fn test_pop_front_empty_panics() {
    LinkedList::<u8>::new().pop_front();
}

// =============================================================================
// front() / back()
// =============================================================================

#[test]
fn test_front_back_mut() {
    let mut list = LinkedList::from([1, 2]);
    *list.front_mut() = 10;
    *list.back_mut() += 5;

    assert_eq!(list, [10, 7]);
    assert_eq!(list.try_front_mut(), Some(&mut 10));
    assert_eq!(list.try_back_mut(), Some(&mut 7));
}

#[test]
#[should_panic(expected = "front on an empty LinkedList")]
fn test_front_empty_panics() {
    LinkedList::<u8>::new().front();
}

#[test]
#[should_panic(expected = "back_mut on an empty LinkedList")]
fn test_back_mut_empty_panics() {
    LinkedList::<u8>::new().back_mut();
}

// =============================================================================
// clear() / swap()
// =============================================================================

#[test]
fn test_clear_then_reuse() {
    let mut list = LinkedList::from([1, 2, 3]);
    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);

    list.push_back(4);
    assert_eq!(list, [4]);
}

#[test]
fn test_swap() {
    let mut a = LinkedList::from([1]);
    let mut b = LinkedList::from([2, 3]);
    a.swap(&mut b);

    assert_eq!(a, [2, 3]);
    assert_eq!(b, [1]);
}

// =============================================================================
// Clone / Eq / Debug / Hash
// =============================================================================

#[test]
fn test_clone_is_deep() {
    let original = LinkedList::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    copy.front_mut().push('!');

    assert_eq!(original.front(), "a");
    assert_eq!(copy.front(), "a!");
    assert_eq!(copy.len(), 2);
}

#[test]
fn test_clone_from_replaces_contents() {
    let mut target = LinkedList::from([9, 9, 9]);
    let source = LinkedList::from([1, 2]);
    target.clone_from(&source);

    assert_eq!(target, source);
}

#[test]
fn test_clone_from_own_copy_is_unchanged() {
    let mut list = LinkedList::from([1, 2, 3]);
    let snapshot = list.clone();
    list.clone_from(&snapshot);

    assert_eq!(list, [1, 2, 3]);
}

#[test]
fn test_eq_compares_length_and_order() {
    assert_eq!(LinkedList::from([1, 2]), LinkedList::from([1, 2]));
    assert_ne!(LinkedList::from([1, 2]), LinkedList::from([2, 1]));
    assert_ne!(LinkedList::from([1, 2]), LinkedList::from([1, 2, 3]));
    assert_eq!(LinkedList::from([1, 2]), *[1, 2].as_slice());
}

#[test]
fn test_debug() {
    let list = LinkedList::from(["x", "y"]);

    assert_eq!(format!("{list:?}"), r#"["x", "y"]"#);
}

#[test]
fn test_equal_lists_hash_equally() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(LinkedList::from([1, 2]));

    assert!(set.contains(&LinkedList::from([1, 2])));
    assert!(!set.contains(&LinkedList::from([1])));
}

#[test]
fn test_extend_and_collect() {
    let mut list: LinkedList<u8> = (1..=2).collect();
    list.extend([3, 4]);
    list.extend(&[5]);

    assert_eq!(list, [1, 2, 3, 4, 5]);
}

#[test]
fn test_list_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<LinkedList<u64>>();
}
