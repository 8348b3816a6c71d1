// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sequin_test_utils::DropCounter;

use crate::DynArray;

#[test]
fn test_into_iter_yields_in_order() {
    let arr = DynArray::from([1, 2, 3]);
    let collected: Vec<_> = arr.into_iter().collect();

    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_into_iter_double_ended() {
    let mut iter = DynArray::from(['a', 'b', 'c', 'd']).into_iter();

    assert_eq!(iter.next(), Some('a'));
    assert_eq!(iter.next_back(), Some('d'));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.as_slice(), &['b', 'c']);
    assert_eq!(iter.next_back(), Some('c'));
    assert_eq!(iter.next(), Some('b'));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_drops_remaining() {
    let counter = DropCounter::new();
    let mut arr = DynArray::new();
    for i in 0..5 {
        arr.push(counter.track(i));
    }

    let mut iter = arr.into_iter();
    let first = iter.next().expect("Failed to get first element");
    assert_eq!(*first.get(), 0);
    drop(iter);

    assert_eq!(counter.dropped(), 4);
    drop(first);
    assert_eq!(counter.live(), 0);
}

#[test]
fn test_into_iter_of_empty() {
    let mut iter = DynArray::<String>::new().into_iter();

    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert!(iter.next().is_none());
}
