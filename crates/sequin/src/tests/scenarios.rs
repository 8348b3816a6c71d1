// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Flows that cross container boundaries.

use sequin_test_utils::DropCounter;

use crate::{ByteString, DynArray, LinkedList, Queue, Stack};

#[test]
fn test_array_of_strings_grows_and_clones_deeply() {
    let mut names: DynArray<ByteString> = DynArray::new();
    for name in ["ada", "grace", "linus", "ken", "dennis"] {
        names.push(ByteString::from(name));
    }
    assert_eq!(names.capacity(), 8);

    let snapshot = names.clone();
    names[0].push_bytes(b" lovelace");
    names.remove(1);

    assert_eq!(names[0], "ada lovelace");
    assert_eq!(names.len(), 4);
    assert_eq!(snapshot[0], "ada");
    assert_eq!(snapshot[1], "grace");
    assert!(names.iter().all(|s| s.as_bytes_with_nul().last() == Some(&0)));
}

#[test]
fn test_string_built_from_list_of_words() {
    let words: LinkedList<ByteString> = ["sequence", "of", "words"]
        .into_iter()
        .map(ByteString::from)
        .collect();

    let mut sentence = ByteString::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            sentence += b' ';
        }
        sentence += word;
    }

    assert_eq!(sentence, "sequence of words");
    assert_eq!(sentence.substr(9, 2), "of");
}

#[test]
fn test_queue_of_arrays_preserves_order() {
    let mut queue = Queue::new();
    for chunk in [[1, 2], [3, 4], [5, 6]] {
        queue.push(DynArray::from(chunk));
    }

    let mut flattened = DynArray::new();
    while let Some(chunk) = queue.try_pop() {
        flattened.extend_from_slice(&chunk);
    }

    assert_eq!(flattened, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_stack_reverses_string_bytes() {
    let source = ByteString::from("stressed");
    let mut stack = Stack::new();
    for &byte in source.iter() {
        stack.push(byte);
    }

    let mut reversed = ByteString::with_capacity(source.len());
    while let Some(byte) = stack.try_pop() {
        reversed.push(byte);
    }

    assert_eq!(reversed, "desserts");
    assert_eq!(reversed.capacity(), 8);
}

#[test]
fn test_elements_moved_between_containers_drop_once() {
    let counter = DropCounter::new();
    let mut arr = DynArray::new();
    for i in 0..6 {
        arr.push(counter.track(i));
    }

    let mut list = LinkedList::new();
    for value in arr {
        list.push_front(value);
    }
    assert_eq!(counter.live(), 6);
    assert_eq!(*list.front().get(), 5);

    let mut stack = Stack::new();
    while let Some(value) = list.try_pop_back() {
        stack.push(value);
    }
    assert_eq!(*stack.top().get(), 5);

    drop(stack);
    assert_eq!(counter.created(), 6);
    assert_eq!(counter.dropped(), 6);
}
