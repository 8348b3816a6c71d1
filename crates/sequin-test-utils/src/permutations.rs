// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Calls `callback` with every permutation of `[0, 1, ..., len - 1]`.
///
/// Uses the iterative form of Heap's algorithm, so each permutation differs
/// from the previous one by a single swap.
///
/// # Example
/// ```
/// use sequin_test_utils::index_permutations;
///
/// let mut seen = Vec::new();
/// index_permutations(3, |perm| seen.push(perm.to_vec()));
///
/// assert_eq!(seen.len(), 6); // 3! = 6
/// assert_eq!(seen[0], [0, 1, 2]);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    callback(&indices);

    let mut i = 1;
    while i < len {
        if counters[i] < i {
            if i % 2 == 0 {
                indices.swap(0, i);
            } else {
                indices.swap(counters[i], i);
            }
            callback(&indices);

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_index_permutations_counts() {
        for (len, expected) in [(0, 0), (1, 1), (2, 2), (3, 6), (4, 24), (5, 120)] {
            let mut count = 0;
            index_permutations(len, |_| count += 1);
            assert_eq!(count, expected, "{}! should be {}", len, expected);
        }
    }

    #[test]
    fn test_index_permutations_are_distinct() {
        let mut seen = HashSet::new();
        index_permutations(4, |perm| {
            assert!(seen.insert(perm.to_vec()), "duplicate permutation {perm:?}");
        });
        assert_eq!(seen.len(), 24);
    }
}
