//! Fibonacci oracle: pure lookups over the canonical sequence 1, 1, 2, 3, 5, 8, …
//!
//! All block sizes in the heap originate here, either as initial
//! decomposition elements or as split-produced predecessors.

use crate::constants::{FIB_TABLE, MAX_BLOCK_SIZE};

/// Smallest Fibonacci number that is >= `size`.
///
/// Returns 1 for `size <= 1`.
///
/// # Panics
///
/// Panics if `size` exceeds [`MAX_BLOCK_SIZE`], the largest Fibonacci
/// number representable in `u64`.
#[must_use]
pub fn closest_fibonacci(size: u64) -> u64 {
    if size <= 1 {
        return 1;
    }
    assert!(
        size <= MAX_BLOCK_SIZE,
        "no Fibonacci number >= {size} fits in u64"
    );
    FIB_TABLE
        .into_iter()
        .find(|&f| f >= size)
        .unwrap_or(MAX_BLOCK_SIZE)
}

/// The Fibonacci number immediately preceding `closest_fibonacci(size)`
/// in the canonical sequence.
///
/// Returns 0 for `size <= 1`.
///
/// # Panics
///
/// Panics if `size` exceeds [`MAX_BLOCK_SIZE`].
#[must_use]
pub fn previous_fibonacci(size: u64) -> u64 {
    if size <= 1 {
        return 0;
    }
    assert!(
        size <= MAX_BLOCK_SIZE,
        "no Fibonacci number >= {size} fits in u64"
    );
    let pos = FIB_TABLE
        .iter()
        .position(|&f| f >= size)
        .unwrap_or(FIB_TABLE.len() - 1);
    FIB_TABLE[pos - 1]
}

/// Whether `{a, b}`, taken as a set, equals `{F(k), F(k+1)}` for some
/// consecutive terms of the canonical sequence.
///
/// Symmetric in its arguments. No value is consecutive with itself:
/// `is_consecutive_pair(x, x)` is false for every `x`, including the
/// 1, 1 seed pair.
#[must_use]
pub fn is_consecutive_pair(a: u64, b: u64) -> bool {
    a != b
        && FIB_TABLE
            .windows(2)
            .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
}

/// Ascending Fibonacci values starting at 2 that are <= `upper_bound`.
///
/// The two unit seed terms are folded away; the result is the set of
/// candidate block sizes for a heap with the given capacity bound. The
/// sum of the values generally exceeds the bound; this is not a
/// partition of it.
#[must_use]
pub fn generate(upper_bound: u64) -> Vec<u64> {
    FIB_TABLE
        .into_iter()
        .skip(2)
        .take_while(|&f| f <= upper_bound)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_small_sizes() {
        assert_eq!(closest_fibonacci(0), 1);
        assert_eq!(closest_fibonacci(1), 1);
        assert_eq!(closest_fibonacci(2), 2);
        assert_eq!(closest_fibonacci(3), 3);
        assert_eq!(closest_fibonacci(4), 5);
        assert_eq!(closest_fibonacci(7), 8);
        assert_eq!(closest_fibonacci(8), 8);
        assert_eq!(closest_fibonacci(12), 13);
        assert_eq!(closest_fibonacci(20), 21);
    }

    #[test]
    fn closest_exact_values_map_to_themselves() {
        for f in generate(100_000) {
            assert_eq!(closest_fibonacci(f), f);
        }
    }

    #[test]
    fn closest_largest() {
        assert_eq!(closest_fibonacci(MAX_BLOCK_SIZE), MAX_BLOCK_SIZE);
    }

    #[test]
    #[should_panic(expected = "fits in u64")]
    fn closest_beyond_table_panics() {
        let _ = closest_fibonacci(MAX_BLOCK_SIZE + 1);
    }

    #[test]
    fn previous_small_sizes() {
        assert_eq!(previous_fibonacci(0), 0);
        assert_eq!(previous_fibonacci(1), 0);
        assert_eq!(previous_fibonacci(2), 1);
        assert_eq!(previous_fibonacci(3), 2);
        assert_eq!(previous_fibonacci(4), 3);
        assert_eq!(previous_fibonacci(5), 3);
        assert_eq!(previous_fibonacci(8), 5);
        assert_eq!(previous_fibonacci(13), 8);
    }

    #[test]
    fn previous_is_predecessor_of_closest() {
        for size in 2..500u64 {
            let closest = closest_fibonacci(size);
            let prev = previous_fibonacci(size);
            assert!(prev < closest, "prev({size}) must be below closest({size})");
            assert!(is_consecutive_pair(prev, closest));
        }
    }

    #[test]
    fn consecutive_pairs() {
        assert!(is_consecutive_pair(1, 2));
        assert!(is_consecutive_pair(2, 1));
        assert!(is_consecutive_pair(2, 3));
        assert!(is_consecutive_pair(3, 5));
        assert!(is_consecutive_pair(5, 8));
        assert!(is_consecutive_pair(8, 13));
    }

    #[test]
    fn non_consecutive_pairs() {
        assert!(!is_consecutive_pair(1, 1));
        assert!(!is_consecutive_pair(2, 2));
        assert!(!is_consecutive_pair(5, 5));
        assert!(!is_consecutive_pair(2, 5));
        assert!(!is_consecutive_pair(5, 13));
        assert!(!is_consecutive_pair(0, 1));
        assert!(!is_consecutive_pair(4, 5));
    }

    #[test]
    fn generate_bound_ten() {
        assert_eq!(generate(10), vec![2, 3, 5, 8]);
    }

    #[test]
    fn generate_degenerate_bounds() {
        assert_eq!(generate(0), Vec::<u64>::new());
        assert_eq!(generate(1), Vec::<u64>::new());
        assert_eq!(generate(2), vec![2]);
    }

    #[test]
    fn generate_default_capacity() {
        let values = generate(16_000);
        assert_eq!(values.first(), Some(&2));
        assert_eq!(values.last(), Some(&10_946));
        assert!(values.iter().all(|&f| f <= 16_000));
    }
}
