//! Genetic operators for tour permutations.
//!
//! Crossover and mutation operate on `&[usize]` index permutations so they
//! can be tested independently of the [`Tour`](super::Tour) wrapper. Both
//! preserve permutation validity for every random draw, which is the
//! defining correctness constraint of permutation-encoded search.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Order Crossover (OX) producing one child from two parent permutations.
///
/// Preserves a contiguous segment of `parent1` in place and the **relative
/// order** of the remaining cities as they appear in `parent2`.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Pick a random segment `[start, end]` with `start <= end`
/// 2. Copy `parent1[start..=end]` into the child at the same positions
/// 3. Walk `parent2` circularly starting after `end`; each city not yet in
///    the child fills the next free position, also scanned circularly
///    starting after `end`
///
/// When `start == end` only a single city is inherited from `parent1`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        in_segment[parent1[i]] = true;
    }

    // Fill from parent2, starting after segment end, wrapping around
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let city = parent2[(end + 1 + offset) % n];
        if !in_segment[city] {
            child[pos] = city;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Per-position swap mutation.
///
/// For each position independently, with probability `rate`, swaps the city
/// at that position with the city at a uniformly random position (which may
/// coincide, making it a no-op). Operates in place and always yields a
/// valid permutation since it only ever exchanges two existing positions.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(route: &mut [usize], rate: f64, rng: &mut R) {
    let n = route.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            route.swap(i, j);
        }
    }
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            perm.swap(i, j);
        }
        perm
    }

    // ---- Order crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let child = order_crossover(&[0], &[0], &mut rng);
        assert_eq!(child, vec![0]);
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];

        for _ in 0..20 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 2));
        }
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![3, 1, 4, 0, 2];
        for _ in 0..20 {
            // Both the segment and the fill come from the same ordering,
            // so the child must reproduce the parent exactly.
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_inherits_a_segment_from_parent1() {
        let mut rng = StdRng::seed_from_u64(7);
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![5, 4, 3, 2, 1, 0];

        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 6));
            // The copied segment is never empty, so at least one position
            // must agree with parent1.
            assert!(
                child.iter().zip(&p1).any(|(c, p)| c == p),
                "no position inherited from parent1: {child:?}"
            );
        }
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_preserves_permutation_at_full_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, 1.0, &mut rng);
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm: Vec<usize> = (0..10).collect();
        swap_mutation(&mut perm, 0.0, &mut rng);
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    // ---- Crossover + mutation pipeline ----

    #[test]
    fn test_full_pipeline_preserves_validity() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..20).collect();
        let mut p2: Vec<usize> = (0..20).collect();
        p2.reverse();

        for _ in 0..50 {
            let mut child = order_crossover(&p1, &p2, &mut rng);
            swap_mutation(&mut child, 0.3, &mut rng);
            assert!(is_valid_permutation(&child, 20), "pipeline child invalid: {child:?}");
        }
    }

    // ---- Random segment helper ----

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_ox_child_is_permutation(n in 2usize..50, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p1 = random_permutation(n, &mut rng);
            let p2 = random_permutation(n, &mut rng);
            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_valid_permutation(&child, n));
        }

        #[test]
        fn prop_swap_preserves_permutation(
            n in 1usize..50,
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut perm = random_permutation(n, &mut rng);
            swap_mutation(&mut perm, rate, &mut rng);
            prop_assert!(is_valid_permutation(&perm, n));
        }
    }
}
