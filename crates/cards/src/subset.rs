// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinations iteration.

/// Calls the given closure for each k-subset of `0..n` in lexicographic order.
///
/// Each subset is passed as a sorted slice of k positions, no calls are made
/// if `k == 0` or `k > n`.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Returns the binomial coefficient for n choose k, `None` on overflow.
pub fn nck(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    (0..k).try_fold(1usize, |acc, i| acc.checked_mul(n - i).map(|v| v / (i + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nck() {
        assert_eq!(nck(2, 3), Some(0));
        assert_eq!(nck(7, 5), Some(21));
        assert_eq!(nck(52, 52), Some(1));

        // The intermediate products overflow before the result does.
        assert_eq!(nck(100, 50), None);
        assert_eq!(nck(usize::MAX, 2), None);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), Some(v)));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), Some(v)));
    }

    #[test]
    fn ksubset_order() {
        let mut subsets = Vec::new();
        for_each_ksubset(5, 3, |s| subsets.push(s.to_vec()));

        assert_eq!(Some(subsets.len()), nck(5, 3));
        assert_eq!(subsets[0], [0, 1, 2]);
        assert_eq!(subsets[1], [0, 1, 3]);
        assert_eq!(subsets[2], [0, 2, 3]);
        assert_eq!(subsets[9], [2, 3, 4]);

        // Every subset is sorted and unique.
        assert!(subsets.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        subsets.dedup();
        assert_eq!(Some(subsets.len()), nck(5, 3));
    }

    #[test]
    fn ksubset_edges() {
        let mut count = 0;
        for_each_ksubset(5, 5, |s| {
            assert_eq!(s, [0, 1, 2, 3, 4]);
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_ksubset(4, 5, |_| count += 1);
        for_each_ksubset(4, 0, |_| count += 1);
        assert_eq!(count, 0);

        for (n, k) in [(7, 5), (10, 1), (20, 4)] {
            count = 0;
            for_each_ksubset(n, k, |s| {
                assert_eq!(s.len(), k);
                assert!(s.iter().all(|&p| p < n));
                count += 1;
            });
            assert_eq!(Some(count), nck(n, k));
        }
    }
}
