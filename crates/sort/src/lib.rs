mod algorithms;
mod error;

pub use algorithms::bucket_sort::BucketKey;
pub use algorithms::{
    bubble_sort, bucket_sort, comb_sort, counting_sort, gnome_sort, heap_sort, insertion_sort,
    quick_sort, radix_sort, selection_sort, shell_sort,
};
pub use error::{Result, SortError};

/// Which inputs an algorithm accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyDomain {
    /// Any totally ordered value.
    AnyOrd,
    /// Non-negative keys only; negative input is rejected with [`SortError`].
    NonNegative,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    CombSort,
    GnomeSort,
    InsertionSort,
    SelectionSort,
    ShellSort,
    HeapSort,
    QuickSort,
    BucketSort,
    CountingSort,
    RadixSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 11] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::CombSort,
    SortAlgorithm::GnomeSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::ShellSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::BucketSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::CombSort => "comb_sort",
        SortAlgorithm::GnomeSort => "gnome_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::ShellSort => "shell_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::BucketSort => "bucket_sort",
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::RadixSort => "radix_sort",
    }
}

/// Inverse of [`algorithm_name`]; also accepts the name without the `_sort` suffix.
pub fn algorithm_from_name(name: &str) -> Option<SortAlgorithm> {
    all_algorithms().iter().copied().find(|&algo| {
        let full = algorithm_name(algo);
        full == name || full.strip_suffix("_sort") == Some(name)
    })
}

/// Whether equal keys keep their relative input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSort
            | SortAlgorithm::InsertionSort
            | SortAlgorithm::BucketSort
            | SortAlgorithm::CountingSort
            | SortAlgorithm::RadixSort
    )
}

pub fn key_domain(algo: SortAlgorithm) -> KeyDomain {
    match algo {
        SortAlgorithm::BucketSort | SortAlgorithm::CountingSort | SortAlgorithm::RadixSort => {
            KeyDomain::NonNegative
        }
        _ => KeyDomain::AnyOrd,
    }
}

/// Sorts `data` in place with the chosen algorithm.
///
/// Comparison sorts never fail. Distribution sorts reject negative keys before
/// touching the slice.
pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) -> Result<()> {
    match algo {
        SortAlgorithm::BubbleSort => bubble_sort::sort(data),
        SortAlgorithm::CombSort => comb_sort::sort(data),
        SortAlgorithm::GnomeSort => gnome_sort::sort(data),
        SortAlgorithm::InsertionSort => insertion_sort::sort(data),
        SortAlgorithm::SelectionSort => selection_sort::sort(data),
        SortAlgorithm::ShellSort => shell_sort::sort(data),
        SortAlgorithm::HeapSort => heap_sort::sort(data),
        SortAlgorithm::QuickSort => quick_sort::sort(data),
        SortAlgorithm::BucketSort => {
            check_non_negative(data)?;
            return bucket_sort::sort(data);
        }
        SortAlgorithm::CountingSort => return counting_sort::sort(data),
        SortAlgorithm::RadixSort => return radix_sort::sort(data),
    }
    Ok(())
}

fn check_non_negative(data: &[i64]) -> Result<()> {
    match data.iter().position(|&x| x < 0) {
        Some(index) => Err(SortError::NegativeKey {
            index,
            key: data[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i64]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_i64(algo, &mut actual).unwrap();

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    /// Sorts `(key, tag)` records by key only, through each algorithm's keyed entry point.
    fn sort_records(algo: SortAlgorithm, data: &mut [(i64, usize)]) {
        let by_key = |a: &(i64, usize), b: &(i64, usize)| a.0.cmp(&b.0);
        match algo {
            SortAlgorithm::BubbleSort => bubble_sort::sort_by(data, by_key),
            SortAlgorithm::CombSort => comb_sort::sort_by(data, by_key),
            SortAlgorithm::GnomeSort => gnome_sort::sort_by(data, by_key),
            SortAlgorithm::InsertionSort => insertion_sort::sort_by(data, by_key),
            SortAlgorithm::SelectionSort => selection_sort::sort_by(data, by_key),
            SortAlgorithm::ShellSort => shell_sort::sort_by(data, by_key),
            SortAlgorithm::HeapSort => heap_sort::sort_by(data, by_key),
            SortAlgorithm::QuickSort => quick_sort::sort_by(data, by_key),
            SortAlgorithm::BucketSort => bucket_sort::sort_by_key(data, |r| r.0 as f64).unwrap(),
            SortAlgorithm::CountingSort => counting_sort::sort_by_key(data, |r| r.0).unwrap(),
            SortAlgorithm::RadixSort => radix_sort::sort_by_key(data, |r| r.0).unwrap(),
        }
    }

    #[test]
    fn algorithm_names_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            let name = algorithm_name(algo);
            assert!(seen.insert(name));
            assert_eq!(algorithm_from_name(name), Some(algo));
            assert_eq!(algorithm_from_name(name.trim_end_matches("_sort")), Some(algo));
        }
        assert_eq!(algorithm_from_name("bogo"), None);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![0, 1, i64::MAX, 0, i64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
            vec![64, 34, 25, 12, 22, 11, 90],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 1024] {
            let data: Vec<i64> = (0..size)
                .map(|_| rng.random_range(0..=i64::MAX))
                .collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024] {
            let data: Vec<i64> = (0..size).map(|_| rng.random_range(0..16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn comparison_sorts_accept_negative_values() {
        let data = [3_i64, -9, 0, i64::MIN, 12, -1, 3];
        let mut expected = data.to_vec();
        expected.sort_unstable();
        for &algo in all_algorithms() {
            if key_domain(algo) != KeyDomain::AnyOrd {
                continue;
            }
            let mut actual = data.to_vec();
            sort_i64(algo, &mut actual).unwrap();
            assert_eq!(actual, expected, "algorithm={}", algorithm_name(algo));
        }
    }

    #[test]
    fn distribution_sorts_reject_negative_values_untouched() {
        let data = [3_i64, 8, -4, 1];
        for &algo in all_algorithms() {
            if key_domain(algo) != KeyDomain::NonNegative {
                continue;
            }
            let mut actual = data.to_vec();
            let err = sort_i64(algo, &mut actual).unwrap_err();
            assert_eq!(
                err,
                SortError::NegativeKey { index: 2, key: -4 },
                "algorithm={}",
                algorithm_name(algo)
            );
            assert_eq!(actual, data);
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1DE0_2026);
        let data: Vec<i64> = (0..300).map(|_| rng.random_range(0..1_000)).collect();
        for &algo in all_algorithms() {
            let mut once = data.clone();
            sort_i64(algo, &mut once).unwrap();
            let mut twice = once.clone();
            sort_i64(algo, &mut twice).unwrap();
            assert_eq!(once, twice, "algorithm={}", algorithm_name(algo));
        }
    }

    #[test]
    fn stable_algorithms_keep_equal_keys_in_order() {
        let mut rng = StdRng::seed_from_u64(0x57AB_2026);
        for &size in &[2_usize, 17, 200, 1500] {
            let records: Vec<(i64, usize)> =
                (0..size).map(|tag| (rng.random_range(0..8), tag)).collect();

            for &algo in all_algorithms() {
                let mut actual = records.clone();
                sort_records(algo, &mut actual);

                assert!(
                    actual.windows(2).all(|w| w[0].0 <= w[1].0),
                    "algorithm={} size={size}",
                    algorithm_name(algo)
                );
                let mut seen: Vec<usize> = actual.iter().map(|r| r.1).collect();
                seen.sort_unstable();
                assert!(seen.iter().copied().eq(0..size));

                if is_stable(algo) {
                    let mut expected = records.clone();
                    expected.sort_by_key(|r| r.0);
                    assert_eq!(actual, expected, "algorithm={} size={size}", algorithm_name(algo));
                }
            }
        }
    }

    #[test]
    fn floats_through_sort_by() {
        let data = [0.42, -0.32, 0.33, 0.52, -1.5, 0.47, 0.51];
        let mut expected = data.to_vec();
        expected.sort_by(f64::total_cmp);

        let mut actual = data.to_vec();
        heap_sort::sort_by(&mut actual, f64::total_cmp);
        assert_eq!(actual, expected);

        let mut actual = data.to_vec();
        quick_sort::sort_by(&mut actual, f64::total_cmp);
        assert_eq!(actual, expected);
    }
}
