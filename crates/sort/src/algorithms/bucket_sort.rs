use std::cmp::Ordering;

use crate::{Result, SortError};

use super::insertion_sort;

/// Maps an element to the numeric key used to pick its bucket.
///
/// The mapping must be monotone with respect to the element's own ordering.
pub trait BucketKey {
    fn bucket_key(&self) -> f64;
}

impl BucketKey for f64 {
    fn bucket_key(&self) -> f64 {
        *self
    }
}

impl BucketKey for f32 {
    fn bucket_key(&self) -> f64 {
        f64::from(*self)
    }
}

impl BucketKey for u32 {
    fn bucket_key(&self) -> f64 {
        f64::from(*self)
    }
}

impl BucketKey for u64 {
    fn bucket_key(&self) -> f64 {
        *self as f64
    }
}

impl BucketKey for i64 {
    fn bucket_key(&self) -> f64 {
        *self as f64
    }
}

/// Sorts finite, non-negative values. Buckets are ordered by the values themselves,
/// so integer inputs beyond `f64` precision still come out exactly ordered.
pub fn sort<T>(data: &mut [T]) -> Result<()>
where
    T: BucketKey + PartialOrd + Clone,
{
    bucket_sort(data, T::bucket_key, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    })
}

/// Stable bucket sort keyed by `key`, which must be finite and non-negative.
pub fn sort_by_key<T, F>(data: &mut [T], key: F) -> Result<()>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    bucket_sort(data, &key, |a, b| key(a).total_cmp(&key(b)))
}

/// One bucket per element; bucket `i` covers `[i * max / n, (i + 1) * max / n)`
/// with the maximum itself folded into the last bucket.
fn bucket_sort<T, K, C>(data: &mut [T], key: K, mut compare: C) -> Result<()>
where
    T: Clone,
    K: Fn(&T) -> f64,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut max = 0.0_f64;
    for (index, x) in data.iter().enumerate() {
        let k = key(x);
        if !k.is_finite() || k < 0.0 {
            return Err(SortError::InvalidBucketKey { index, key: k });
        }
        max = max.max(k);
    }

    let len = data.len();
    if len < 2 || max == 0.0 {
        return Ok(());
    }

    let width = max / len as f64;
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); len];
    for x in data.iter() {
        let idx = ((key(x) / width) as usize).min(len - 1);
        buckets[idx].push(x.clone());
    }

    let mut out = 0usize;
    for mut bucket in buckets {
        insertion_sort::sort_by(&mut bucket, &mut compare);
        for x in bucket {
            data[out] = x;
            out += 1;
        }
    }
    Ok(())
}
