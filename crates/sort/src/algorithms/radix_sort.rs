use crate::Result;

use super::common;

const RADIX_BITS: usize = 8;
const RADIX: usize = 1 << RADIX_BITS;
const DIGIT_MASK: u64 = (RADIX as u64) - 1;

pub fn sort(data: &mut [i64]) -> Result<()> {
    sort_by_key(data, |&x| x)
}

/// LSD radix sort on base-256 digits of non-negative integer keys. Stable.
pub fn sort_by_key<T, F>(data: &mut [T], key: F) -> Result<()>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let Some(max) = common::max_non_negative_key(data, &key)? else {
        return Ok(());
    };
    sort_validated(data, &key, max);
    Ok(())
}

/// Caller guarantees every key lies in `0..=max`.
pub(crate) fn sort_validated<T, F>(data: &mut [T], key: &F, max: i64)
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    if data.len() < 2 {
        return;
    }
    let passes = radix_passes(max as u64);
    if passes == 0 {
        return;
    }

    let mut counts = [0usize; RADIX];
    let mut src = data.to_vec();
    for pass in 0..passes {
        let shift = pass * RADIX_BITS;

        counts.fill(0);
        for x in data.iter() {
            counts[digit(key(x), shift)] += 1;
        }
        common::prefix_sum(&mut counts);

        src.clone_from_slice(data);
        for x in &src {
            let d = digit(key(x), shift);
            data[counts[d]] = x.clone();
            counts[d] += 1;
        }
    }
}

#[inline]
fn digit(key: i64, shift: usize) -> usize {
    (((key as u64) >> shift) & DIGIT_MASK) as usize
}

#[inline]
fn radix_passes(max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    ((63 - max.leading_zeros()) as usize / RADIX_BITS) + 1
}
