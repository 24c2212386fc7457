use crate::Result;

use super::{common, radix_sort};

/// Widest key range served by a dense count table; larger ranges go to radix sort.
pub const MAX_COUNTING_RANGE: usize = 1 << 20;

pub fn sort(data: &mut [i64]) -> Result<()> {
    sort_by_key(data, |&x| x)
}

/// Stable counting sort over non-negative integer keys.
pub fn sort_by_key<T, F>(data: &mut [T], key: F) -> Result<()>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let Some(max) = common::max_non_negative_key(data, &key)? else {
        return Ok(());
    };
    if data.len() < 2 {
        return Ok(());
    }

    let range = usize::try_from(max).ok().and_then(|m| m.checked_add(1));
    let range = match range {
        Some(r) if r <= MAX_COUNTING_RANGE && r <= data.len().saturating_mul(24) => r,
        _ => {
            radix_sort::sort_validated(data, &key, max);
            return Ok(());
        }
    };

    let mut counts = vec![0usize; range];
    for x in data.iter() {
        counts[key(x) as usize] += 1;
    }
    common::prefix_sum(&mut counts);

    let src = data.to_vec();
    for x in src {
        let k = key(&x) as usize;
        data[counts[k]] = x;
        counts[k] += 1;
    }
    Ok(())
}
