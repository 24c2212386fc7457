use crate::{Result, SortError};

/// Scans every key once and returns the largest, or `None` for an empty slice.
/// Fails on the first negative key.
pub fn max_non_negative_key<T, F>(data: &[T], key: &F) -> Result<Option<i64>>
where
    F: Fn(&T) -> i64,
{
    let mut max = None;
    for (index, x) in data.iter().enumerate() {
        let k = key(x);
        if k < 0 {
            return Err(SortError::NegativeKey { index, key: k });
        }
        if max.is_none_or(|m| k > m) {
            max = Some(k);
        }
    }
    Ok(max)
}

#[inline]
pub fn prefix_sum(counts: &mut [usize]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_key_reports_first_negative() {
        let data = [3_i64, 9, -1, -7];
        assert_eq!(
            max_non_negative_key(&data, &|&x| x),
            Err(SortError::NegativeKey { index: 2, key: -1 })
        );
        assert_eq!(max_non_negative_key(&[] as &[i64], &|&x| x), Ok(None));
        assert_eq!(max_non_negative_key(&[4_i64, 0, 11], &|&x| x), Ok(Some(11)));
    }

    #[test]
    fn prefix_sum_is_exclusive() {
        let mut counts = [2, 0, 3, 1];
        prefix_sum(&mut counts);
        assert_eq!(counts, [0, 2, 2, 5]);
    }
}
