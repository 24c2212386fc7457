use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

/// Gapped insertion sort over the halving sequence n/2, n/4, ..., 1.
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&data[j - gap], &data[j]) == Ordering::Greater {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}
