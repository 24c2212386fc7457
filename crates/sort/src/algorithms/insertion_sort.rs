use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

/// Stable: an element only moves left past strictly greater elements.
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && compare(&data[j - 1], &data[i]) == Ordering::Greater {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}
