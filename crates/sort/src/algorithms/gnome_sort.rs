use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    let mut i = 1usize;
    while i < len {
        if i == 0 || compare(&data[i - 1], &data[i]) != Ordering::Greater {
            i += 1;
        } else {
            data.swap(i - 1, i);
            i -= 1;
        }
    }
}
