use std::cmp::Ordering;

// gap <- gap / 1.3
const SHRINK_NUM: usize = 10;
const SHRINK_DEN: usize = 13;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut gap = len;
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = (gap * SHRINK_NUM / SHRINK_DEN).max(1);
        swapped = false;
        for i in 0..(len - gap) {
            if compare(&data[i], &data[i + gap]) == Ordering::Greater {
                data.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}
