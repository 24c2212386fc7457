use std::cmp::Ordering;

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

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, &mut compare);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, &mut compare);
        end -= 1;
    }
}

/// Restores the max-heap property for the subtree at `root` within `data[..end]`.
#[inline]
fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && compare(&data[child], &data[child + 1]) == Ordering::Less {
            swap_idx = child + 1;
        }

        if compare(&data[root], &data[swap_idx]) != Ordering::Less {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reference_input() {
        let mut data = [64, 34, 25, 12, 22, 11, 90];
        sort(&mut data);
        assert_eq!(data, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn two_elements() {
        let mut data = [2, 1];
        sort(&mut data);
        assert_eq!(data, [1, 2]);
    }
}
