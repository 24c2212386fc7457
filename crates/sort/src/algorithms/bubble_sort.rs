use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

/// Adjacent-swap passes; stops after the first pass that swaps nothing.
/// Only strictly greater neighbours are swapped, so equal elements keep their order.
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for pass in 0..len {
        let mut swapped = false;
        for j in 0..(len - pass - 1) {
            if compare(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
