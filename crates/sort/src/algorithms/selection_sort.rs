use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    for i in 0..len {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if compare(&data[j], &data[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending_order_with_custom_compare() {
        let mut data = [64, 34, 25, 12, 22, 11, 90];
        sort_by(&mut data, |a, b| b.cmp(a));
        assert_eq!(data, [90, 64, 34, 25, 22, 12, 11]);
    }
}
