use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

/// Middle-element pivot with a three-way partition: the block equal to the
/// pivot is never recursed into, so inputs full of duplicates stay linear per level.
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_recursive(data, &mut compare);
}

fn quick_sort_recursive<T, F>(mut data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while data.len() > 1 {
        let mid = data.len() / 2;
        data.swap(0, mid);
        let (lt, gt) = partition_3way(data, compare);

        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        // Recurse into the smaller side to bound stack depth by log n.
        if left.len() < right.len() {
            quick_sort_recursive(left, compare);
            data = right;
        } else {
            quick_sort_recursive(right, compare);
            data = left;
        }
    }
}

/// Partitions around the pivot stored at `data[0]`.
///
/// Returns `(lt, gt)` such that `data[..lt]` < pivot, `data[lt..gt]` == pivot
/// and `data[gt..]` > pivot. `lt < gt` always holds for a non-empty slice.
fn partition_3way<T, F>(data: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some((pivot, rest)) = data.split_first_mut() else {
        return (0, 0);
    };

    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = rest.len();
    while i < gt {
        match compare(&rest[i], pivot) {
            Ordering::Less => {
                rest.swap(i, lt);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                rest.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    // rest[..lt] is data[1..=lt]; moving the pivot onto data[lt] closes the gap.
    data.swap(0, lt);
    (lt, gt + 1)
}
