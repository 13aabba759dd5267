//! Stable sorting with a comparator that can fail
//!
//! `slice::sort_by` cannot stop on an error, and may panic when the
//! comparator it is given stops being a total order halfway through. The
//! sorts here compute the permutation first with a bottom-up merge sort that
//! bails out on the first error, and only then move the items.

use ordo_registry::ComparatorError;
use std::cmp::Ordering;

/// Stable order of `0..len` under `compare`
pub fn stable_order<F>(len: usize, mut compare: F) -> Result<Vec<usize>, ComparatorError>
where
    F: FnMut(usize, usize) -> Result<Ordering, ComparatorError>,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged: Vec<usize> = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j) = (start, mid);
            while i < mid && j < end {
                // Right side wins only when strictly smaller
                if compare(order[j], order[i])? == Ordering::Less {
                    merged.push(order[j]);
                    j += 1;
                } else {
                    merged.push(order[i]);
                    i += 1;
                }
            }
            merged.extend_from_slice(&order[i..mid]);
            merged.extend_from_slice(&order[j..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    Ok(order)
}

/// Sort `items` in place. On error `items` is left untouched.
pub fn try_sort_by<T, F>(items: &mut [T], mut compare: F) -> Result<(), ComparatorError>
where
    F: FnMut(&T, &T) -> Result<Ordering, ComparatorError>,
{
    let order = stable_order(items.len(), |a, b| compare(&items[a], &items[b]))?;
    apply_order(items, &order);
    Ok(())
}

/// Rearrange `items` so position `i` holds what was at `order[i]`
fn apply_order<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }
        // Walk the cycle through `start`, pulling each source into place
        let mut current = start;
        loop {
            placed[current] = true;
            let source = order[current];
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
