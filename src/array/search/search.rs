use crate::traits::Interpolate;

/// Returns the index of the first element equal to `target`, or [`None`] if there is none.
///
/// Sequential access makes this cache friendly, so it tends to beat the other searches on tiny
/// slices. It is the only search here that works on unsorted input.
pub fn linear<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    for (index, element) in seq.iter().enumerate() {
        if element == target { return Some(index); }
    }
    None
}

/// Returns the index of the first element equal to `value` in a slice sorted in ascending order,
/// or [`None`] if there is none.
///
/// Each probe halves the remaining range, so even a million elements only take around 20
/// comparisons.
pub fn binary<T: PartialOrd>(seq: &[T], value: &T) -> Option<usize> {
    if seq.is_empty() { return None; }
    first_in(seq, value, 0, seq.len() - 1)
}

/// Returns the index of the first element equal to `value` in a slice sorted in ascending order,
/// or [`None`] if there is none.
///
/// The range is bounded by doubling an index until it passes `value`, before binary searching
/// within the last doubling. This outperforms [`binary`] when the value is near the start.
pub fn exponential<T: PartialOrd>(seq: &[T], value: &T) -> Option<usize> {
    if seq.is_empty() { return None; }
    let max = seq.len() - 1;
    let mut i = 1;
    while i < max && seq[i] < *value {
        i <<= 1;
    }
    first_in(seq, value, i >> 1, i.min(max))
}

/// Returns the index of the first element equal to `value` in a slice sorted in ascending order,
/// or [`None`] if there is none.
///
/// Jumps forward `floor(sqrt(n))` elements at a time until the block containing `value` is found,
/// then scans that block.
pub fn jump<T: PartialOrd>(seq: &[T], value: &T) -> Option<usize> {
    if seq.is_empty() { return None; }
    let len = seq.len();
    let step = len.isqrt();
    let mut i = 0;
    while i < len && seq[i] < *value {
        i += step;
    }

    let right = i.min(len - 1);
    (i.saturating_sub(step)..=right).find(|&index| seq[index] == *value)
}

/// Returns the index of the first element equal to `value` in a slice sorted in ascending order,
/// or [`None`] if there is none.
///
/// Rather than probing the middle, the probe is placed where `value` would sit if the elements
/// were spread evenly between the two bounds. This heavily relies on the slice being uniformly
/// distributed, on skewed data it degrades towards a linear scan.
pub fn interpolation<T: Interpolate>(seq: &[T], value: &T) -> Option<usize> {
    if seq.is_empty() { return None; }
    let value = *value;
    let mut low = 0;
    let mut high = seq.len() - 1;
    let mut found = None;

    loop {
        if value < seq[low] || value > seq[high] { return found; }

        let position = match value.fraction_between(seq[low], seq[high]) {
            Some(fraction) => low + (fraction * (high - low) as f64) as usize,
            // Everything before low is less than the target, so low is the first match.
            None if seq[low] == value => return Some(low),
            // Distinct values too large for an f64 to tell apart share a position, so fall back to
            // probing the middle.
            None => low + (high - low) / 2,
        };
        if position < low || position > high { return found; }

        let current = seq[position];
        if current < value {
            low = position + 1;
        } else {
            // Keep looking left on a match, there may be an earlier duplicate.
            if current == value { found = Some(position); }
            match position.checked_sub(1) {
                Some(new_high) => high = new_high,
                None => return found,
            }
        }

        if low > high { return found; }
    }
}

/// Binary searches the inclusive range `[left, right]` for the first element equal to `value`.
fn first_in<T: PartialOrd>(seq: &[T], value: &T, left: usize, right: usize) -> Option<usize> {
    // Work with a half open range internally so the bounds never underflow.
    let mut left = left;
    let mut right = right + 1;
    while left < right {
        let middle = (left + right) >> 1;
        if seq[middle] < *value {
            left = middle + 1;
        } else {
            right = middle;
        }
    }

    match seq.get(left) {
        Some(current) if current == value => Some(left),
        _ => None,
    }
}
