/// Sorts `seq` in place in ascending order using Hoare's partition scheme, with the middle element
/// as the pivot.
///
/// Two indices walk towards each other from either end of the range, swapping pairs that are on
/// the wrong side of the pivot.
pub fn hoare_quick_sort<T: PartialOrd + Clone>(seq: &mut [T]) {
    if seq.len() < 2 { return; }
    let mut stack = vec![(0, seq.len() - 1)];

    while let Some((low, high)) = stack.pop() {
        if low >= high { continue; }
        let boundary = hoare_partition(seq, low, high);
        push_sides(
            &mut stack,
            (low < boundary).then_some((low, boundary)),
            (boundary + 1 < high).then_some((boundary + 1, high)),
        );
    }
}

/// Partitions `seq[left..=right]` around its middle element, returning the boundary `b` such that
/// everything in `left..=b` is less than or equal to the pivot and everything in `b + 1..=right` is
/// greater than or equal to it. `b` is always less than `right`.
fn hoare_partition<T: PartialOrd + Clone>(seq: &mut [T], mut left: usize, mut right: usize) -> usize {
    let pivot = seq[(left + right) >> 1].clone();
    loop {
        while seq[left] < pivot { left += 1; }
        while seq[right] > pivot { right -= 1; }
        if left >= right { return right; }
        seq.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Sorts `seq` in place in ascending order using Lomuto's partition scheme, with the last element
/// as the pivot.
///
/// Simpler than [`hoare_quick_sort`], but does more swaps and degrades to `O(n^2)` on slices with
/// many equal elements.
pub fn lomuto_quick_sort<T: PartialOrd>(seq: &mut [T]) {
    if seq.len() < 2 { return; }
    let mut stack = vec![(0, seq.len() - 1)];

    while let Some((low, high)) = stack.pop() {
        if low >= high { continue; }
        let store = lomuto_partition(seq, low, high);
        push_sides(
            &mut stack,
            (store > low + 1).then(|| (low, store - 1)),
            (store + 1 < high).then_some((store + 1, high)),
        );
    }
}

/// Partitions `seq[low..=high]` around `seq[high]`, returning the index where the pivot comes to
/// rest. Everything before it is less than the pivot, everything after is greater or equal.
fn lomuto_partition<T: PartialOrd>(seq: &mut [T], low: usize, high: usize) -> usize {
    let mut store = low;
    for i in low..high {
        if seq[i] < seq[high] {
            seq.swap(i, store);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}

/// Pushes the two unsorted sides of a partition onto the work-list, larger first so the smaller side
/// is sorted next. Each range left waiting is then at most half the size of the one below it, which
/// keeps the work-list to `O(log n)` ranges however skewed the pivots are.
pub(crate) fn push_sides(
    stack: &mut Vec<(usize, usize)>,
    left: Option<(usize, usize)>,
    right: Option<(usize, usize)>,
) {
    let span = |side: Option<(usize, usize)>| side.map_or(0, |(low, high)| high - low + 1);
    if span(left) >= span(right) {
        stack.extend(left);
        stack.extend(right);
    } else {
        stack.extend(right);
        stack.extend(left);
    }
}

/// Returns the `k`th smallest element of `seq` (counting from 0), or [`None`] if `seq` has `k` or
/// fewer elements.
///
/// Only the side of each partition containing index `k` is visited, so `seq` ends up partially
/// sorted: the returned element sits at index `k`, with everything before it being less than or
/// equal to it and everything after greater or equal. Useful for medians or top-k of large
/// unsorted slices without paying for a whole sort.
pub fn quick_select<T: PartialOrd>(seq: &mut [T], k: usize) -> Option<&T> {
    if k >= seq.len() { return None; }
    let mut low = 0;
    let mut high = seq.len() - 1;

    while low < high {
        let store = lomuto_partition(seq, low, high);
        if store == k { break; }
        if store < k {
            low = store + 1;
        } else {
            high = store - 1;
        }
    }
    Some(&seq[k])
}
