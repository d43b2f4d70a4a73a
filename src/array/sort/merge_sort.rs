/// Returns a new [`Vec`] holding the elements of `seq` in ascending order, leaving `seq` as is.
///
/// The slice is split at its midpoint until single elements remain, which are then merged back
/// together. The merge only takes from the right run when its head is strictly less than the left
/// one, so equal elements keep their original order. Recursion depth is `log2(n)`.
pub fn merge_sort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    match seq.len() {
        0 => Vec::new(),
        len => merge_sort_range(seq, 0, len - 1),
    }
}

fn merge_sort_range<T: PartialOrd + Clone>(seq: &[T], min: usize, max: usize) -> Vec<T> {
    if min == max { return vec![seq[min].clone()]; }
    let middle = (min + max) >> 1;
    let left = merge_sort_range(seq, min, middle);
    let right = merge_sort_range(seq, middle + 1, max);
    merge(left, right)
}

fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let next = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) if l > r => right.next(),
            (Some(_), _) => left.next(),
            (None, _) => right.next(),
        };
        match next {
            Some(value) => merged.push(value),
            None => break merged,
        }
    }
}
