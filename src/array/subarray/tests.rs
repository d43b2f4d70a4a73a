#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

const FIXTURE: [i64; 12] = [5, -3, 9, -24, 9, 0, -1, 1, -3, 15, 16, 2];

#[test]
fn test_prefix_sum_ranges() {
    let sums = PrefixSum::new(&FIXTURE);
    assert_eq!(sums.len(), FIXTURE.len());

    for start in 0..FIXTURE.len() {
        for end in start..FIXTURE.len() {
            assert_eq!(
                sums.range(start, end),
                FIXTURE[start..=end].iter().sum::<i64>(),
                "Range {start}..={end} should match a brute force sum."
            );
        }
    }
    assert_eq!(sums.range(0, 0), 5, "A range starting at 0 should include the first element.");
    assert_eq!(sums.total(), 28);
}

#[test]
fn test_prefix_sum_errors() {
    let sums = PrefixSum::new(&FIXTURE);
    assert_eq!(
        sums.try_range(3, 12),
        Err(RangeError::IndexOutOfBounds(IndexOutOfBounds { index: 12, len: 12 })),
    );
    assert!(sums.try_range(4, 2).is_err_and(|err| err.is_reversed_range()));

    let empty = PrefixSum::<i64>::new(&[]);
    assert!(empty.is_empty());
    assert_eq!(empty.total(), 0, "The total of nothing should be zero.");
    assert!(empty.try_range(0, 0).is_err_and(|err| err.is_index_out_of_bounds()));

    assert_panics!({
        PrefixSum::new(&FIXTURE).range(0, 100);
    });
}

#[test]
fn test_prefix_sum_snapshot() {
    let mut values = vec![1, 2, 3];
    let sums = PrefixSum::new(&values);
    values[0] = 100;
    assert_eq!(sums.range(0, 2), 6, "Mutating the source shouldn't affect the snapshot.");
}

#[test]
fn test_prefix_sum_running_total_overflow() {
    let seq = [i32::MAX, 1, -1];
    let sums = PrefixSum::new(&seq);
    assert_eq!(sums.range(0, 0), i32::MAX);
    assert_eq!(sums.range(1, 1), 1, "Ranges that fit should be exact after the total wraps.");
    assert_eq!(sums.range(1, 2), 0);
    assert_eq!(sums.range(2, 2), -1);
    assert_eq!(sums.range(0, 2), i32::MAX);
    assert_eq!(sums.total(), i32::MAX);

    let seq = [u8::MAX, u8::MAX, 3, 4];
    let sums = PrefixSum::new(&seq);
    assert_eq!((sums.range(2, 3), sums.range(1, 1)), (7, u8::MAX));
}

#[test]
fn test_max_subarray() {
    let max = max_subarray(&FIXTURE).expect("non-empty input should have a max subarray");
    assert_eq!(max.value, 39);
    assert_eq!(max.range(), 4..=11);
}

#[test]
fn test_max_subarray_all_negative() {
    let max = max_subarray(&[-8, -3, -6, -2, -5, -4]).expect("non-empty");
    assert_eq!(
        max,
        MaxSubarray { value: -2, start: 3, end: 3 },
        "All negative input should yield the greatest single element."
    );

    let max = max_subarray(&[-1]).expect("non-empty");
    assert_eq!((max.value, max.range()), (-1, 0..=0));
}

#[test]
fn test_max_subarray_edge_cases() {
    assert_eq!(max_subarray::<i32>(&[]), None, "Empty input has no subarray.");

    let max = max_subarray(&[0, 0, 0]).expect("non-empty");
    assert_eq!((max.value, max.range()), (0, 0..=0), "The first best run should be kept.");

    let max = max_subarray(&[-2.5, 4.0, -1.0, 2.0, -10.0]).expect("non-empty");
    assert_eq!((max.value, max.range()), (5.0, 1..=3));
}

#[test]
fn test_counting_subarrays() {
    assert_eq!(counting_subarrays(&[1, 2, 3], 3), 2, "[1, 2] and [3] sum to 3.");
    assert_eq!(counting_subarrays(&FIXTURE, 2), 2);
    assert_eq!(counting_subarrays(&[0, 0, 0], 0), 6, "Every run of zeroes sums to zero.");
    assert_eq!(counting_subarrays::<i32>(&[], 0), 0);
}

#[test]
fn test_counting_subarrays_running_total_overflow() {
    assert_eq!(
        counting_subarrays(&[i32::MAX, 1, -1], i32::MAX), 2,
        "[MAX] and [MAX, 1, -1] sum to MAX, even though the running total overflows."
    );
    assert_eq!(counting_subarrays(&[i32::MAX, 1, -1], 0), 1);
    assert_eq!(counting_subarrays(&[u8::MAX, u8::MAX, 3, 4], 7), 1);
}

#[test]
fn test_counting_xor_subarrays() {
    assert_eq!(counting_xor_subarrays(&[4_u32, 2, 2, 6, 4], 6), 4);
    assert_eq!(counting_xor_subarrays(&[5_u8], 5), 1);
    assert_eq!(counting_xor_subarrays(&[5_u8], 4), 0);
}

proptest! {
    #[test]
    fn test_prefix_sum_matches_brute_force(
        seq in prop::collection::vec(-1000_i64..1000, 1..60),
        a in 0_usize..60,
        b in 0_usize..60,
    ) {
        let (a, b) = (a % seq.len(), b % seq.len());
        let (start, end) = (a.min(b), a.max(b));
        let sums = PrefixSum::new(&seq);
        prop_assert_eq!(sums.range(start, end), seq[start..=end].iter().sum::<i64>());
    }

    #[test]
    fn test_counting_matches_brute_force(
        seq in prop::collection::vec(-5_i64..5, 0..40),
        target in -8_i64..8,
    ) {
        let mut expected = 0;
        for start in 0..seq.len() {
            for end in start..seq.len() {
                if seq[start..=end].iter().sum::<i64>() == target { expected += 1; }
            }
        }
        prop_assert_eq!(counting_subarrays(&seq, target), expected);
    }

    #[test]
    fn test_max_subarray_matches_brute_force(seq in prop::collection::vec(-50_i64..50, 1..40)) {
        let mut best = i64::MIN;
        for start in 0..seq.len() {
            for end in start..seq.len() {
                best = best.max(seq[start..=end].iter().sum::<i64>());
            }
        }
        let max = max_subarray(&seq).expect("non-empty");
        prop_assert_eq!(max.value, best);
        prop_assert_eq!(seq[max.range()].iter().sum::<i64>(), best);
    }
}
