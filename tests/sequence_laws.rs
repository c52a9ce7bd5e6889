//! Property-based tests for the sequence laws.
//!
//! Every property is checked under a small, randomly chosen cutoff so the
//! parallel decomposition is exercised even on short inputs.

mod common;

use parseq::algebra::{Monoid, Semigroup};
use parseq::{Engine, Sequence, SequenceError, Sequential};
use proptest::prelude::*;

fn engine(grain: usize) -> Engine<Sequential> {
    common::sequential_engine(grain)
}

fn sequence_of(elements: &[i32]) -> Sequence<i32> {
    Sequence::from_slice(elements)
}

proptest! {
    /// Tabulate Law: the result has the requested length and position `i`
    /// holds `f(i)`.
    #[test]
    fn prop_tabulate_length_and_content(length in 0_usize..300, grain in 1_usize..16) {
        let sequence = engine(grain).tabulate(length, |index| index * 3 + 1).unwrap();
        prop_assert_eq!(sequence.len(), length);
        for index in 0..length {
            prop_assert_eq!(sequence.nth(index), Ok(&(index * 3 + 1)));
        }
    }

    /// Range Law: every index outside `0..len` fails with a range error.
    #[test]
    fn prop_nth_out_of_range(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        offset in 0_i64..1000,
    ) {
        let sequence = sequence_of(&elements);
        let length = i64::try_from(elements.len()).unwrap();
        prop_assert_eq!(
            sequence.nth(length + offset),
            Err(SequenceError::Range { index: i128::from(length + offset), length: elements.len() })
        );
        prop_assert_eq!(
            sequence.nth(-1 - offset),
            Err(SequenceError::Range { index: i128::from(-1 - offset), length: elements.len() })
        );
    }

    /// Domain Law: negative lengths are rejected.
    #[test]
    fn prop_tabulate_negative_length(length in i32::MIN..0) {
        prop_assert_eq!(
            engine(4).tabulate(length, |index| index).unwrap_err(),
            SequenceError::Domain { length: i128::from(length) }
        );
    }

    /// Reverse Law: reversing twice is the identity.
    #[test]
    fn prop_reverse_involution(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        grain in 1_usize..16,
    ) {
        let engine = engine(grain);
        let sequence = sequence_of(&elements);
        prop_assert_eq!(engine.reverse(&engine.reverse(&sequence)), sequence);
    }

    /// Reverse Law: position `i` moves to `n - 1 - i`.
    #[test]
    fn prop_reverse_mirrors_positions(elements in prop::collection::vec(any::<i32>(), 1..100)) {
        let reversed = sequence_of(&elements).reverse();
        let last = elements.len() - 1;
        for index in 0..elements.len() {
            prop_assert_eq!(reversed.nth(index), Ok(&elements[last - index]));
        }
    }

    /// Map Law: length is preserved and each element is transformed in place.
    #[test]
    fn prop_map_pointwise(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        grain in 1_usize..16,
    ) {
        let sequence = sequence_of(&elements);
        let mapped = engine(grain).map(&sequence, |value| i64::from(*value) * 2);
        prop_assert_eq!(mapped.len(), sequence.len());
        for index in 0..elements.len() {
            prop_assert_eq!(mapped.nth(index), Ok(&(i64::from(elements[index]) * 2)));
        }
    }

    /// Filter Law: the result is exactly the order-preserving subsequence of
    /// satisfying elements.
    #[test]
    fn prop_filter_is_ordered_subsequence(
        elements in prop::collection::vec(any::<i32>(), 0..300),
        grain in 1_usize..16,
        modulus in 1_i32..6,
    ) {
        let predicate = |value: &i32| value.rem_euclid(modulus) == 0;
        let filtered = engine(grain).filter(&sequence_of(&elements), predicate);
        let expected: Vec<i32> = elements.iter().copied().filter(|value| predicate(value)).collect();
        prop_assert_eq!(filtered.to_vec(), expected);
        prop_assert!(filtered.iter().all(|value| predicate(value)));
    }

    /// Reduce Law: for an associative, non-commutative operator the parallel
    /// reduction equals the left fold, whatever the cutoff.
    #[test]
    fn prop_reduce_equals_left_fold(
        words in prop::collection::vec("[a-z]{0,3}", 0..100),
        grain in 1_usize..16,
    ) {
        let sequence: Sequence<String> = words.iter().cloned().collect();
        let reduced = engine(grain).reduce(&sequence, |left, right| left + &right, String::new());
        prop_assert_eq!(reduced, words.concat());
    }

    /// Reduce Law: the result does not depend on the cutoff.
    #[test]
    fn prop_reduce_independent_of_grain(
        elements in prop::collection::vec(-1000_i64..1000, 0..200),
        first in 1_usize..32,
        second in 1_usize..32,
    ) {
        let sequence: Sequence<i64> = elements.iter().copied().collect();
        let sum = |left: i64, right: i64| left + right;
        prop_assert_eq!(
            engine(first).reduce(&sequence, sum, 0),
            engine(second).reduce(&sequence, sum, 0)
        );
    }

    /// Scan Law: prefixes are the sequential exclusive prefixes and the total
    /// equals the reduction.
    #[test]
    fn prop_scan_matches_fold(
        elements in prop::collection::vec(-1000_i64..1000, 0..300),
        grain in 1_usize..16,
    ) {
        let engine = engine(grain);
        let sequence: Sequence<i64> = elements.iter().copied().collect();
        let (prefixes, total) = engine.scan(&sequence, |left, right| left + right, 0);
        let mut running = 0;
        let mut expected = Vec::with_capacity(elements.len());
        for value in &elements {
            expected.push(running);
            running += value;
        }
        prop_assert_eq!(prefixes.to_vec(), expected);
        prop_assert_eq!(total, running);
        prop_assert_eq!(total, engine.reduce(&sequence, |left, right| left + right, 0));
    }

    /// Append Law: associative with the empty sequence as identity.
    #[test]
    fn prop_append_monoid(
        first in prop::collection::vec(any::<i32>(), 0..40),
        second in prop::collection::vec(any::<i32>(), 0..40),
        third in prop::collection::vec(any::<i32>(), 0..40),
    ) {
        let (first, second, third) = (sequence_of(&first), sequence_of(&second), sequence_of(&third));
        prop_assert_eq!(
            first.append(&second).append(&third),
            first.append(&second.append(&third))
        );
        prop_assert_eq!(<Sequence<i32> as Monoid>::empty().combine(first.clone()), first.clone());
        prop_assert_eq!(first.clone().combine(Sequence::empty()), first);
    }

    /// Flatten Law: flattening equals concatenating the rows in order.
    #[test]
    fn prop_flatten_concatenates(
        rows in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..10), 0..30),
        grain in 1_usize..8,
    ) {
        let nested: Sequence<Sequence<u8>> = rows.iter().map(|row| Sequence::from_slice(row)).collect();
        let flattened = engine(grain).flatten(&nested);
        prop_assert_eq!(flattened.to_vec(), rows.concat());
    }

    /// Windowing Law: `split_at` partitions without losing elements.
    #[test]
    fn prop_split_at_partitions(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        cut in 0_usize..100,
    ) {
        let sequence = sequence_of(&elements);
        let cut = cut.min(elements.len());
        let (left, right) = sequence.split_at(cut).unwrap();
        prop_assert_eq!(left.len(), cut);
        prop_assert_eq!(left.append(&right), sequence);
    }
}
