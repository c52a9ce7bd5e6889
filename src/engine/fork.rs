//! Divide-and-conquer building blocks shared by every engine operation.
//!
//! An index range of length `n` is cut into `ceil(n / grain)` blocks. The
//! recursion splits a range at the block boundary nearest its middle, so the
//! tree shape depends only on `n` and `grain`, never on scheduling. A range of
//! `b` blocks forks exactly `b - 1` times.
//!
//! Output buffers are `[Option<U>]` slots split with `split_at_mut`, which
//! gives every leaf a disjoint window to write into.

use std::ops::Range;

use crate::substrate::Substrate;

/// Returns where to split a range of `length` elements, or `None` if the range
/// is a single block.
#[inline]
pub(crate) const fn split_point(length: usize, grain: usize) -> Option<usize> {
    if length <= grain {
        return None;
    }
    let blocks = length.div_ceil(grain);
    Some((blocks / 2) * grain)
}

/// Allocates `length` empty output slots.
pub(crate) fn empty_slots<U>(length: usize) -> Vec<Option<U>> {
    std::iter::repeat_with(|| None).take(length).collect()
}

/// Collects filled slots. Every slot has been written by the time this runs.
pub(crate) fn into_values<U>(slots: Vec<Option<U>>) -> Vec<U> {
    let length = slots.len();
    let values: Vec<U> = slots.into_iter().flatten().collect();
    debug_assert_eq!(values.len(), length, "unfilled output slot");
    values
}

/// Calls `leaf(start, window)` for every block of `slots`, in parallel.
///
/// `start` is the absolute index of `window[0]`, offset by `origin`.
pub(crate) fn fill_blocks<S, U, L>(
    substrate: &S,
    grain: usize,
    origin: usize,
    slots: &mut [Option<U>],
    leaf: &L,
) where
    S: Substrate,
    U: Send,
    L: Fn(usize, &mut [Option<U>]) + Sync,
{
    match split_point(slots.len(), grain) {
        None => leaf(origin, slots),
        Some(middle) => {
            let (left, right) = slots.split_at_mut(middle);
            substrate.join(
                || fill_blocks(substrate, grain, origin, left, leaf),
                || fill_blocks(substrate, grain, origin + middle, right, leaf),
            );
        }
    }
}

/// Builds `<function(0), ..., function(length - 1)>` in parallel.
pub(crate) fn tabulate_values<S, U, F>(
    substrate: &S,
    grain: usize,
    length: usize,
    function: &F,
) -> Vec<U>
where
    S: Substrate,
    U: Send,
    F: Fn(usize) -> U + Sync,
{
    let mut slots = empty_slots(length);
    fill_blocks(substrate, grain, 0, &mut slots, &|start: usize, window: &mut [Option<U>]| {
        for (offset, slot) in window.iter_mut().enumerate() {
            *slot = Some(function(start + offset));
        }
    });
    into_values(slots)
}

/// Fallible [`tabulate_values`]. Every position is evaluated once; the error
/// at the lowest index is returned.
pub(crate) fn try_tabulate_values<S, U, E, F>(
    substrate: &S,
    grain: usize,
    length: usize,
    function: &F,
) -> Result<Vec<U>, E>
where
    S: Substrate,
    U: Send,
    E: Send,
    F: Fn(usize) -> Result<U, E> + Sync,
{
    let mut slots: Vec<Option<Result<U, E>>> = empty_slots(length);
    fill_blocks(substrate, grain, 0, &mut slots, &|start: usize, window: &mut [Option<Result<U, E>>]| {
        for (offset, slot) in window.iter_mut().enumerate() {
            *slot = Some(function(start + offset));
        }
    });
    slots.into_iter().flatten().collect()
}

/// Reduces `range` by evaluating `leaf` on every block and merging partial
/// results with `merge`, left operand always from the lower indices.
pub(crate) fn reduce_blocks<S, R, L, M>(
    substrate: &S,
    grain: usize,
    range: Range<usize>,
    leaf: &L,
    merge: &M,
) -> R
where
    S: Substrate,
    R: Send,
    L: Fn(Range<usize>) -> R + Sync,
    M: Fn(R, R) -> R + Sync,
{
    match split_point(range.len(), grain) {
        None => leaf(range),
        Some(middle) => {
            let boundary = range.start + middle;
            let (left, right) = substrate.join(
                || reduce_blocks(substrate, grain, range.start..boundary, leaf, merge),
                || reduce_blocks(substrate, grain, boundary..range.end, leaf, merge),
            );
            merge(left, right)
        }
    }
}

/// Writes variable-length segments into one output buffer in parallel.
///
/// `offsets[segment]` is where `segment` starts in `slots`, relative to
/// `offsets[segments.start]`; `offsets` has one more entry than there are
/// segments, the last holding the total.
///
/// A leaf holds at most `segment_grain` segments and, unless it is a single
/// segment, at most `grain` output slots. Ranges with too many segments are
/// cut at a `segment_grain` boundary, so the tree over sparse or empty
/// segments is as deep as the one over dense segments. Each leaf calls
/// `leaf(segment, window)` for its segments in order.
pub(crate) fn scatter_segments<S, U, L>(
    substrate: &S,
    grain: usize,
    segment_grain: usize,
    segments: Range<usize>,
    offsets: &[usize],
    slots: &mut [Option<U>],
    leaf: &L,
) where
    S: Substrate,
    U: Send,
    L: Fn(usize, &mut [Option<U>]) + Sync,
{
    let middle = match split_point(segments.len(), segment_grain) {
        Some(split) => segments.start + split,
        None if segments.len() > 1 && slots.len() > grain => {
            segments.start + segments.len() / 2
        }
        None => {
            let mut remaining = slots;
            for segment in segments {
                let width = offsets[segment + 1] - offsets[segment];
                let (window, rest) = std::mem::take(&mut remaining).split_at_mut(width);
                leaf(segment, window);
                remaining = rest;
            }
            return;
        }
    };
    let (left, right) = slots.split_at_mut(offsets[middle] - offsets[segments.start]);
    substrate.join(
        || {
            scatter_segments(
                substrate,
                grain,
                segment_grain,
                segments.start..middle,
                offsets,
                left,
                leaf,
            );
        },
        || {
            scatter_segments(
                substrate,
                grain,
                segment_grain,
                middle..segments.end,
                offsets,
                right,
                leaf,
            );
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substrate::{Recording, Sequential};
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, None)]
    #[case(4, 4, None)]
    #[case(5, 4, Some(4))]
    #[case(8, 4, Some(4))]
    #[case(12, 4, Some(4))]
    #[case(16, 4, Some(8))]
    #[case(7, 1, Some(3))]
    fn split_points(#[case] length: usize, #[case] grain: usize, #[case] expected: Option<usize>) {
        assert_eq!(split_point(length, grain), expected);
    }

    #[rstest]
    #[case(10, 1)]
    #[case(10, 3)]
    #[case(100, 7)]
    #[case(5, 100)]
    fn tabulate_forks_once_per_extra_block(#[case] length: usize, #[case] grain: usize) {
        let recording = Recording::new(Sequential);
        let values = tabulate_values(&recording, grain, length, &|index| index * 2);
        assert_eq!(values, (0..length).map(|index| index * 2).collect::<Vec<_>>());
        assert_eq!(recording.forks(), length.div_ceil(grain).saturating_sub(1));
    }

    #[rstest]
    fn try_tabulate_reports_lowest_failing_index() {
        let result: Result<Vec<usize>, usize> = try_tabulate_values(&Sequential, 2, 10, &|index| {
            if index % 4 == 3 { Err(index) } else { Ok(index) }
        });
        assert_eq!(result, Err(3));
    }

    #[rstest]
    fn reduce_blocks_keeps_operand_order() {
        let text = reduce_blocks(
            &Sequential,
            2,
            0..9,
            &|range: Range<usize>| range.map(|index| index.to_string()).collect::<String>(),
            &|left: String, right: String| left + &right,
        );
        assert_eq!(text, "012345678");
    }

    #[rstest]
    fn scatter_writes_each_segment_in_place() {
        let lengths = [2_usize, 0, 3, 1];
        let offsets = [0_usize, 2, 2, 5, 6];
        let mut slots = empty_slots(6);
        scatter_segments(&Sequential, 1, 1, 0..4, &offsets, &mut slots, &|segment: usize, window: &mut [Option<usize>]| {
            assert_eq!(window.len(), lengths[segment]);
            for slot in window.iter_mut() {
                *slot = Some(segment);
            }
        });
        assert_eq!(into_values(slots), vec![0, 0, 2, 2, 2, 3]);
    }

    #[rstest]
    #[case(1, 16, 15)]
    #[case(4, 16, 3)]
    #[case(4, 17, 4)]
    fn scatter_forks_over_empty_segments(
        #[case] segment_grain: usize,
        #[case] segments: usize,
        #[case] expected: usize,
    ) {
        let recording = Recording::new(Sequential);
        let offsets = vec![0_usize; segments + 1];
        let mut slots: Vec<Option<u8>> = empty_slots(0);
        let visited = std::sync::atomic::AtomicUsize::new(0);
        scatter_segments(
            &recording,
            1_024,
            segment_grain,
            0..segments,
            &offsets,
            &mut slots,
            &|_: usize, window: &mut [Option<u8>]| {
                assert!(window.is_empty());
                visited.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            },
        );
        assert_eq!(recording.forks(), expected);
        assert_eq!(visited.into_inner(), segments);
    }

    #[rstest]
    fn scatter_splits_a_dense_range_by_output_size() {
        let recording = Recording::new(Sequential);
        let offsets: Vec<usize> = (0..=8).map(|segment| segment * 4).collect();
        let mut slots = empty_slots(32);
        scatter_segments(&recording, 4, 8, 0..8, &offsets, &mut slots, &|segment: usize, window: &mut [Option<usize>]| {
            for slot in window.iter_mut() {
                *slot = Some(segment);
            }
        });
        assert_eq!(recording.forks(), 7);
        assert_eq!(into_values(slots), (0..32).map(|index| index / 4).collect::<Vec<_>>());
    }
}
