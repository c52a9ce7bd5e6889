//! Compaction: `filter` and `flatten`.
//!
//! Both run in three phases. First every element is measured in parallel (a
//! predicate flag, or an inner length). Then an exclusive scan over the
//! per-segment counts gives each segment its offset in the output. Finally
//! each segment is copied into its own disjoint window in parallel.

use std::ops::Range;

use super::{Engine, fork, reduce::scan_values};
use crate::sequence::Sequence;
use crate::substrate::Substrate;

impl<S: Substrate> Engine<S> {
    /// Keeps the elements satisfying `predicate`, in their original order.
    ///
    /// `predicate` is evaluated exactly once per element.
    pub fn filter<T, P>(&self, sequence: &Sequence<T>, predicate: P) -> Sequence<T>
    where
        T: Clone + Send + Sync,
        P: Fn(&T) -> bool + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("filter", elements.len());
        let flags = fork::tabulate_values(&self.substrate, self.grain(), elements.len(), &|index: usize| {
            predicate(&elements[index])
        });
        Sequence::from(self.compact(elements, &flags))
    }

    /// Fallible [`Engine::filter`].
    ///
    /// # Errors
    ///
    /// Returns the error raised for the lowest failing position. Nothing is
    /// copied when any evaluation fails.
    pub fn try_filter<T, E, P>(&self, sequence: &Sequence<T>, predicate: P) -> Result<Sequence<T>, E>
    where
        T: Clone + Send + Sync,
        E: Send,
        P: Fn(&T) -> Result<bool, E> + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("try_filter", elements.len());
        let flags =
            fork::try_tabulate_values(&self.substrate, self.grain(), elements.len(), &|index: usize| {
                predicate(&elements[index])
            })?;
        Ok(Sequence::from(self.compact(elements, &flags)))
    }

    /// Concatenates nested sequences in order.
    pub fn flatten<T>(&self, nested: &Sequence<Sequence<T>>) -> Sequence<T>
    where
        T: Clone + Send + Sync,
    {
        let inner = nested.as_slice();
        self.trace("flatten", inner.len());
        let lengths =
            fork::tabulate_values(&self.substrate, self.grain(), inner.len(), &|index: usize| {
                inner[index].len()
            });
        let offsets = self.segment_offsets(&lengths);

        let mut slots = fork::empty_slots(offsets[inner.len()]);
        fork::scatter_segments(
            &self.substrate,
            self.grain(),
            self.grain(),
            0..inner.len(),
            &offsets,
            &mut slots,
            &|segment: usize, window: &mut [Option<T>]| {
                for (slot, element) in window.iter_mut().zip(inner[segment].iter()) {
                    *slot = Some(element.clone());
                }
            },
        );
        Sequence::from(fork::into_values(slots))
    }

    /// Copies the flagged elements, preserving order.
    fn compact<T>(&self, elements: &[T], flags: &[bool]) -> Vec<T>
    where
        T: Clone + Send + Sync,
    {
        let grain = self.grain();
        let block_count = elements.len().div_ceil(grain);
        let block_range = |block: usize| block * grain..((block + 1) * grain).min(elements.len());

        let counts = fork::tabulate_values(&self.substrate, 1, block_count, &|block: usize| {
            flags[block_range(block)].iter().filter(|kept| **kept).count()
        });
        let offsets = self.segment_offsets(&counts);

        let mut slots = fork::empty_slots(offsets[block_count]);
        fork::scatter_segments(
            &self.substrate,
            grain,
            1,
            0..block_count,
            &offsets,
            &mut slots,
            &|block: usize, window: &mut [Option<T>]| {
                let range: Range<usize> = block_range(block);
                let survivors = elements[range.clone()]
                    .iter()
                    .zip(&flags[range])
                    .filter_map(|(element, kept)| kept.then_some(element));
                for (slot, element) in window.iter_mut().zip(survivors) {
                    *slot = Some(element.clone());
                }
            },
        );
        fork::into_values(slots)
    }

    /// Exclusive prefix sums of `counts` with the total appended.
    fn segment_offsets(&self, counts: &[usize]) -> Vec<usize> {
        let (mut offsets, total) = scan_values(
            &self.substrate,
            self.grain().max(2),
            counts,
            &|left: usize, right: usize| left + right,
            &0,
        );
        offsets.push(total);
        offsets
    }
}
