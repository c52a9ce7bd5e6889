//! Divide-and-conquer reduction and prefix scan.

use std::ops::Range;

use super::{Engine, fork};
use crate::algebra::{Monoid, Semigroup};
use crate::sequence::Sequence;
use crate::substrate::Substrate;

/// Smallest block used by [`Engine::scan`]. Block totals are scanned
/// recursively, so each level must shrink the input.
const MINIMUM_SCAN_BLOCK: usize = 2;

impl<S: Substrate> Engine<S> {
    /// Combines all elements with an associative `combine` seeded by its
    /// `identity`. An empty sequence reduces to `identity`.
    ///
    /// Each block is folded left to right from `identity`; partial results
    /// are combined in index order, so `combine` need not be commutative.
    pub fn reduce<T, C>(&self, sequence: &Sequence<T>, combine: C, identity: T) -> T
    where
        T: Clone + Send + Sync,
        C: Fn(T, T) -> T + Sync,
    {
        self.map_reduce(sequence, T::clone, combine, identity)
    }

    /// Fallible [`Engine::reduce`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `combine`. Within a block that is the
    /// lowest failing position; across blocks the left subtree wins.
    pub fn try_reduce<T, E, C>(&self, sequence: &Sequence<T>, combine: C, identity: T) -> Result<T, E>
    where
        T: Clone + Send + Sync,
        E: Send,
        C: Fn(T, T) -> Result<T, E> + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("try_reduce", elements.len());
        fork::reduce_blocks(
            &self.substrate,
            self.grain(),
            0..elements.len(),
            &|range: Range<usize>| {
                elements[range]
                    .iter()
                    .try_fold(identity.clone(), |accumulator, element| {
                        combine(accumulator, element.clone())
                    })
            },
            &|left: Result<T, E>, right: Result<T, E>| combine(left?, right?),
        )
    }

    /// Maps every element and combines the results, without materialising the
    /// mapped sequence.
    pub fn map_reduce<T, U, M, C>(
        &self,
        sequence: &Sequence<T>,
        map: M,
        combine: C,
        identity: U,
    ) -> U
    where
        T: Sync,
        U: Clone + Send + Sync,
        M: Fn(&T) -> U + Sync,
        C: Fn(U, U) -> U + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("map_reduce", elements.len());
        fork::reduce_blocks(
            &self.substrate,
            self.grain(),
            0..elements.len(),
            &|range: Range<usize>| {
                elements[range]
                    .iter()
                    .fold(identity.clone(), |accumulator, element| {
                        combine(accumulator, map(element))
                    })
            },
            &|left: U, right: U| combine(left, right),
        )
    }

    /// Maps every element into a monoid and combines the results.
    pub fn fold_map<T, M, F>(&self, sequence: &Sequence<T>, function: F) -> M
    where
        T: Sync,
        M: Monoid + Clone + Send + Sync,
        F: Fn(&T) -> M + Sync,
    {
        self.map_reduce(sequence, function, Semigroup::combine, M::empty())
    }

    /// Exclusive prefix combination: returns
    /// `<identity, x0, x0·x1, ..., x0·…·x(n-2)>` and the total.
    ///
    /// Blocks are folded in parallel, the block totals are scanned
    /// recursively, then every block is rescanned from its offset in
    /// parallel.
    pub fn scan<T, C>(&self, sequence: &Sequence<T>, combine: C, identity: T) -> (Sequence<T>, T)
    where
        T: Clone + Send + Sync,
        C: Fn(T, T) -> T + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("scan", elements.len());
        let (prefixes, total) = scan_values(
            &self.substrate,
            self.grain().max(MINIMUM_SCAN_BLOCK),
            elements,
            &combine,
            &identity,
        );
        (Sequence::from(prefixes), total)
    }
}

/// Exclusive scan of `elements` with blocks of `block` elements.
pub(super) fn scan_values<S, T, C>(
    substrate: &S,
    block: usize,
    elements: &[T],
    combine: &C,
    identity: &T,
) -> (Vec<T>, T)
where
    S: Substrate,
    T: Clone + Send + Sync,
    C: Fn(T, T) -> T + Sync,
{
    let scan_block = |range: Range<usize>, seed: T, output: &mut [Option<T>]| -> T {
        elements[range]
            .iter()
            .zip(output.iter_mut())
            .fold(seed, |accumulator, (element, slot)| {
                *slot = Some(accumulator.clone());
                combine(accumulator, element.clone())
            })
    };

    if elements.len() <= block {
        let mut slots = fork::empty_slots(elements.len());
        let total = scan_block(0..elements.len(), identity.clone(), &mut slots);
        return (fork::into_values(slots), total);
    }

    let block_count = elements.len().div_ceil(block);
    let block_range = |index: usize| index * block..((index + 1) * block).min(elements.len());

    let block_totals = fork::tabulate_values(substrate, 1, block_count, &|index: usize| {
        elements[block_range(index)]
            .iter()
            .fold(identity.clone(), |accumulator, element| {
                combine(accumulator, element.clone())
            })
    });
    let (block_offsets, total) = scan_values(substrate, block, &block_totals, combine, identity);

    let mut slots = fork::empty_slots(elements.len());
    fork::fill_blocks(substrate, block, 0, &mut slots, &|start: usize, window: &mut [Option<T>]| {
        let index = start / block;
        scan_block(block_range(index), block_offsets[index].clone(), window);
    });
    (fork::into_values(slots), total)
}
