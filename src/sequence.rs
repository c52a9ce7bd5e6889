//! The immutable sequence type.
//!
//! [`Sequence`] is a finite, ordered, immutable collection with O(1) length
//! and O(1) random access. Storage is a reference-counted contiguous slice
//! plus a window into it, so cloning and slicing share the same allocation.
//! Nothing in the public API can observe that sharing.
//!
//! # Cost Model
//!
//! Work is the total number of operations, span the longest chain of
//! dependent operations. With `W(f)` the work of a caller function:
//!
//! | Operation         | Work          | Span       |
//! |-------------------|---------------|------------|
//! | `len`, `nth`      | O(1)          | O(1)       |
//! | `tabulate`, `map` | O(n · W(f))   | O(log n)   |
//! | `filter`          | O(n · W(p))   | O(log n)   |
//! | `reduce`, `scan`  | O(n · W(c))   | O(log n)   |
//! | `append`          | O(n1 + n2)    | O(log n)   |
//! | `reverse`         | O(n)          | O(log n)   |
//! | `take`, `drop`    | O(1)          | O(1)       |
//!
//! Span assumes a fork-join substrate that forks pairwise; see
//! [`Substrate`](crate::Substrate).
//!
//! # Examples
//!
//! ```rust
//! use parseq::Sequence;
//!
//! let squares = Sequence::tabulate(5, |index| index * index).unwrap();
//! assert_eq!(squares.nth(3), Ok(&9));
//!
//! let evens = squares.filter(|value| value % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![0, 4, 16]);
//!
//! let total = squares.reduce(|left, right| left + right, 0);
//! assert_eq!(total, 30);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Range;

use crate::algebra::{Monoid, Semigroup};
use crate::engine::Engine;
use crate::error::SequenceError;
use crate::index::Position;

/// Reference-counted shared storage.
///
/// Always `Arc`: sequences are read from many worker threads at once.
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

// =============================================================================
// Sequence Definition
// =============================================================================

/// An immutable, finite, ordered sequence.
///
/// Every transforming operation returns a new sequence; the receiver is never
/// modified. Equality compares lengths and elements only.
pub struct Sequence<T> {
    elements: ReferenceCounter<[T]>,
    start: usize,
    length: usize,
}

/// O(1): clones share storage.
impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            start: self.start,
            length: self.length,
        }
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::empty();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    /// Creates a sequence holding one element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from(vec![element])
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1) work and span.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the element at `index`.
    ///
    /// Accepts any primitive integer, so negative indices are reported rather
    /// than rejected by the type system.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Range`] unless `0 <= index < len()`.
    ///
    /// # Complexity
    ///
    /// O(1) work and span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::{Sequence, SequenceError};
    ///
    /// let sequence = Sequence::from(vec![0, 1, 2]);
    /// assert_eq!(sequence.nth(2), Ok(&2));
    /// assert_eq!(
    ///     sequence.nth(-1),
    ///     Err(SequenceError::Range { index: -1, length: 3 })
    /// );
    /// ```
    pub fn nth<I: Position>(&self, index: I) -> Result<&T, SequenceError> {
        let range_error = |index: i128| SequenceError::Range {
            index,
            length: self.length,
        };
        let position = index.to_position().map_err(range_error)?;
        self.get(position)
            .ok_or_else(|| range_error(i128::try_from(position).unwrap_or(i128::MAX)))
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Borrows the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements[self.start..self.start + self.length]
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> SequenceIterator<'_, T> {
        SequenceIterator {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns the elements in `start..start + length` without copying.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Range`] naming the first position that falls
    /// outside the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence: Sequence<i32> = (0..10).collect();
    /// let middle = sequence.subsequence(3, 4).unwrap();
    /// assert_eq!(middle.to_vec(), vec![3, 4, 5, 6]);
    /// assert!(sequence.subsequence(8, 5).is_err());
    /// ```
    pub fn subsequence<I: Position, L: Position>(
        &self,
        start: I,
        length: L,
    ) -> Result<Self, SequenceError> {
        let start = self.checked_boundary(start)?;
        let length = length
            .to_position()
            .map_err(|length| SequenceError::Domain { length })?;
        let end = start
            .checked_add(length)
            .filter(|end| *end <= self.length)
            .ok_or_else(|| SequenceError::Range {
                index: i128::try_from(start.saturating_add(length)).unwrap_or(i128::MAX),
                length: self.length,
            })?;
        Ok(self.window(start..end))
    }

    /// Returns the first `count` elements without copying.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Range`] if `count` is negative or exceeds the
    /// length.
    pub fn take<I: Position>(&self, count: I) -> Result<Self, SequenceError> {
        let count = self.checked_boundary(count)?;
        Ok(self.window(0..count))
    }

    /// Returns everything after the first `count` elements without copying.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Range`] if `count` is negative or exceeds the
    /// length.
    pub fn drop_first<I: Position>(&self, count: I) -> Result<Self, SequenceError> {
        let count = self.checked_boundary(count)?;
        Ok(self.window(count..self.length))
    }

    /// Splits into `(take(index), drop_first(index))`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Range`] if `index` is negative or exceeds the
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// let (left, right) = sequence.split_at(2).unwrap();
    /// assert_eq!(left.to_vec(), vec![1, 2]);
    /// assert_eq!(right.to_vec(), vec![3, 4, 5]);
    /// ```
    pub fn split_at<I: Position>(&self, index: I) -> Result<(Self, Self), SequenceError> {
        let index = self.checked_boundary(index)?;
        Ok((self.window(0..index), self.window(index..self.length)))
    }

    /// Splits into two halves, the left one holding `len() / 2` elements.
    #[must_use]
    pub fn halves(&self) -> (Self, Self) {
        let middle = self.length / 2;
        (self.window(0..middle), self.window(middle..self.length))
    }

    /// Validates a boundary position, which may equal the length.
    fn checked_boundary<I: Position>(&self, position: I) -> Result<usize, SequenceError> {
        match position.to_position() {
            Ok(position) if position <= self.length => Ok(position),
            Ok(position) => Err(SequenceError::Range {
                index: i128::try_from(position).unwrap_or(i128::MAX),
                length: self.length,
            }),
            Err(index) => Err(SequenceError::Range {
                index,
                length: self.length,
            }),
        }
    }

    /// Shares storage for the given relative range.
    fn window(&self, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= self.length);
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            start: self.start + range.start,
            length: range.len(),
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates a sequence by cloning a slice.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from(slice.to_vec())
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

// =============================================================================
// Parallel Operations
// =============================================================================

#[inline]
fn default_engine() -> Engine {
    Engine::default()
}

/// Operations evaluated by [`Engine::default`]. Use an explicit [`Engine`] to
/// choose the substrate or the sequential cutoff.
impl<T: Send + Sync> Sequence<T> {
    /// Builds `<function(0), function(1), ..., function(length - 1)>`.
    ///
    /// Each `function(i)` is evaluated exactly once and the evaluations may
    /// run in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Domain`] if `length` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::{Sequence, SequenceError};
    ///
    /// let sequence = Sequence::tabulate(5, |index| index).unwrap();
    /// assert_eq!(sequence.to_vec(), vec![0, 1, 2, 3, 4]);
    ///
    /// let error = Sequence::tabulate(-1, |index| index).unwrap_err();
    /// assert_eq!(error, SequenceError::Domain { length: -1 });
    /// ```
    pub fn tabulate<L, F>(length: L, function: F) -> Result<Self, SequenceError>
    where
        L: Position,
        F: Fn(usize) -> T + Sync,
    {
        default_engine().tabulate(length, function)
    }

    /// Fallible [`Sequence::tabulate`].
    ///
    /// # Errors
    ///
    /// Returns the error from the lowest failing position, or a converted
    /// [`SequenceError::Domain`] if `length` is negative.
    pub fn try_tabulate<L, E, F>(length: L, function: F) -> Result<Self, E>
    where
        L: Position,
        E: From<SequenceError> + Send,
        F: Fn(usize) -> Result<T, E> + Sync,
    {
        default_engine().try_tabulate(length, function)
    }

    /// Applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let doubled = Sequence::from(vec![1, 2, 3]).map(|value| 2 * value);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        U: Send,
        F: Fn(&T) -> U + Sync,
    {
        default_engine().map(self, function)
    }

    /// Fallible [`Sequence::map`].
    ///
    /// # Errors
    ///
    /// Returns the error raised for the lowest failing position.
    pub fn try_map<U, E, F>(&self, function: F) -> Result<Sequence<U>, E>
    where
        U: Send,
        E: Send,
        F: Fn(&T) -> Result<U, E> + Sync,
    {
        default_engine().try_map(self, function)
    }

    /// Combines `function(element)` for every element with a monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    /// use parseq::algebra::{Max, Sum};
    ///
    /// let sequence = Sequence::from(vec![3, 9, 4]);
    /// assert_eq!(sequence.fold_map(|value| Sum(*value)), Sum(16));
    /// assert_eq!(sequence.fold_map(|value| Max(*value)), Max(9));
    /// ```
    pub fn fold_map<M, F>(&self, function: F) -> M
    where
        M: Monoid + Clone + Send + Sync,
        F: Fn(&T) -> M + Sync,
    {
        default_engine().fold_map(self, function)
    }

    /// Combines `function(element)` for every element by divide and conquer.
    pub fn map_reduce<U, M, C>(&self, map: M, combine: C, identity: U) -> U
    where
        U: Clone + Send + Sync,
        M: Fn(&T) -> U + Sync,
        C: Fn(U, U) -> U + Sync,
    {
        default_engine().map_reduce(self, map, combine, identity)
    }
}

impl<T: Clone + Send + Sync> Sequence<T> {
    /// Builds a sequence of `length` copies of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Domain`] if `length` is negative.
    pub fn repeat<L: Position>(length: L, element: T) -> Result<Self, SequenceError> {
        default_engine().repeat(length, element)
    }

    /// Keeps the elements satisfying `predicate`, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=10).collect();
    /// let odd = sequence.filter(|value| value % 2 == 1);
    /// assert_eq!(odd.to_vec(), vec![1, 3, 5, 7, 9]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync,
    {
        default_engine().filter(self, predicate)
    }

    /// Fallible [`Sequence::filter`].
    ///
    /// # Errors
    ///
    /// Returns the error raised for the lowest failing position.
    pub fn try_filter<E, P>(&self, predicate: P) -> Result<Self, E>
    where
        E: Send,
        P: Fn(&T) -> Result<bool, E> + Sync,
    {
        default_engine().try_filter(self, predicate)
    }

    /// Combines all elements with an associative `combine`, seeded with its
    /// `identity`. An empty sequence reduces to `identity`.
    ///
    /// The reduction splits the sequence in halves recursively, so `combine`
    /// must be associative but need not be commutative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4]);
    /// assert_eq!(sequence.reduce(|left, right| left + right, 0), 10);
    ///
    /// let empty: Sequence<i32> = Sequence::empty();
    /// assert_eq!(empty.reduce(|left, right| left + right, 0), 0);
    /// ```
    pub fn reduce<C>(&self, combine: C, identity: T) -> T
    where
        C: Fn(T, T) -> T + Sync,
    {
        default_engine().reduce(self, combine, identity)
    }

    /// Fallible [`Sequence::reduce`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `combine`, in reduction-tree order.
    pub fn try_reduce<E, C>(&self, combine: C, identity: T) -> Result<T, E>
    where
        E: Send,
        C: Fn(T, T) -> Result<T, E> + Sync,
    {
        default_engine().try_reduce(self, combine, identity)
    }

    /// Exclusive prefix combination.
    ///
    /// Returns `<identity, x0, x0·x1, ..., x0·…·x(n-2)>` together with the
    /// combination of every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4]);
    /// let (prefixes, total) = sequence.scan(|left, right| left + right, 0);
    /// assert_eq!(prefixes.to_vec(), vec![0, 1, 3, 6]);
    /// assert_eq!(total, 10);
    /// ```
    pub fn scan<C>(&self, combine: C, identity: T) -> (Self, T)
    where
        C: Fn(T, T) -> T + Sync,
    {
        default_engine().scan(self, combine, identity)
    }

    /// Concatenates `self` and `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        default_engine().append(self, other)
    }

    /// Prepends one element. Costs as much as [`Sequence::append`].
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        default_engine().append(&Self::singleton(element), self)
    }

    /// Reverses the order of the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let sequence = Sequence::tabulate(5, |index| index).unwrap();
    /// assert_eq!(sequence.reverse().to_vec(), vec![4, 3, 2, 1, 0]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        default_engine().reverse(self)
    }

    /// Pairs elements position by position, truncating to the shorter input.
    #[must_use]
    pub fn zip<U>(&self, other: &Sequence<U>) -> Sequence<(T, U)>
    where
        U: Clone + Send + Sync,
    {
        default_engine().zip_with(self, other, |left, right| (left.clone(), right.clone()))
    }

    /// Combines elements position by position, truncating to the shorter
    /// input.
    #[must_use]
    pub fn zip_with<U, V, F>(&self, other: &Sequence<U>, function: F) -> Sequence<V>
    where
        U: Send + Sync,
        V: Send,
        F: Fn(&T, &U) -> V + Sync,
    {
        default_engine().zip_with(self, other, function)
    }
}

impl<T: Monoid + Clone + Send + Sync> Sequence<T> {
    /// Reduces with the element type's own monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let words = Sequence::from(vec!["par".to_string(), "allel".to_string()]);
    /// assert_eq!(words.combine_all(), "parallel");
    /// ```
    #[must_use]
    pub fn combine_all(&self) -> T {
        default_engine().reduce(self, Semigroup::combine, T::empty())
    }
}

impl<T: Clone + Send + Sync> Sequence<Sequence<T>> {
    /// Concatenates nested sequences in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    ///
    /// let nested = Sequence::tabulate(3, |row| {
    ///     Sequence::tabulate(row, |column| column).unwrap()
    /// })
    /// .unwrap();
    /// assert_eq!(nested.flatten().to_vec(), vec![0, 0, 1]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Sequence<T> {
        default_engine().flatten(self)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`Sequence`].
#[derive(Debug, Clone)]
pub struct SequenceIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SequenceIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SequenceIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SequenceIterator<'_, T> {}

impl<T> FusedIterator for SequenceIterator<'_, T> {}

/// Owning iterator over a [`Sequence`].
///
/// Elements are cloned out of the shared storage.
#[derive(Debug, Clone)]
pub struct SequenceIntoIterator<T> {
    sequence: Sequence<T>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for SequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.sequence.as_slice()[self.front].clone();
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for SequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.sequence.as_slice()[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for SequenceIntoIterator<T> {}

impl<T: Clone> FusedIterator for SequenceIntoIterator<T> {}

#[cfg(feature = "rayon")]
impl<T: Sync> Sequence<T> {
    /// Returns a rayon parallel iterator over references to the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parseq::Sequence;
    /// use rayon::prelude::*;
    ///
    /// let sequence: Sequence<u64> = (1..=100).collect();
    /// let total: u64 = sequence.par_iter().sum();
    /// assert_eq!(total, 5050);
    /// ```
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, T> {
        use rayon::prelude::*;
        self.as_slice().par_iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        let length = elements.len();
        Self {
            elements: ReferenceCounter::from(elements),
            start: 0,
            length,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from(iterator.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Clone> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.to_vec()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.length;
        SequenceIntoIterator {
            sequence: self,
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Formats as `<a, b, c>`.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ">")
    }
}

/// Concatenation, with the empty sequence as identity.
impl<T: Clone + Send + Sync> Semigroup for Sequence<T> {
    fn combine(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        self.append(&other)
    }
}

impl<T: Clone + Send + Sync> Monoid for Sequence<T> {
    fn empty() -> Self {
        Self::empty()
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
