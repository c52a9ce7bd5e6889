//! The sequence engine: parallel operations over [`Sequence`].
//!
//! An [`Engine`] pairs a fork-join [`Substrate`] with an [`EngineConfig`].
//! Every operation bisects its index range down to blocks of at most
//! `grain` elements, evaluates each block sequentially, and joins the results.
//! The recursion tree depends only on the input length and the grain, so
//! results are deterministic for associative operators regardless of
//! scheduling.
//!
//! The convenience methods on [`Sequence`] use [`Engine::default`]. Build an
//! engine explicitly to pick a substrate or a cutoff:
//!
//! ```rust
//! use parseq::{Engine, EngineConfig};
//!
//! let engine = Engine::sequential(EngineConfig::new(2).unwrap());
//! let sequence = engine.tabulate(6, |index| index as i64).unwrap();
//! assert_eq!(engine.reduce(&sequence, |left, right| left + right, 0), 15);
//! ```

mod filter;
mod fork;
mod reduce;

use crate::config::{ConfigError, EngineConfig};
use crate::error::SequenceError;
use crate::index::Position;
use crate::sequence::Sequence;
use crate::substrate::{Sequential, Substrate};

#[cfg(feature = "rayon")]
use crate::substrate::Rayon;

/// Substrate used by [`Engine::default`]: rayon when the `rayon` feature is
/// enabled, otherwise [`Sequential`].
#[cfg(feature = "rayon")]
pub type DefaultSubstrate = Rayon;

/// Substrate used by [`Engine::default`]: rayon when the `rayon` feature is
/// enabled, otherwise [`Sequential`].
#[cfg(not(feature = "rayon"))]
pub type DefaultSubstrate = Sequential;

/// Runs sequence operations on a substrate with a given configuration.
#[derive(Debug, Clone)]
pub struct Engine<S = DefaultSubstrate> {
    substrate: S,
    config: EngineConfig,
}

impl Engine<DefaultSubstrate> {
    /// Creates an engine on the default substrate.
    ///
    /// With the `rayon` feature, a thread count in `config` builds a dedicated
    /// pool; otherwise the global pool is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThreadPool`] if a dedicated pool cannot be
    /// built.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        #[cfg(feature = "rayon")]
        let substrate = Rayon::from_config(&config)?;
        #[cfg(not(feature = "rayon"))]
        let substrate = Sequential;
        Ok(Self::with_substrate(substrate, config))
    }

    /// Creates an engine configured from `PARSEQ_GRAIN` and `PARSEQ_THREADS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is invalid or the pool cannot be
    /// built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(EngineConfig::from_env()?)
    }
}

impl Default for Engine<DefaultSubstrate> {
    fn default() -> Self {
        Self::with_substrate(DefaultSubstrate::default(), EngineConfig::default())
    }
}

impl Engine<Sequential> {
    /// Creates an engine that runs everything on the calling thread.
    #[must_use]
    pub const fn sequential(config: EngineConfig) -> Self {
        Self::with_substrate(Sequential, config)
    }
}

impl<S: Substrate> Engine<S> {
    /// Creates an engine on an explicit substrate.
    #[must_use]
    pub const fn with_substrate(substrate: S, config: EngineConfig) -> Self {
        Self { substrate, config }
    }

    /// The substrate forks are issued on.
    #[must_use]
    pub const fn substrate(&self) -> &S {
        &self.substrate
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    const fn grain(&self) -> usize {
        self.config.grain()
    }

    fn trace(&self, operation: &str, length: usize) {
        log::trace!(
            "{operation}: length={length}, grain={}, substrate={}",
            self.grain(),
            self.substrate.name()
        );
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds `<function(0), ..., function(length - 1)>`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Domain`] if `length` is negative.
    pub fn tabulate<T, L, F>(&self, length: L, function: F) -> Result<Sequence<T>, SequenceError>
    where
        T: Send,
        L: Position,
        F: Fn(usize) -> T + Sync,
    {
        let length = checked_length(length)?;
        self.trace("tabulate", length);
        Ok(Sequence::from(fork::tabulate_values(
            &self.substrate,
            self.grain(),
            length,
            &function,
        )))
    }

    /// Fallible [`Engine::tabulate`].
    ///
    /// # Errors
    ///
    /// Returns the error from the lowest failing position, or a converted
    /// [`SequenceError::Domain`] if `length` is negative.
    pub fn try_tabulate<T, L, E, F>(&self, length: L, function: F) -> Result<Sequence<T>, E>
    where
        T: Send,
        L: Position,
        E: From<SequenceError> + Send,
        F: Fn(usize) -> Result<T, E> + Sync,
    {
        let length = checked_length(length)?;
        self.trace("try_tabulate", length);
        fork::try_tabulate_values(&self.substrate, self.grain(), length, &function)
            .map(Sequence::from)
    }

    /// Builds a sequence of `length` copies of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Domain`] if `length` is negative.
    pub fn repeat<T, L>(&self, length: L, element: T) -> Result<Sequence<T>, SequenceError>
    where
        T: Clone + Send + Sync,
        L: Position,
    {
        self.tabulate(length, |_| element.clone())
    }

    // =========================================================================
    // Element-wise Transformation
    // =========================================================================

    /// Applies `function` to every element. Equivalent to
    /// `tabulate(i => function(nth(sequence, i)), len)`.
    pub fn map<T, U, F>(&self, sequence: &Sequence<T>, function: F) -> Sequence<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("map", elements.len());
        Sequence::from(fork::tabulate_values(
            &self.substrate,
            self.grain(),
            elements.len(),
            &|index: usize| function(&elements[index]),
        ))
    }

    /// Fallible [`Engine::map`].
    ///
    /// # Errors
    ///
    /// Returns the error raised for the lowest failing position.
    pub fn try_map<T, U, E, F>(&self, sequence: &Sequence<T>, function: F) -> Result<Sequence<U>, E>
    where
        T: Sync,
        U: Send,
        E: Send,
        F: Fn(&T) -> Result<U, E> + Sync,
    {
        let elements = sequence.as_slice();
        self.trace("try_map", elements.len());
        fork::try_tabulate_values(&self.substrate, self.grain(), elements.len(), &|index: usize| {
            function(&elements[index])
        })
        .map(Sequence::from)
    }

    /// Combines elements position by position, truncating to the shorter
    /// input.
    pub fn zip_with<T, U, V, F>(
        &self,
        left: &Sequence<T>,
        right: &Sequence<U>,
        function: F,
    ) -> Sequence<V>
    where
        T: Sync,
        U: Sync,
        V: Send,
        F: Fn(&T, &U) -> V + Sync,
    {
        let (left, right) = (left.as_slice(), right.as_slice());
        let length = left.len().min(right.len());
        self.trace("zip_with", length);
        Sequence::from(fork::tabulate_values(
            &self.substrate,
            self.grain(),
            length,
            &|index: usize| function(&left[index], &right[index]),
        ))
    }

    // =========================================================================
    // Reordering and Concatenation
    // =========================================================================

    /// Reverses a sequence: the element at `i` moves to `n - 1 - i`.
    pub fn reverse<T>(&self, sequence: &Sequence<T>) -> Sequence<T>
    where
        T: Clone + Send + Sync,
    {
        let elements = sequence.as_slice();
        let length = elements.len();
        self.trace("reverse", length);
        Sequence::from(fork::tabulate_values(
            &self.substrate,
            self.grain(),
            length,
            &|index: usize| elements[length - 1 - index].clone(),
        ))
    }

    /// Concatenates two sequences.
    pub fn append<T>(&self, left: &Sequence<T>, right: &Sequence<T>) -> Sequence<T>
    where
        T: Clone + Send + Sync,
    {
        let (left, right) = (left.as_slice(), right.as_slice());
        let boundary = left.len();
        self.trace("append", boundary + right.len());
        Sequence::from(fork::tabulate_values(
            &self.substrate,
            self.grain(),
            boundary + right.len(),
            &|index: usize| {
                if index < boundary {
                    left[index].clone()
                } else {
                    right[index - boundary].clone()
                }
            },
        ))
    }
}

/// Validates a caller-supplied length.
fn checked_length<L: Position>(length: L) -> Result<usize, SequenceError> {
    length
        .to_position()
        .map_err(|length| SequenceError::Domain { length })
}
