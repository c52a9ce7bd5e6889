//! Fork-join task substrates.
//!
//! The engine never spawns threads itself. Every parallel step is expressed as
//! a binary fork followed by a join, delegated to a [`Substrate`]:
//!
//! - [`Sequential`]: runs both halves on the calling thread, left first
//! - [`Rayon`]: work-stealing execution on the global rayon pool or on a
//!   dedicated pool (requires the `rayon` feature)
//! - [`Recording`]: wraps another substrate and counts forks
//!
//! A substrate must run each forked closure exactly once and must return only
//! after both have completed. A panic in either closure is resumed on the
//! caller once both sides have stopped.
//!
//! # Examples
//!
//! ```rust
//! use parseq::{Sequential, Substrate};
//!
//! let (left, right) = Sequential.join(|| 1 + 1, || "two");
//! assert_eq!((left, right), (2, "two"));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "rayon")]
use crate::config::{ConfigError, EngineConfig};
#[cfg(feature = "rayon")]
use crate::sequence::ReferenceCounter;

/// A fork-join execution substrate.
pub trait Substrate: Sync {
    /// Runs `left` and `right`, potentially in parallel, and returns both
    /// results once both have finished.
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;

    /// Returns a short name for log output.
    fn name(&self) -> &'static str;
}

impl<S: Substrate> Substrate for &S {
    #[inline]
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (**self).join(left, right)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// =============================================================================
// Sequential
// =============================================================================

/// Runs every fork on the calling thread, left branch first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sequential;

impl Substrate for Sequential {
    #[inline]
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let left_result = left();
        let right_result = right();
        (left_result, right_result)
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

// =============================================================================
// Rayon
// =============================================================================

/// Work-stealing substrate backed by rayon.
///
/// [`Rayon::global`] forks onto rayon's global pool. [`Rayon::from_config`]
/// builds a dedicated pool when the configuration asks for a thread count;
/// clones share that pool.
///
/// # Examples
///
/// ```rust
/// use parseq::{EngineConfig, Rayon, Substrate};
///
/// let config = EngineConfig::default().with_threads(2).unwrap();
/// let substrate = Rayon::from_config(&config).unwrap();
/// assert_eq!(substrate.current_num_threads(), 2);
///
/// let (left, right) = substrate.join(|| 40, || 2);
/// assert_eq!(left + right, 42);
/// ```
#[cfg(feature = "rayon")]
#[derive(Debug, Clone, Default)]
pub struct Rayon {
    pool: Option<ReferenceCounter<rayon::ThreadPool>>,
}

#[cfg(feature = "rayon")]
impl Rayon {
    /// Uses rayon's global pool.
    #[must_use]
    pub const fn global() -> Self {
        Self { pool: None }
    }

    /// Builds a substrate for `config`.
    ///
    /// Without a thread count this is [`Rayon::global`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThreadPool`] if the dedicated pool cannot be
    /// built.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        match config.threads() {
            Some(threads) => Self::with_threads(threads),
            None => Ok(Self::global()),
        }
    }

    /// Builds a dedicated pool with `threads` workers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThreadPool`] if rayon refuses to build the pool.
    pub fn with_threads(threads: usize) -> Result<Self, ConfigError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("parseq-worker-{index}"))
            .build()?;
        log::debug!("built dedicated rayon pool with {threads} threads");
        Ok(Self {
            pool: Some(ReferenceCounter::new(pool)),
        })
    }

    /// Number of worker threads that forks can land on.
    #[must_use]
    pub fn current_num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }
}

#[cfg(feature = "rayon")]
impl Substrate for Rayon {
    #[inline]
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        match &self.pool {
            Some(pool) => pool.join(left, right),
            None => rayon::join(left, right),
        }
    }

    fn name(&self) -> &'static str {
        if self.pool.is_some() { "rayon-dedicated" } else { "rayon-global" }
    }
}

// =============================================================================
// Recording
// =============================================================================

/// Counts the forks issued through an inner substrate.
///
/// The count is per instance; nothing is recorded globally.
///
/// # Examples
///
/// ```rust
/// use parseq::{Engine, EngineConfig, Recording, Sequence, Sequential};
///
/// let recording = Recording::new(Sequential);
/// let engine = Engine::with_substrate(&recording, EngineConfig::new(1).unwrap());
/// let sequence = Sequence::from(vec![1, 2, 3, 4]);
///
/// assert_eq!(engine.reduce(&sequence, |a, b| a + b, 0), 10);
/// assert_eq!(recording.forks(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Recording<S> {
    inner: S,
    forks: AtomicUsize,
}

impl<S> Recording<S> {
    /// Wraps `inner` with a zeroed fork counter.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            forks: AtomicUsize::new(0),
        }
    }

    /// Number of forks observed so far.
    #[must_use]
    pub fn forks(&self) -> usize {
        self.forks.load(Ordering::Relaxed)
    }

    /// Resets the counter and returns its previous value.
    pub fn reset(&self) -> usize {
        self.forks.swap(0, Ordering::Relaxed)
    }

    /// Returns the wrapped substrate.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Substrate> Substrate for Recording<S> {
    #[inline]
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.forks.fetch_add(1, Ordering::Relaxed);
        self.inner.join(left, right)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
