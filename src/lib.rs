//! # parseq
//!
//! Immutable sequences with parallel, work/span-bounded operations.
//!
//! ## Overview
//!
//! - **[`Sequence`]**: an immutable, finite, ordered collection with O(1)
//!   length, random access and slicing
//! - **[`Engine`]**: parallel `tabulate`, `map`, `filter`, `reduce`, `scan`,
//!   `append`, `reverse` and `flatten`, built by fork-join divide and conquer
//! - **[`Substrate`]**: the fork-join primitive the engine runs on, either
//!   [`Sequential`], [`Rayon`] or an instrumented [`Recording`]
//! - **[`algebra`]**: `Semigroup` / `Monoid` for lawful reductions
//!
//! Every operation is a pure function of its arguments. No global state is
//! kept; engines are cheap values built per call or held by the caller.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): run forks on rayon's work-stealing pool
//! - `serde`: `Serialize` / `Deserialize` for [`Sequence`]
//!
//! ## Example
//!
//! ```rust
//! use parseq::prelude::*;
//!
//! let table = Sequence::tabulate(5, |row| {
//!     Sequence::tabulate(5, |column| row * column).unwrap()
//! })
//! .unwrap();
//! assert_eq!(table.nth(3).unwrap().to_vec(), vec![0, 3, 6, 9, 12]);
//!
//! let sum = table.flatten().reduce(|left, right| left + right, 0);
//! assert_eq!(sum, 100);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use parseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{Max, Min, Monoid, Product, Semigroup, Sum};
    pub use crate::config::EngineConfig;
    pub use crate::engine::Engine;
    pub use crate::error::SequenceError;
    pub use crate::index::Position;
    pub use crate::sequence::Sequence;
    pub use crate::substrate::{Recording, Sequential, Substrate};

    #[cfg(feature = "rayon")]
    pub use crate::substrate::Rayon;
}

pub mod algebra;
mod config;
mod engine;
mod error;
mod index;
mod sequence;
mod substrate;

pub use config::{ConfigError, DEFAULT_GRAIN, EngineConfig, GRAIN_VARIABLE, THREADS_VARIABLE};
pub use engine::{DefaultSubstrate, Engine};
pub use error::SequenceError;
pub use index::Position;
pub use sequence::{Sequence, SequenceIntoIterator, SequenceIterator};
pub use substrate::{Recording, Sequential, Substrate};

#[cfg(feature = "rayon")]
pub use substrate::Rayon;
