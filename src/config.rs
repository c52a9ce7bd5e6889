//! Engine configuration.
//!
//! [`EngineConfig`] controls how the engine bisects work:
//!
//! - `grain`: ranges of at most this many elements are processed
//!   sequentially instead of being forked further (the sequential cutoff)
//! - `threads`: size of a dedicated rayon pool, if one is wanted
//!
//! Values can be set programmatically or loaded from the environment with
//! [`EngineConfig::from_env`].
//!
//! # Examples
//!
//! ```rust
//! use parseq::EngineConfig;
//!
//! let config = EngineConfig::default().with_grain(64).unwrap();
//! assert_eq!(config.grain(), 64);
//! assert_eq!(config.threads(), None);
//! ```

use std::env;

use thiserror::Error;

/// Default sequential cutoff.
pub const DEFAULT_GRAIN: usize = 1024;

/// Environment variable holding the sequential cutoff.
pub const GRAIN_VARIABLE: &str = "PARSEQ_GRAIN";

/// Environment variable holding the dedicated pool size.
pub const THREADS_VARIABLE: &str = "PARSEQ_THREADS";

/// Errors raised while building an engine configuration or substrate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value was present but could not be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the setting or environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The dedicated rayon thread pool could not be built.
    #[cfg(feature = "rayon")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Tuning knobs for the sequence engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    grain: usize,
    threads: Option<usize>,
}

impl EngineConfig {
    /// Creates a configuration with the given grain and no dedicated pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `grain` is zero.
    pub fn new(grain: usize) -> Result<Self, ConfigError> {
        Self::default().with_grain(grain)
    }

    /// Loads configuration from `PARSEQ_GRAIN` and `PARSEQ_THREADS`.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let grain = get_optional_env_parsed(GRAIN_VARIABLE)?.unwrap_or(DEFAULT_GRAIN);
        let threads = get_optional_env_parsed(THREADS_VARIABLE)?;

        let config = Self::default().with_grain(grain)?;
        let config = match threads {
            Some(threads) => config.with_threads(threads)?,
            None => config,
        };
        log::debug!(
            "loaded engine config from environment: grain={}, threads={:?}",
            config.grain,
            config.threads
        );
        Ok(config)
    }

    /// Returns a copy with a different sequential cutoff.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `grain` is zero.
    pub fn with_grain(self, grain: usize) -> Result<Self, ConfigError> {
        if grain == 0 {
            return Err(ConfigError::InvalidValue {
                key: "grain".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(Self { grain, ..self })
    }

    /// Returns a copy requesting a dedicated pool of `threads` workers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `threads` is zero.
    pub fn with_threads(self, threads: usize) -> Result<Self, ConfigError> {
        if threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(Self {
            threads: Some(threads),
            ..self
        })
    }

    /// Sequential cutoff.
    #[inline]
    #[must_use]
    pub const fn grain(&self) -> usize {
        self.grain
    }

    /// Requested dedicated pool size.
    #[inline]
    #[must_use]
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grain: DEFAULT_GRAIN,
            threads: None,
        }
    }
}

/// Reads an optional positive integer from the environment.
fn get_optional_env_parsed(key: &str) -> Result<Option<usize>, ConfigError> {
    env::var(key).map_or(Ok(None), |value| parse_positive(key, &value).map(Some))
}

fn parse_positive(key: &str, value: &str) -> Result<usize, ConfigError> {
    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|error: std::num::ParseIntError| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })?;
    if parsed == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must be greater than 0".to_string(),
        });
    }
    Ok(parsed)
}
