//! Shared helpers for integration tests.

#![allow(dead_code)]

use parseq::{Engine, EngineConfig, Sequential};

/// Installs `env_logger` once so `RUST_LOG=parseq=trace` shows engine traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A sequential engine with the given cutoff.
pub fn sequential_engine(grain: usize) -> Engine<Sequential> {
    Engine::sequential(EngineConfig::new(grain).expect("grain must be positive"))
}

/// A rayon engine on a dedicated pool with the given cutoff.
#[cfg(feature = "rayon")]
pub fn rayon_engine(grain: usize, threads: usize) -> Engine<parseq::Rayon> {
    let config = EngineConfig::new(grain)
        .and_then(|config| config.with_threads(threads))
        .expect("configuration must be valid");
    Engine::new(config).expect("thread pool must build")
}
