//! Simulation driving: bootstrap and the execution loop.

/// Bootstrap: image placement and external input capture.
pub mod loader;
/// Run-to-halt execution loop.
pub mod runner;

pub use runner::{RunSummary, Runner};
