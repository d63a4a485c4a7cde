//! Core types, storage port, errors, config, tracing, and constants for the
//! bead-road analysis engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod traits;
pub mod tracing;
pub mod types;
