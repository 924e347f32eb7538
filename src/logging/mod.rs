//! Logging and observability
//!
//! The library itself only emits `tracing` events. Binaries install a
//! subscriber with [`init_logging`]; variable values are never logged, only
//! names and types.

pub mod structured;

pub use structured::init_logging;
