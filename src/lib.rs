//! # Latency Timers
//!
//! Lightweight instrumentation for measuring how long code takes:
//! - `ScopedTimer` reports the lifetime of a scope when it is dropped
//! - `AccumulateTimer` sums repeated start/end intervals and reports the total
//! - TOML configuration for the default display unit and log level

pub mod config;

pub use timers;
pub use timers::{AccumulateTimer, LineSink, ScopedTimer, SharedBuffer, TimeUnit, TimerError};
pub use timers::time_scope;

pub type Result<T> = anyhow::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
