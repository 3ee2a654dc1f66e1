pub mod unit;
pub mod format;
pub mod sink;
pub mod scoped;
pub mod accumulate;

pub use unit::{TimeUnit, TimerError};
pub use format::format_line;
pub use sink::{LineSink, SharedBuffer};
pub use scoped::ScopedTimer;
pub use accumulate::AccumulateTimer;
