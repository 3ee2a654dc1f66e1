use std::io::Stdout;
use std::time::{Duration, Instant};
use tracing::error;

use crate::format::format_line;
use crate::sink::LineSink;
use crate::unit::TimeUnit;

/// Measures the lifetime of a scope and reports it once when dropped.
///
/// The clock starts at construction. On drop, including early returns and
/// unwinding, one `[TIME]` line is written to the sink. The type is neither
/// `Clone` nor `Copy`, so a measurement can never be reported twice.
#[derive(Debug)]
pub struct ScopedTimer<S: LineSink = Stdout> {
    name: String,
    start: Instant,
    unit: TimeUnit,
    sink: S,
}

impl ScopedTimer<Stdout> {
    /// Starts a timer reporting in microseconds to standard output.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_unit(name, TimeUnit::default())
    }

    #[inline]
    pub fn with_unit(name: impl Into<String>, unit: TimeUnit) -> Self {
        Self::with_sink(name, unit, std::io::stdout())
    }
}

impl<S: LineSink> ScopedTimer<S> {
    #[inline]
    pub fn with_sink(name: impl Into<String>, unit: TimeUnit, sink: S) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            unit,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Time since construction. Does not report anything.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<S: LineSink> Drop for ScopedTimer<S> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let line = format_line(&self.name, elapsed, self.unit);
        if let Err(err) = self.sink.write_line(&line) {
            error!(timer = %self.name, error = %err, "failed to write timing line");
        }
    }
}

/// Evaluates a block inside a [`ScopedTimer`] and yields the block's value.
#[macro_export]
macro_rules! time_scope {
    ($name:expr, $code:block) => {{
        let _timer = $crate::scoped::ScopedTimer::new($name);
        $code
    }};
    ($name:expr, $unit:expr, $code:block) => {{
        let _timer = $crate::scoped::ScopedTimer::with_unit($name, $unit);
        $code
    }};
    ($name:expr, $unit:expr, $sink:expr, $code:block) => {{
        let _timer = $crate::scoped::ScopedTimer::with_sink($name, $unit, $sink);
        $code
    }};
}
