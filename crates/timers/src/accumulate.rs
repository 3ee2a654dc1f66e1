use std::io::Stdout;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use crate::format::format_line;
use crate::sink::LineSink;
use crate::unit::TimeUnit;

/// Sums any number of `start`/`end` intervals and reports the total once,
/// when dropped.
///
/// At most one interval is open at a time. Misuse (starting twice, ending
/// while idle) leaves the timing state untouched and emits a `tracing`
/// warning; diagnostics never go to the report sink. An interval still
/// open at drop is closed first and folded into the reported total.
///
/// Diagnostics are plain `tracing` events at `WARN` and `INFO`. Nothing is
/// printed unless a subscriber is installed whose filter admits those
/// levels for the `timers` target; a `log_level` of `error` hides them.
#[derive(Debug)]
pub struct AccumulateTimer<S: LineSink = Stdout> {
    name: String,
    unit: TimeUnit,
    sink: S,
    total: Duration,
    // Some while an interval is open
    started_at: Option<Instant>,
}

impl AccumulateTimer<Stdout> {
    /// Creates an idle timer reporting in microseconds to standard output.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_unit(name, TimeUnit::default())
    }

    #[inline]
    pub fn with_unit(name: impl Into<String>, unit: TimeUnit) -> Self {
        Self::with_sink(name, unit, std::io::stdout())
    }
}

impl<S: LineSink> AccumulateTimer<S> {
    #[inline]
    pub fn with_sink(name: impl Into<String>, unit: TimeUnit, sink: S) -> Self {
        Self {
            name: name.into(),
            unit,
            sink,
            total: Duration::ZERO,
            started_at: None,
        }
    }

    /// Opens an interval. Ignored with a warning if one is already open.
    #[inline]
    pub fn start(&mut self) {
        if self.started_at.is_some() {
            warn!(timer = %self.name, "start() called while already running");
            return;
        }
        self.started_at = Some(Instant::now());
    }

    /// Closes the open interval and adds it to the total. Ignored with a
    /// warning if no interval is open.
    #[inline]
    pub fn end(&mut self) {
        let now = Instant::now();
        match self.started_at.take() {
            Some(start) => {
                self.total = self.total.saturating_add(now.duration_since(start));
            }
            None => {
                warn!(timer = %self.name, "end() called without a matching start()");
            }
        }
    }

    /// Runs `f` inside one interval and returns its result.
    ///
    /// If an interval is already open, `f` simply runs within it and the
    /// interval stays open for the caller's own `end()`.
    pub fn measure<R>(&mut self, f: impl FnOnce() -> R) -> R {
        if self.is_running() {
            return f();
        }
        self.start();
        let result = f();
        self.end();
        result
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Sum of completed intervals. An open interval is not included.
    #[inline]
    pub fn total(&self) -> Duration {
        self.total
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

impl<S: LineSink> Drop for AccumulateTimer<S> {
    fn drop(&mut self) {
        if self.is_running() {
            self.end();
            info!(timer = %self.name, "timer was still running at destruction, auto-ended");
        }

        let line = format_line(&self.name, self.total, self.unit);
        if let Err(err) = self.sink.write_line(&line) {
            error!(timer = %self.name, error = %err, "failed to write timing line");
        }
    }
}
