use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("unknown time unit `{0}` (expected one of ns, us, ms, s)")]
    UnknownUnit(String),
}

/// Display unit for a timer's reported duration.
///
/// Only affects formatting: timers always accumulate whole nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "ns", alias = "nanoseconds")]
    Nanoseconds,
    #[default]
    #[serde(rename = "us", alias = "microseconds")]
    Microseconds,
    #[serde(rename = "ms", alias = "milliseconds")]
    Milliseconds,
    #[serde(rename = "s", alias = "seconds")]
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
    ];

    #[inline]
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }

    #[inline]
    pub fn nanos_per_unit(&self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
        }
    }

    /// Renders a nanosecond count in this unit: a plain integer for
    /// nanoseconds, four decimal places otherwise.
    pub fn format_value(&self, nanos: u128) -> String {
        match self {
            TimeUnit::Nanoseconds => nanos.to_string(),
            _ => format!("{:.4}", nanos as f64 / self.nanos_per_unit() as f64),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanos" | "nanosecond" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "us" | "µs" | "micros" | "microsecond" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "millis" | "millisecond" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            _ => Err(TimerError::UnknownUnit(s.to_string())),
        }
    }
}
