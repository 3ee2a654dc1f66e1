use std::time::Duration;
use crate::unit::TimeUnit;

/// Width of the name column in a timing line.
pub const NAME_WIDTH: usize = 30;

/// Builds the `[TIME]` report line for a measured duration, without the
/// trailing newline.
///
/// The name is left-justified and padded or truncated to [`NAME_WIDTH`]
/// columns so that lines from different timers align. A column is one
/// `char`; double-width glyphs are not accounted for.
pub fn format_line(name: &str, elapsed: Duration, unit: TimeUnit) -> String {
    format!(
        "[TIME] {:<width$.width$}: {} {}",
        name,
        unit.format_value(elapsed.as_nanos()),
        unit.suffix(),
        width = NAME_WIDTH,
    )
}
