//! Configuration management

use serde::{Deserialize, Serialize};
use anyhow::Result;
use timers::{AccumulateTimer, ScopedTimer, TimeUnit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Display unit for timers built from this config.
    pub default_unit: TimeUnit,
    /// Filter directive for diagnostics, e.g. `info` or `timers=warn`.
    pub log_level: String,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_unit: TimeUnit::Microseconds,
            log_level: "info".to_string(),
        }
    }
}

impl TimerConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TimerConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Starts a stdout `ScopedTimer` in the configured unit.
    pub fn scoped(&self, name: impl Into<String>) -> ScopedTimer {
        ScopedTimer::with_unit(name, self.default_unit)
    }

    /// Creates an idle stdout `AccumulateTimer` in the configured unit.
    pub fn accumulate(&self, name: impl Into<String>) -> AccumulateTimer {
        AccumulateTimer::with_unit(name, self.default_unit)
    }
}
