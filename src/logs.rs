//! Simulator log entries and the console's log filter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level chatter from the simulator.
    Verbose,
    /// Regular output.
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Where a log entry came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogContext {
    /// Construct path of the emitting resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// Type of the emitting resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Human label of the emitting resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One log line from the simulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
    /// Source information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<LogContext>,
}

/// Which levels pass the filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LevelFilter {
    /// Include `verbose` entries.
    pub verbose: bool,
    /// Include `info` entries.
    pub info: bool,
    /// Include `warn` entries.
    pub warn: bool,
    /// Include `error` entries.
    pub error: bool,
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self { verbose: false, info: true, warn: true, error: true }
    }
}

impl LevelFilter {
    /// Enables exactly the given levels.
    #[must_use]
    pub fn only(levels: &[LogLevel]) -> Self {
        Self {
            verbose: levels.contains(&LogLevel::Verbose),
            info: levels.contains(&LogLevel::Info),
            warn: levels.contains(&LogLevel::Warn),
            error: levels.contains(&LogLevel::Error),
        }
    }

    /// Returns `true` if `level` is enabled.
    #[must_use]
    pub fn allows(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Verbose => self.verbose,
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
        }
    }
}

/// Console log filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogFilter {
    /// Enabled levels.
    pub level: LevelFilter,
    /// Only entries at or after this timestamp (ms) pass.
    pub timestamp: i64,
    /// Case-insensitive substring matched against message and source path.
    pub text: String,
}

impl LogFilter {
    /// Returns `true` if `entry` passes the filter.
    #[must_use]
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if !self.level.allows(entry.level) || entry.timestamp < self.timestamp {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }
        let source = entry.ctx.as_ref().and_then(|c| c.source_path.as_deref()).unwrap_or_default();
        let haystack = format!("{}{source}", entry.message).to_lowercase();
        haystack.contains(&self.text.to_lowercase())
    }
}

/// Keeps the entries that pass `filter`, in their original order.
#[must_use]
pub fn filter_logs(entries: Vec<LogEntry>, filter: &LogFilter) -> Vec<LogEntry> {
    entries.into_iter().filter(|entry| filter.matches(entry)).collect()
}
