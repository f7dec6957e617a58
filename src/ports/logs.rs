//! Log port for the simulator's log stream and error state.

use crate::logs::LogEntry;

/// Provides the simulator's accumulated logs.
pub trait LogSource: Send + Sync {
    /// Returns every log entry recorded so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log stream cannot be read.
    fn logs(&self) -> Result<Vec<LogEntry>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the app's current error message, if it is in an error state.
    fn error_message(&self) -> Option<String>;
}
