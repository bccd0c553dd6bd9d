//! Error types for alarm operations.

use ventilator_hal::HalError;

/// Alarm stack errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlarmError {
    /// `read` on a stack with no records.
    #[error("Alarm stack is empty")]
    Empty,
    /// The process-wide stack was used before `init`.
    #[error("Alarm stack is not initialized")]
    NotInitialized,
    /// The process-wide cell could not be accessed.
    #[error("HAL error: {0}")]
    Hal(#[from] HalError),
}

impl AlarmError {
    /// Whether retrying after draining or initializing can succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Empty | Self::NotInitialized)
    }
}

/// Result type for alarm operations.
pub type AlarmResult<T> = core::result::Result<T, AlarmError>;
