//! Error types for HAL operations.

use crate::pins::{DigitalPinId, PinMode};

/// Errors that can occur in the hardware abstraction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HalError {
    /// A digital write targeted a pin that is not configured as an output.
    #[error("Can only write to an OUTPUT pin: {pin} is configured as {mode}")]
    PinNotOutput {
        /// Pin that was written.
        pin: DigitalPinId,
        /// Mode the pin is currently configured with.
        mode: PinMode,
    },
    /// The global instance has not been installed yet.
    #[error("Global instance is not installed")]
    NotInstalled,
    /// The global instance was installed twice.
    #[error("Global instance is already installed")]
    AlreadyInstalled,
    /// The global instance is already borrowed further up the call stack.
    #[error("Global instance is already in use")]
    Busy,
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl HalError {
    /// Create an invalid configuration error.
    #[must_use]
    pub const fn invalid_configuration(msg: &'static str) -> Self {
        Self::InvalidConfiguration(msg)
    }

    /// Whether this error indicates a defect in calling code rather than a
    /// runtime condition.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::PinNotOutput { .. } | Self::AlreadyInstalled | Self::Busy
        )
    }
}

/// A specialized `Result` type for HAL operations.
pub type HalResult<T> = core::result::Result<T, HalError>;
