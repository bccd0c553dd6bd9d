//! Configuration types for the HAL.

use crate::error::{HalError, HalResult};
use crate::pins::{ANALOG_PIN_COUNT, AnalogPinId};

/// Largest value the 10-bit ADC can report.
pub const ADC_MAX: i32 = 1023;

/// Initial state for a [`FakeHal`](crate::FakeHal).
///
/// # Real-Time Safety
///
/// Contains only primitive types; no heap allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FakeHalConfig {
    /// Virtual clock value at construction, in milliseconds.
    ///
    /// Default: 0.
    pub start_millis: u32,

    /// Value returned by `analog_read` for each channel until a test
    /// overrides it.
    ///
    /// Default: 0 on every channel.
    pub analog_values: [i32; ANALOG_PIN_COUNT],
}

impl FakeHalConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> FakeHalConfigBuilder {
        FakeHalConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an initial analog value is outside `0..=ADC_MAX`.
    pub fn validate(&self) -> HalResult<()> {
        if self
            .analog_values
            .iter()
            .any(|value| !(0..=ADC_MAX).contains(value))
        {
            return Err(HalError::invalid_configuration(
                "analog_values must be between 0 and 1023",
            ));
        }
        Ok(())
    }

    /// Initial value configured for one analog pin.
    #[must_use]
    pub fn analog_value(&self, pin: AnalogPinId) -> i32 {
        self.analog_values.get(pin.index()).copied().unwrap_or(0)
    }
}

/// Builder for [`FakeHalConfig`].
#[derive(Debug, Default)]
pub struct FakeHalConfigBuilder {
    config: FakeHalConfig,
}

impl FakeHalConfigBuilder {
    /// Set the virtual clock value at construction.
    #[must_use]
    pub fn start_millis(mut self, ms: u32) -> Self {
        self.config.start_millis = ms;
        self
    }

    /// Set the initial value of one analog input.
    #[must_use]
    pub fn analog(mut self, pin: AnalogPinId, value: i32) -> Self {
        if let Some(slot) = self.config.analog_values.get_mut(pin.index()) {
            *slot = value;
        }
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> HalResult<FakeHalConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
