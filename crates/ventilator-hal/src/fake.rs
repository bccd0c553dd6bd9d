//! In-memory HAL for verification builds.
//!
//! `FakeHal` is part fake, part recorder:
//!
//! - Time is virtual. `millis()` stays constant until `delay()` advances it,
//!   so time-dependent logic runs instantly and deterministically.
//! - Analog inputs return whatever a test scripted with
//!   [`FakeHal::test_set_analog_pin`].
//! - Digital and PWM outputs are recorded in per-pin tables that tests can
//!   inspect with the `test_*` accessors.
//!
//! This module only exists with the `fake` feature (or under `cfg(test)`);
//! production builds do not contain the injection hooks at all.

use embedded_hal::delay::DelayNs;

use crate::config::FakeHalConfig;
use crate::error::HalResult;
use crate::hal::{HalApi, require_output};
use crate::pins::{
    ANALOG_PIN_COUNT, AnalogPinId, DIGITAL_PIN_COUNT, DigitalPinId, PinMode, PwmPinId,
    VoltageLevel,
};

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Deterministic fake implementation of [`HalApi`].
///
/// # Example
///
/// ```rust
/// use ventilator_hal::prelude::*;
///
/// let mut hal = FakeHal::new();
/// hal.delay(250);
/// hal.delay(250);
/// assert_eq!(hal.millis(), 500);
///
/// hal.test_set_analog_pin(AnalogPinId::A0, 612);
/// assert_eq!(hal.analog_read(AnalogPinId::A0), 612);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeHal {
    /// Virtual clock in milliseconds.
    millis: u32,
    /// Sub-millisecond remainder carried between `DelayNs` calls.
    pending_ns: u32,
    analog_pin_values: [i32; ANALOG_PIN_COUNT],
    digital_pin_levels: [VoltageLevel; DIGITAL_PIN_COUNT],
    digital_pin_modes: [PinMode; DIGITAL_PIN_COUNT],
    /// Indexed by digital pin number; only PWM-capable slots are ever written.
    pwm_pin_values: [i32; DIGITAL_PIN_COUNT],
}

impl FakeHal {
    /// Create a fake in the board's power-on state: time 0, all analog
    /// inputs 0, all pins `INPUT` and `LOW`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            millis: 0,
            pending_ns: 0,
            analog_pin_values: [0; ANALOG_PIN_COUNT],
            digital_pin_levels: [VoltageLevel::Low; DIGITAL_PIN_COUNT],
            digital_pin_modes: [PinMode::Input; DIGITAL_PIN_COUNT],
            pwm_pin_values: [0; DIGITAL_PIN_COUNT],
        }
    }

    /// Create a fake from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: &FakeHalConfig) -> HalResult<Self> {
        config.validate()?;
        Ok(Self {
            millis: config.start_millis,
            analog_pin_values: config.analog_values,
            ..Self::new()
        })
    }

    /// Return every slot to the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Set the value subsequent `analog_read` calls return for `pin`.
    pub fn test_set_analog_pin(&mut self, pin: AnalogPinId, value: i32) {
        if let Some(slot) = self.analog_pin_values.get_mut(pin.index()) {
            *slot = value;
        }
    }

    /// Jump the virtual clock to an absolute value.
    ///
    /// Useful for exercising counter wrap-around without issuing billions of
    /// milliseconds of delays.
    pub fn test_set_millis(&mut self, ms: u32) {
        self.millis = ms;
        self.pending_ns = 0;
    }

    /// Value currently scripted for an analog input.
    #[must_use]
    pub fn test_analog_value(&self, pin: AnalogPinId) -> i32 {
        self.analog_pin_values.get(pin.index()).copied().unwrap_or(0)
    }

    /// Level last written to a digital pin.
    #[must_use]
    pub fn test_digital_level(&self, pin: DigitalPinId) -> VoltageLevel {
        self.digital_pin_levels
            .get(pin.index())
            .copied()
            .unwrap_or_default()
    }

    /// Mode last configured for a digital pin.
    #[must_use]
    pub fn test_digital_mode(&self, pin: DigitalPinId) -> PinMode {
        self.digital_pin_modes
            .get(pin.index())
            .copied()
            .unwrap_or_default()
    }

    /// Duty value last written to a PWM output.
    #[must_use]
    pub fn test_pwm_value(&self, pin: PwmPinId) -> i32 {
        self.pwm_pin_values
            .get(pin.as_digital().index())
            .copied()
            .unwrap_or(0)
    }

    /// Advance the clock by a span given in nanoseconds, carrying the
    /// sub-millisecond remainder.
    fn advance_ns(&mut self, ns: u64) {
        let total = u64::from(self.pending_ns).saturating_add(ns);
        let whole_ms = total / NANOS_PER_MILLI;
        self.pending_ns = u32::try_from(total % NANOS_PER_MILLI).unwrap_or(0);
        // Wrap like the hardware counter does.
        self.millis = self
            .millis
            .wrapping_add(u32::try_from(whole_ms).unwrap_or(u32::MAX));
    }
}

impl Default for FakeHal {
    fn default() -> Self {
        Self::new()
    }
}

impl HalApi for FakeHal {
    fn millis(&self) -> u32 {
        self.millis
    }

    fn delay(&mut self, ms: u32) {
        self.millis = self.millis.wrapping_add(ms);
        tracing::trace!(ms, now = self.millis, "fake delay");
    }

    fn analog_read(&mut self, pin: AnalogPinId) -> i32 {
        self.test_analog_value(pin)
    }

    fn analog_write(&mut self, pin: PwmPinId, value: i32) {
        if let Some(slot) = self.pwm_pin_values.get_mut(pin.as_digital().index()) {
            *slot = value;
        }
    }

    fn set_digital_pin_mode(&mut self, pin: DigitalPinId, mode: PinMode) {
        tracing::trace!(%pin, %mode, "set pin mode");
        if let Some(slot) = self.digital_pin_modes.get_mut(pin.index()) {
            *slot = mode;
        }
    }

    fn digital_pin_mode(&self, pin: DigitalPinId) -> PinMode {
        self.test_digital_mode(pin)
    }

    fn try_digital_write(&mut self, pin: DigitalPinId, level: VoltageLevel) -> HalResult<()> {
        require_output(pin, self.digital_pin_mode(pin))?;
        if let Some(slot) = self.digital_pin_levels.get_mut(pin.index()) {
            *slot = level;
        }
        Ok(())
    }
}

impl DelayNs for FakeHal {
    fn delay_ns(&mut self, ns: u32) {
        self.advance_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.advance_ns(u64::from(us).saturating_mul(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        HalApi::delay(self, ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let mut hal = FakeHal::new();
        assert_eq!(hal.millis(), 0);
        for pin in AnalogPinId::ALL {
            assert_eq!(hal.analog_read(pin), 0);
        }
        for pin in DigitalPinId::ALL {
            assert_eq!(hal.digital_pin_mode(pin), PinMode::Input);
            assert_eq!(hal.test_digital_level(pin), VoltageLevel::Low);
        }
    }

    #[test]
    fn test_delay_advances_virtual_clock() {
        let mut hal = FakeHal::new();
        hal.delay(250);
        hal.delay(250);
        assert_eq!(hal.millis(), 500);
        assert_eq!(hal.millis(), 500);
    }

    #[test]
    fn test_delay_wraps() {
        let mut hal = FakeHal::new();
        hal.test_set_millis(u32::MAX - 1);
        hal.delay(3);
        assert_eq!(hal.millis(), 1);
    }

    #[test]
    fn test_analog_slots_are_independent() {
        let mut hal = FakeHal::new();
        hal.test_set_analog_pin(AnalogPinId::A1, 300);
        assert_eq!(hal.analog_read(AnalogPinId::A1), 300);
        assert_eq!(hal.analog_read(AnalogPinId::A0), 0);
        assert_eq!(hal.analog_read(AnalogPinId::A2), 0);
    }

    #[test]
    fn test_pwm_write_is_recorded() {
        let mut hal = FakeHal::new();
        hal.analog_write(PwmPinId::Pwm3, 128);
        assert_eq!(hal.test_pwm_value(PwmPinId::Pwm3), 128);
        assert_eq!(hal.test_pwm_value(PwmPinId::Pwm5), 0);
    }

    #[test]
    fn test_digital_write_requires_output() {
        let mut hal = FakeHal::new();
        assert!(hal.try_digital_write(DigitalPinId::D8, VoltageLevel::High).is_err());
        assert_eq!(hal.test_digital_level(DigitalPinId::D8), VoltageLevel::Low);

        hal.set_digital_pin_mode(DigitalPinId::D8, PinMode::Output);
        assert!(hal.try_digital_write(DigitalPinId::D8, VoltageLevel::High).is_ok());
        assert_eq!(hal.test_digital_level(DigitalPinId::D8), VoltageLevel::High);
    }

    #[test]
    fn test_delay_ns_accumulates_remainder() {
        let mut hal = FakeHal::new();
        hal.delay_us(600);
        assert_eq!(hal.millis(), 0);
        hal.delay_us(600);
        assert_eq!(hal.millis(), 1);
        hal.delay_ns(800_000);
        assert_eq!(hal.millis(), 2);
    }

    #[test]
    fn test_with_config() {
        let config = FakeHalConfig::builder()
            .start_millis(42)
            .analog(AnalogPinId::A3, 700)
            .build();
        assert!(config.is_ok());
        if let Ok(config) = config {
            let hal = FakeHal::with_config(&config);
            assert!(hal.is_ok());
            if let Ok(mut hal) = hal {
                assert_eq!(hal.millis(), 42);
                assert_eq!(hal.analog_read(AnalogPinId::A3), 700);
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut hal = FakeHal::new();
        hal.delay(10);
        hal.set_digital_pin_mode(DigitalPinId::D13, PinMode::Output);
        hal.reset();
        assert_eq!(hal, FakeHal::new());
    }
}
