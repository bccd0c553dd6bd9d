//! The `HalApi` trait: the one sanctioned path from controller logic to
//! timers and pins.
//!
//! Application code is written against `H: HalApi` and monomorphized, so the
//! production build calls straight into [`DeviceHal`](crate::DeviceHal) with
//! no dynamic dispatch. Verification builds substitute
//! [`FakeHal`](crate::FakeHal) (feature `fake`) or the mockall-generated
//! `MockHalApi` (feature `mock`).

use crate::error::{HalError, HalResult};
use crate::pins::{AnalogPinId, DigitalPinId, PinMode, PwmPinId, VoltageLevel};

/// Hardware abstraction layer for the ventilator controller.
///
/// # Time
///
/// `millis()` is a free-running `u32` millisecond counter that wraps after
/// roughly 49.7 days, matching the MCU timer. Compare timestamps with
/// `wrapping_sub`.
///
/// # Analog vs. PWM
///
/// `analog_read` and `analog_write` do not refer to the same pins.
/// `analog_read` samples an ADC input; `analog_write` drives one of the
/// PWM-capable digital pins.
///
/// # Digital writes
///
/// A pin must be configured with [`PinMode::Output`] before it is written.
/// Writing any other pin is a defect in the caller: [`HalApi::digital_write`]
/// panics, [`HalApi::try_digital_write`] reports it.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HalApi {
    /// Milliseconds since the board started running the program.
    fn millis(&self) -> u32;

    /// Wait for `ms` milliseconds.
    fn delay(&mut self, ms: u32);

    /// Sample an analog input.
    fn analog_read(&mut self, pin: AnalogPinId) -> i32;

    /// Drive a PWM output with the given duty value.
    fn analog_write(&mut self, pin: PwmPinId, value: i32);

    /// Configure a digital pin.
    fn set_digital_pin_mode(&mut self, pin: DigitalPinId, mode: PinMode);

    /// Mode last configured for a digital pin.
    fn digital_pin_mode(&self, pin: DigitalPinId) -> PinMode;

    /// Set the level of a digital output.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::PinNotOutput`] if the pin is not configured as an
    /// output. The pin level is left untouched.
    fn try_digital_write(&mut self, pin: DigitalPinId, level: VoltageLevel) -> HalResult<()>;

    /// Set the level of a digital output.
    ///
    /// # Panics
    ///
    /// Panics if the pin is not configured as [`PinMode::Output`]. This is a
    /// programming error in the caller; the pin level is left untouched.
    fn digital_write(&mut self, pin: DigitalPinId, level: VoltageLevel) {
        if let Err(err) = self.try_digital_write(pin, level) {
            pin_misuse(err);
        }
    }
}

/// Halt on a pin-mode violation.
#[cold]
#[inline(never)]
#[track_caller]
#[expect(clippy::panic, reason = "writing a non-output pin is an unrecoverable caller defect")]
pub(crate) fn pin_misuse(err: HalError) -> ! {
    tracing::error!(error = %err, "digital write to non-output pin");
    panic!("{err}");
}

/// Check that `mode` permits a digital write to `pin`.
pub(crate) fn require_output(pin: DigitalPinId, mode: PinMode) -> HalResult<()> {
    if mode == PinMode::Output {
        Ok(())
    } else {
        Err(HalError::PinNotOutput { pin, mode })
    }
}
