//! Production HAL backed by real board primitives.
//!
//! The MCU support code implements [`Board`] with the platform's raw timer,
//! ADC, PWM and GPIO calls. [`DeviceHal`] turns typed pin ids into raw pin
//! numbers and forwards. Every method is `#[inline]` and statically
//! dispatched, so the wrapper compiles down to the underlying calls.

use embedded_hal::delay::DelayNs;

use crate::error::HalResult;
use crate::hal::{HalApi, require_output};
use crate::pins::{
    AnalogPinId, DIGITAL_PIN_COUNT, DigitalPinId, PinMode, PwmPinId, VoltageLevel,
};

/// Raw hardware primitives of one board.
///
/// Pin numbers and constants are the Arduino-core values: see
/// [`PinMode::to_raw`], [`VoltageLevel::to_raw`], [`AnalogPinId::channel`].
pub trait Board {
    /// Free-running millisecond counter.
    fn millis(&self) -> u32;

    /// Busy-wait for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Busy-wait for `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Start an ADC conversion on `channel` and return the result.
    fn adc_read(&mut self, channel: u8) -> i32;

    /// Set the PWM duty of digital pin `pin`.
    fn pwm_write(&mut self, pin: u8, duty: i32);

    /// Configure digital pin `pin`.
    fn pin_mode(&mut self, pin: u8, mode: u8);

    /// Drive digital pin `pin` to `level`.
    fn digital_write(&mut self, pin: u8, level: u8);
}

/// [`HalApi`] implementation that forwards to a [`Board`].
///
/// Pin modes are mirrored in a 14-byte table so the output guard on
/// `digital_write` holds on the device exactly as it does under test.
#[derive(Debug)]
pub struct DeviceHal<B: Board> {
    board: B,
    digital_pin_modes: [PinMode; DIGITAL_PIN_COUNT],
}

impl<B: Board> DeviceHal<B> {
    /// Wrap a board. All pins are assumed to be in their reset mode
    /// (`INPUT`).
    #[must_use]
    pub const fn new(board: B) -> Self {
        Self {
            board,
            digital_pin_modes: [PinMode::Input; DIGITAL_PIN_COUNT],
        }
    }

    /// Borrow the underlying board.
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Release the underlying board.
    #[must_use]
    pub fn into_board(self) -> B {
        self.board
    }
}

impl<B: Board> HalApi for DeviceHal<B> {
    #[inline]
    fn millis(&self) -> u32 {
        self.board.millis()
    }

    #[inline]
    fn delay(&mut self, ms: u32) {
        self.board.delay_ms(ms);
    }

    #[inline]
    fn analog_read(&mut self, pin: AnalogPinId) -> i32 {
        self.board.adc_read(pin.channel())
    }

    #[inline]
    fn analog_write(&mut self, pin: PwmPinId, value: i32) {
        self.board.pwm_write(pin.number(), value);
    }

    #[inline]
    fn set_digital_pin_mode(&mut self, pin: DigitalPinId, mode: PinMode) {
        if let Some(slot) = self.digital_pin_modes.get_mut(pin.index()) {
            *slot = mode;
        }
        self.board.pin_mode(pin.number(), mode.to_raw());
    }

    #[inline]
    fn digital_pin_mode(&self, pin: DigitalPinId) -> PinMode {
        self.digital_pin_modes
            .get(pin.index())
            .copied()
            .unwrap_or_default()
    }

    #[inline]
    fn try_digital_write(&mut self, pin: DigitalPinId, level: VoltageLevel) -> HalResult<()> {
        require_output(pin, self.digital_pin_mode(pin))?;
        self.board.digital_write(pin.number(), level.to_raw());
        Ok(())
    }
}

impl<B: Board> DelayNs for DeviceHal<B> {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        self.board.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.board.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.board.delay_ms(ms);
    }
}
