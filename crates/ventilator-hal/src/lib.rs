//! # ventilator-hal
//!
//! Hardware abstraction layer for the ventilator controller.
//!
//! All controller logic reaches timers and pins through the [`HalApi`] trait.
//! Two implementations are provided:
//!
//! - [`DeviceHal`] forwards to a [`Board`], the MCU's raw timer, ADC, PWM and
//!   GPIO primitives. Calls are inlined and statically dispatched.
//! - [`FakeHal`] (feature `fake`) keeps everything in memory. Time is virtual
//!   and only moves when the code under test calls `delay`, so timing logic
//!   runs instantly and deterministically on a development host.
//!
//! With the `mock` feature, `MockHalApi` is generated by `mockall` for
//! interaction tests.
//!
//! ## Pins
//!
//! Pins are typed: [`AnalogPinId`], [`DigitalPinId`] and [`PwmPinId`] are
//! distinct closed enums, so an ADC channel cannot be passed where a PWM
//! output is expected.
//!
//! ## Shared access
//!
//! Prefer passing `&mut impl HalApi` down the call graph. Where a single
//! process-wide instance is unavoidable, install one into a [`Global`].
//!
//! ## Example
//!
//! ```rust
//! use ventilator_hal::prelude::*;
//!
//! fn blink<H: HalApi>(hal: &mut H, pin: DigitalPinId) {
//!     hal.set_digital_pin_mode(pin, PinMode::Output);
//!     hal.digital_write(pin, VoltageLevel::High);
//!     hal.delay(500);
//!     hal.digital_write(pin, VoltageLevel::Low);
//! }
//!
//! let mut hal = FakeHal::new();
//! blink(&mut hal, DigitalPinId::D13);
//! assert_eq!(hal.millis(), 500);
//! assert_eq!(hal.test_digital_level(DigitalPinId::D13), VoltageLevel::Low);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

#[cfg(any(test, feature = "fake"))]
pub mod config;
pub mod device;
pub mod error;
#[cfg(any(test, feature = "fake"))]
pub mod fake;
pub mod global;
pub mod hal;
pub mod pins;
pub mod prelude;

#[cfg(any(test, feature = "fake"))]
pub use config::{ADC_MAX, FakeHalConfig, FakeHalConfigBuilder};
pub use device::{Board, DeviceHal};
pub use error::{HalError, HalResult};
#[cfg(any(test, feature = "fake"))]
pub use fake::FakeHal;
pub use global::Global;
#[cfg(feature = "mock")]
pub use hal::MockHalApi;
pub use hal::HalApi;
pub use pins::{
    ANALOG_PIN_COUNT, AnalogPinId, DIGITAL_PIN_COUNT, DigitalPinId, PWM_PIN_COUNT, PinMode,
    PwmPinId, VoltageLevel,
};

/// Re-exported so downstream code can name the delay trait without a direct
/// `embedded-hal` dependency.
pub use embedded_hal::delay::DelayNs;
