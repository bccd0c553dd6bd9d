//! Prelude for ventilator-hal.
//!
//! This module re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use ventilator_hal::prelude::*;
//!
//! let mut hal = FakeHal::new();
//! hal.test_set_analog_pin(AnalogPinId::A0, 512);
//! assert_eq!(hal.analog_read(AnalogPinId::A0), 512);
//! ```

#[cfg(any(test, feature = "fake"))]
pub use crate::config::{ADC_MAX, FakeHalConfig, FakeHalConfigBuilder};
pub use crate::device::{Board, DeviceHal};
pub use crate::error::{HalError, HalResult};
#[cfg(any(test, feature = "fake"))]
pub use crate::fake::FakeHal;
pub use crate::global::Global;
pub use crate::hal::HalApi;
pub use crate::pins::{AnalogPinId, DigitalPinId, PinMode, PwmPinId, VoltageLevel};
pub use embedded_hal::delay::DelayNs;
