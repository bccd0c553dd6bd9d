//! Alarm notification stack for the ventilator controller.
//!
//! Monitoring code raises an alarm when it detects an abnormal condition; a
//! reporting loop later drains the pending alarms for display. This crate
//! holds them in between:
//!
//! - [`AlarmStack`] is a fixed-capacity LIFO of [`AlarmRecord`]s. The newest
//!   alarm is always the one read and cleared first.
//! - Each record carries an [`AlarmId`], the HAL time at which it was added,
//!   and an opaque [`AlarmData`] payload of [`ALARM_DATA_LEN`] bytes.
//! - When the stack is full the new alarm is dropped by default. The drop is
//!   counted in [`AlarmStackMetrics`] and logged. [`OverflowPolicy::EvictOldest`]
//!   keeps the newest alarms instead.
//! - The [`global`] module exposes one process-wide stack for callers that
//!   cannot have a stack passed to them.
//!
//! # Allocation
//!
//! Records live inline in a `heapless::Vec`. No operation allocates, and
//! `init`, `add`, `available`, `read` and `remove` run in constant time
//! under the default policy.
//!
//! # Example
//!
//! ```rust
//! use ventilator_alarms::prelude::*;
//! use ventilator_hal::prelude::*;
//!
//! let mut hal = FakeHal::new();
//! let mut alarms: AlarmStack<8> = AlarmStack::new();
//!
//! hal.delay(100);
//! alarms.add(&hal, AlarmId::HighPressure, [0; ALARM_DATA_LEN]);
//!
//! let top = alarms.read()?;
//! assert_eq!(top.id, AlarmId::HighPressure);
//! assert_eq!(top.timestamp_ms, 100);
//!
//! alarms.remove();
//! assert!(!alarms.available());
//! # Ok::<(), AlarmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod alarm;
mod config;
mod error;
mod metrics;
mod stack;

pub mod global;
pub mod prelude;

pub use alarm::{ALARM_DATA_LEN, AlarmData, AlarmId, AlarmRecord};
pub use config::{AlarmStackConfig, AlarmStackConfigBuilder, OverflowPolicy};
pub use error::{AlarmError, AlarmResult};
pub use metrics::AlarmStackMetrics;
pub use stack::{AlarmStack, DEFAULT_CAPACITY, PushOutcome};

#[cfg(test)]
mod tests;
