//! Prelude for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//!
//! ```rust
//! use ventilator_alarms::prelude::*;
//!
//! let alarms: AlarmStack = AlarmStack::new();
//! assert_eq!(alarms.capacity(), DEFAULT_CAPACITY);
//! ```

pub use crate::{
    ALARM_DATA_LEN, AlarmData, AlarmError, AlarmId, AlarmRecord, AlarmResult, AlarmStack,
    AlarmStackConfig, AlarmStackMetrics, DEFAULT_CAPACITY, OverflowPolicy, PushOutcome,
};
