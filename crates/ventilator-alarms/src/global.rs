//! The process-wide alarm stack.
//!
//! Code that owns an [`AlarmStack`] should call it directly. These free
//! functions serve callers that need the single stack shared by the whole
//! controller, such as a reporting loop and the policy code that raises
//! alarms from several modules.
//!
//! [`init`] must run first. Before it, [`add`], [`read`], [`remove`] and
//! [`metrics`] return [`AlarmError::NotInitialized`] and [`available`]
//! returns `false`. Calling [`init`] again clears every pending alarm.
//!
//! Each call is one critical section (see [`ventilator_hal::Global`]).

use ventilator_hal::{Global, HalApi, HalError};

use crate::alarm::{AlarmData, AlarmId, AlarmRecord};
use crate::error::{AlarmError, AlarmResult};
use crate::metrics::AlarmStackMetrics;
use crate::stack::{AlarmStack, PushOutcome};

static ALARMS: Global<AlarmStack> = Global::new();

fn from_global(err: HalError) -> AlarmError {
    match err {
        HalError::NotInstalled => AlarmError::NotInitialized,
        other => AlarmError::Hal(other),
    }
}

fn with_stack<R>(f: impl FnOnce(&mut AlarmStack) -> R) -> AlarmResult<R> {
    ALARMS.with(f).map_err(from_global)
}

/// Create the process-wide stack, or clear it if it already exists.
///
/// # Errors
///
/// Returns [`AlarmError::Hal`] when called from inside another operation on
/// the process-wide stack.
pub fn init() -> AlarmResult<()> {
    match ALARMS.with(AlarmStack::init) {
        Err(HalError::NotInstalled) => {}
        other => return other.map_err(AlarmError::from),
    }
    match ALARMS.install(AlarmStack::new()) {
        Ok(()) => Ok(()),
        // Another context installed it between the two critical sections.
        Err(HalError::AlreadyInstalled) => with_stack(AlarmStack::init),
        Err(err) => Err(err.into()),
    }
}

/// Raise an alarm stamped with the current HAL time.
///
/// # Errors
///
/// Returns [`AlarmError::NotInitialized`] before [`init`].
pub fn add<H: HalApi + ?Sized>(hal: &H, id: AlarmId, data: AlarmData) -> AlarmResult<PushOutcome> {
    with_stack(|stack| stack.add(hal, id, data))
}

/// Whether at least one alarm is pending. `false` before [`init`].
#[must_use]
pub fn available() -> bool {
    with_stack(|stack| stack.available()).unwrap_or(false)
}

/// Copy of the most recent pending alarm.
///
/// # Errors
///
/// Returns [`AlarmError::Empty`] if no alarm is pending, or
/// [`AlarmError::NotInitialized`] before [`init`].
pub fn read() -> AlarmResult<AlarmRecord> {
    with_stack(|stack| stack.read())?
}

/// Discard the most recent pending alarm. Does nothing when empty.
///
/// # Errors
///
/// Returns [`AlarmError::NotInitialized`] before [`init`].
pub fn remove() -> AlarmResult<()> {
    with_stack(AlarmStack::remove)
}

/// Snapshot of the process-wide stack's counters.
///
/// # Errors
///
/// Returns [`AlarmError::NotInitialized`] before [`init`].
pub fn metrics() -> AlarmResult<AlarmStackMetrics> {
    with_stack(|stack| *stack.metrics())
}
