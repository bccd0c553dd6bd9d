//! Process-wide singleton cell.
//!
//! Controller code should take its HAL as a parameter where it can. For the
//! places that need one instance reachable from anywhere (interrupt handlers,
//! the top-level loop), [`Global`] holds it behind a critical section.
//!
//! Construction is explicit: a `Global` starts empty and stays empty until
//! [`Global::install`] is called. Nothing is created lazily.
//!
//! ```rust
//! use ventilator_hal::prelude::*;
//!
//! static HAL: Global<FakeHal> = Global::new();
//!
//! HAL.install(FakeHal::new()).expect("first install");
//! HAL.with(|hal| hal.delay(100)).expect("installed");
//! assert_eq!(HAL.with(|hal| hal.millis()), Ok(100));
//! ```

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

use crate::error::{HalError, HalResult};

/// A singleton slot guarded by `critical_section`.
///
/// Each access runs inside one critical section. On a single-core MCU that
/// means interrupts are masked for the duration of the closure, so keep the
/// closures short. Re-entering the same `Global` from inside its own closure
/// reports [`HalError::Busy`] instead of aliasing.
pub struct Global<T> {
    cell: Mutex<RefCell<Option<T>>>,
}

impl<T> Global<T> {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install the instance.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::AlreadyInstalled`] if an instance is present, or
    /// [`HalError::Busy`] if called from inside [`Global::with`].
    pub fn install(&self, value: T) -> HalResult<()> {
        critical_section::with(|cs| {
            let Ok(mut slot) = self.cell.borrow(cs).try_borrow_mut() else {
                return Err(HalError::Busy);
            };
            if slot.is_some() {
                return Err(HalError::AlreadyInstalled);
            }
            *slot = Some(value);
            tracing::debug!("global instance installed");
            Ok(())
        })
    }

    /// Install `value`, returning the instance it replaces.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Busy`] if called from inside [`Global::with`].
    pub fn replace(&self, value: T) -> HalResult<Option<T>> {
        critical_section::with(|cs| {
            let Ok(mut slot) = self.cell.borrow(cs).try_borrow_mut() else {
                return Err(HalError::Busy);
            };
            Ok(slot.replace(value))
        })
    }

    /// Remove and return the instance.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Busy`] if called from inside [`Global::with`].
    pub fn take(&self) -> HalResult<Option<T>> {
        critical_section::with(|cs| {
            let Ok(mut slot) = self.cell.borrow(cs).try_borrow_mut() else {
                return Err(HalError::Busy);
            };
            Ok(slot.take())
        })
    }

    /// Whether an instance is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| {
            self.cell
                .borrow(cs)
                .try_borrow()
                .map_or(true, |slot| slot.is_some())
        })
    }

    /// Run `f` with exclusive access to the instance.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::NotInstalled`] before [`Global::install`], or
    /// [`HalError::Busy`] when re-entered from inside another `with` on the
    /// same slot.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> HalResult<R> {
        critical_section::with(|cs| {
            let Ok(mut slot) = self.cell.borrow(cs).try_borrow_mut() else {
                return Err(HalError::Busy);
            };
            slot.as_mut().map(f).ok_or(HalError::NotInstalled)
        })
    }
}

impl<T> Default for Global<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Global<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Global")
            .field("installed", &self.is_installed())
            .finish()
    }
}
