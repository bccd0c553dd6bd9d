//! The bounded LIFO alarm stack.

use ventilator_hal::HalApi;

use crate::alarm::{AlarmData, AlarmId, AlarmRecord};
use crate::config::{AlarmStackConfig, OverflowPolicy};
use crate::error::{AlarmError, AlarmResult};
use crate::metrics::AlarmStackMetrics;

/// Capacity of an [`AlarmStack`] when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// What happened to an alarm passed to [`AlarmStack::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The alarm is now the top record.
    Stored,
    /// The stack was full and the alarm was discarded.
    Dropped,
    /// The alarm was stored after discarding the oldest record, returned here.
    Evicted(AlarmRecord),
}

impl PushOutcome {
    /// Whether the incoming alarm made it onto the stack.
    #[must_use]
    pub const fn is_stored(&self) -> bool {
        !matches!(self, Self::Dropped)
    }
}

/// Fixed-capacity, last-in-first-out store of raised alarms.
///
/// The most recently added record is always the one [`read`](Self::read)
/// returns and [`remove`](Self::remove) discards. Identical alarms are not
/// merged. Storage is an inline `heapless::Vec`, so the stack never
/// allocates and its footprint is fixed by `N`.
///
/// # Example
///
/// ```rust
/// use ventilator_alarms::prelude::*;
/// use ventilator_hal::prelude::*;
///
/// let mut hal = FakeHal::new();
/// let mut alarms: AlarmStack = AlarmStack::new();
///
/// alarms.add(&hal, AlarmId::LowPressure, [0; ALARM_DATA_LEN]);
/// hal.delay(20);
/// alarms.add(&hal, AlarmId::Apnea, [1; ALARM_DATA_LEN]);
///
/// // Drain newest first.
/// while alarms.available() {
///     let record = alarms.read().expect("stack is not empty");
///     println!("{record}");
///     alarms.remove();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AlarmStack<const N: usize = DEFAULT_CAPACITY> {
    records: heapless::Vec<AlarmRecord, N>,
    config: AlarmStackConfig,
    metrics: AlarmStackMetrics,
}

impl<const N: usize> AlarmStack<N> {
    /// Create an empty stack with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(AlarmStackConfig::new())
    }

    /// Create an empty stack.
    #[must_use]
    pub const fn with_config(config: AlarmStackConfig) -> Self {
        Self {
            records: heapless::Vec::new(),
            config,
            metrics: AlarmStackMetrics::new(),
        }
    }

    /// Discard every pending alarm.
    ///
    /// Metrics are kept.
    pub fn init(&mut self) {
        tracing::debug!(discarded = self.records.len(), capacity = N, "alarm stack init");
        self.records.clear();
    }

    /// Raise an alarm stamped with the current HAL time.
    ///
    /// When the stack is full under [`OverflowPolicy::DropNewest`], the alarm
    /// is discarded before the clock is read. The outcome may be ignored.
    pub fn add<H: HalApi + ?Sized>(
        &mut self,
        hal: &H,
        id: AlarmId,
        data: AlarmData,
    ) -> PushOutcome {
        if self.is_full() && self.config.overflow_policy == OverflowPolicy::DropNewest {
            self.note_drop(id);
            return PushOutcome::Dropped;
        }
        self.add_at(hal.millis(), id, data)
    }

    /// Raise an alarm with a caller-supplied timestamp.
    pub fn add_at(&mut self, timestamp_ms: u32, id: AlarmId, data: AlarmData) -> PushOutcome {
        let record = AlarmRecord::new(id, timestamp_ms, data);
        let Err(record) = self.records.push(record) else {
            self.metrics.record_push(self.records.len());
            return PushOutcome::Stored;
        };

        match self.config.overflow_policy {
            OverflowPolicy::DropNewest => {
                self.note_drop(record.id);
                PushOutcome::Dropped
            }
            OverflowPolicy::EvictOldest => self.evict_and_push(record),
        }
    }

    fn evict_and_push(&mut self, record: AlarmRecord) -> PushOutcome {
        if self.records.is_empty() {
            // Zero capacity: nothing to evict.
            self.note_drop(record.id);
            return PushOutcome::Dropped;
        }
        let evicted = self.records.remove(0);
        if self.records.push(record).is_err() {
            self.note_drop(record.id);
            return PushOutcome::Dropped;
        }
        self.metrics.record_eviction();
        self.metrics.record_push(self.records.len());
        if self.config.log_overflow {
            tracing::warn!(
                evicted = %evicted.id,
                evicted_at_ms = evicted.timestamp_ms,
                incoming = %record.id,
                "alarm stack full, oldest alarm evicted"
            );
        }
        PushOutcome::Evicted(evicted)
    }

    fn note_drop(&mut self, id: AlarmId) {
        self.metrics.record_drop(id);
        if self.config.log_overflow {
            tracing::warn!(
                alarm = %id,
                capacity = N,
                dropped = self.metrics.dropped,
                "alarm stack full, alarm dropped"
            );
        }
    }

    /// Whether at least one alarm is pending.
    #[must_use]
    pub fn available(&self) -> bool {
        !self.records.is_empty()
    }

    /// Copy of the most recent pending alarm. The stack is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmError::Empty`] if no alarm is pending.
    pub fn read(&self) -> AlarmResult<AlarmRecord> {
        self.records.last().copied().ok_or(AlarmError::Empty)
    }

    /// Discard the most recent pending alarm. Does nothing when empty.
    pub fn remove(&mut self) {
        if self.pop().is_none() {
            tracing::trace!("remove on empty alarm stack");
        }
    }

    /// Remove and return the most recent pending alarm.
    pub fn pop(&mut self) -> Option<AlarmRecord> {
        let record = self.records.pop()?;
        self.metrics.record_removal();
        Some(record)
    }

    /// Pending alarms, most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &AlarmRecord> + ExactSizeIterator {
        self.records.iter().rev()
    }

    /// Number of pending alarms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no alarm is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the next `add` overflows.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.records.is_full()
    }

    /// Maximum number of pending alarms.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AlarmStackConfig {
        &self.config
    }

    /// Push and drop counters.
    #[must_use]
    pub const fn metrics(&self) -> &AlarmStackMetrics {
        &self.metrics
    }
}

impl<const N: usize> Default for AlarmStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a AlarmStack<N> {
    type Item = &'a AlarmRecord;
    type IntoIter = core::iter::Rev<core::slice::Iter<'a, AlarmRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().rev()
    }
}
