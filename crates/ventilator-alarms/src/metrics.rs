//! Push and drop accounting for an alarm stack.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alarm::AlarmId;

/// Counters kept by an [`AlarmStack`](crate::AlarmStack).
///
/// Counters saturate instead of wrapping. They survive `init`, so a
/// reporting layer can tell how many alarms were lost since power-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlarmStackMetrics {
    /// Alarms stored, including ones that evicted an older record.
    pub pushed: u32,
    /// Incoming alarms discarded because the stack was full.
    pub dropped: u32,
    /// Stored records discarded to make room for a newer one.
    pub evicted: u32,
    /// Records popped by `remove` or `pop`.
    pub removed: u32,
    /// Largest occupancy observed.
    pub high_water_mark: usize,
    /// Id of the most recent dropped alarm.
    pub last_dropped_id: Option<AlarmId>,
}

impl AlarmStackMetrics {
    /// Zeroed metrics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pushed: 0,
            dropped: 0,
            evicted: 0,
            removed: 0,
            high_water_mark: 0,
            last_dropped_id: None,
        }
    }

    /// Record a stored alarm and the occupancy after storing it.
    pub fn record_push(&mut self, occupancy: usize) {
        self.pushed = self.pushed.saturating_add(1);
        self.high_water_mark = self.high_water_mark.max(occupancy);
    }

    /// Record a discarded incoming alarm.
    pub fn record_drop(&mut self, id: AlarmId) {
        self.dropped = self.dropped.saturating_add(1);
        self.last_dropped_id = Some(id);
    }

    /// Record an evicted record.
    pub fn record_eviction(&mut self) {
        self.evicted = self.evicted.saturating_add(1);
    }

    /// Record a popped record.
    pub fn record_removal(&mut self) {
        self.removed = self.removed.saturating_add(1);
    }

    /// Alarms lost for any reason.
    #[must_use]
    pub const fn lost(&self) -> u32 {
        self.dropped.saturating_add(self.evicted)
    }
}
