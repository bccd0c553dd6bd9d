//! Alarm identifiers and records.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the opaque payload carried by every alarm.
pub const ALARM_DATA_LEN: usize = 8;

/// Fixed-length alarm payload. Its meaning belongs to the code raising the
/// alarm; the stack only copies it.
pub type AlarmData = [u8; ALARM_DATA_LEN];

/// Conditions the controller can raise.
///
/// Discriminants are stable wire codes; see [`AlarmId::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AlarmId {
    /// Airway pressure above the upper limit
    HighPressure = 0,
    /// Airway pressure below the lower limit
    LowPressure = 1,
    /// Delivered tidal volume above the upper limit
    HighTidalVolume = 2,
    /// Delivered tidal volume below the lower limit
    LowTidalVolume = 3,
    /// Breath rate above the upper limit
    HighRespiratoryRate = 4,
    /// No breath detected within the apnea interval
    Apnea = 5,
    /// End-expiratory pressure above target
    HighPeep = 6,
    /// End-expiratory pressure below target
    LowPeep = 7,
    /// Patient circuit disconnected
    CircuitDisconnect = 8,
    /// A sensor returned an implausible reading
    SensorFault = 9,
    /// Battery charge low
    LowBattery = 10,
    /// Mains power lost
    PowerLoss = 11,
}

impl AlarmId {
    /// Every alarm id, in code order.
    pub const ALL: [Self; 12] = [
        Self::HighPressure,
        Self::LowPressure,
        Self::HighTidalVolume,
        Self::LowTidalVolume,
        Self::HighRespiratoryRate,
        Self::Apnea,
        Self::HighPeep,
        Self::LowPeep,
        Self::CircuitDisconnect,
        Self::SensorFault,
        Self::LowBattery,
        Self::PowerLoss,
    ];

    /// Stable numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up an id by its code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Short name, suitable for a display line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighPressure => "HIGH PRESSURE",
            Self::LowPressure => "LOW PRESSURE",
            Self::HighTidalVolume => "HIGH TIDAL VOLUME",
            Self::LowTidalVolume => "LOW TIDAL VOLUME",
            Self::HighRespiratoryRate => "HIGH RESP RATE",
            Self::Apnea => "APNEA",
            Self::HighPeep => "HIGH PEEP",
            Self::LowPeep => "LOW PEEP",
            Self::CircuitDisconnect => "CIRCUIT DISCONNECT",
            Self::SensorFault => "SENSOR FAULT",
            Self::LowBattery => "LOW BATTERY",
            Self::PowerLoss => "POWER LOSS",
        }
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for AlarmId {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

/// One raised alarm, as stored on the stack.
///
/// Records are plain `Copy` data: the stack copies them in on `add` and out
/// on `read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlarmRecord {
    /// Which condition was raised.
    pub id: AlarmId,
    /// Controller uptime in milliseconds when the alarm was added.
    pub timestamp_ms: u32,
    /// Caller-defined payload.
    pub data: AlarmData,
}

impl AlarmRecord {
    /// Create a record.
    #[must_use]
    pub const fn new(id: AlarmId, timestamp_ms: u32, data: AlarmData) -> Self {
        Self {
            id,
            timestamp_ms,
            data,
        }
    }
}

impl fmt::Display for AlarmRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} ms] {}", self.timestamp_ms, self.id)
    }
}
