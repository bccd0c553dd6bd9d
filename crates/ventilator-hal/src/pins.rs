//! Strongly typed pin identifiers and pin states.
//!
//! Each pin class is its own closed enum, so handing an analog input to a
//! function that drives a PWM output is a compile error instead of a write to
//! the wrong register. Numbering follows an Uno-class board: 14 digital pins,
//! 6 analog inputs, and PWM on D3, D5, D6, D9, D10 and D11.
//!
//! Raw values (`to_raw`, `number`, `channel`) match the Arduino core so
//! [`DeviceHal`](crate::DeviceHal) can forward them to a [`Board`](crate::Board)
//! without a lookup table.

use core::fmt;

/// Number of digital I/O pins.
pub const DIGITAL_PIN_COUNT: usize = 14;

/// Number of analog input channels.
pub const ANALOG_PIN_COUNT: usize = 6;

/// Number of PWM-capable digital pins.
pub const PWM_PIN_COUNT: usize = 6;

/// Mode of a digital pin.
///
/// Pins come out of reset as [`PinMode::Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PinMode {
    /// High-impedance input.
    #[default]
    Input = 0,
    /// Push-pull output.
    Output = 1,
    /// Input with the internal pull-up enabled.
    InputPullup = 2,
}

impl PinMode {
    /// Raw Arduino mode constant.
    #[must_use]
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Get the mode as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::InputPullup => "INPUT_PULLUP",
        }
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voltage level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VoltageLevel {
    /// Logic low.
    #[default]
    Low = 0,
    /// Logic high.
    High = 1,
}

impl VoltageLevel {
    /// Raw Arduino level constant.
    #[must_use]
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Whether this is [`VoltageLevel::High`].
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// Get the level as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

impl From<bool> for VoltageLevel {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ID of a digital I/O pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[expect(missing_docs, reason = "pin names are self-describing")]
pub enum DigitalPinId {
    D0 = 0,
    D1 = 1,
    D2 = 2,
    D3 = 3,
    D4 = 4,
    D5 = 5,
    D6 = 6,
    D7 = 7,
    D8 = 8,
    D9 = 9,
    D10 = 10,
    D11 = 11,
    D12 = 12,
    D13 = 13,
}

impl DigitalPinId {
    /// All digital pins in ascending order.
    pub const ALL: [Self; DIGITAL_PIN_COUNT] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
        Self::D10,
        Self::D11,
        Self::D12,
        Self::D13,
    ];

    /// Arduino pin number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Slot index into per-pin tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a pin by its Arduino number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number)).copied()
    }
}

impl fmt::Display for DigitalPinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.number())
    }
}

/// ID of an analog input pin.
///
/// Analog inputs and PWM outputs are unrelated: `analog_read` samples the
/// ADC on these pins, while `analog_write` drives a PWM-capable digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[expect(missing_docs, reason = "pin names are self-describing")]
pub enum AnalogPinId {
    A0 = 0,
    A1 = 1,
    A2 = 2,
    A3 = 3,
    A4 = 4,
    A5 = 5,
}

impl AnalogPinId {
    /// All analog pins in ascending order.
    pub const ALL: [Self; ANALOG_PIN_COUNT] =
        [Self::A0, Self::A1, Self::A2, Self::A3, Self::A4, Self::A5];

    /// ADC channel number.
    #[must_use]
    pub const fn channel(self) -> u8 {
        self as u8
    }

    /// Slot index into per-pin tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Arduino pin number (A0 is pin 14 on an Uno).
    #[must_use]
    pub const fn pin_number(self) -> u8 {
        self.channel() + DIGITAL_PIN_COUNT as u8
    }

    /// Look up a pin by ADC channel.
    #[must_use]
    pub fn from_channel(channel: u8) -> Option<Self> {
        Self::ALL.get(usize::from(channel)).copied()
    }
}

impl fmt::Display for AnalogPinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.channel())
    }
}

/// ID of one of the digital pins that can be used as a PWM output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PwmPinId {
    /// Digital pin 3.
    Pwm3 = 3,
    /// Digital pin 5.
    Pwm5 = 5,
    /// Digital pin 6.
    Pwm6 = 6,
    /// Digital pin 9.
    Pwm9 = 9,
    /// Digital pin 10.
    Pwm10 = 10,
    /// Digital pin 11.
    Pwm11 = 11,
}

impl PwmPinId {
    /// All PWM-capable pins in ascending order.
    pub const ALL: [Self; PWM_PIN_COUNT] = [
        Self::Pwm3,
        Self::Pwm5,
        Self::Pwm6,
        Self::Pwm9,
        Self::Pwm10,
        Self::Pwm11,
    ];

    /// Arduino pin number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The digital pin this PWM output lives on.
    #[must_use]
    pub const fn as_digital(self) -> DigitalPinId {
        match self {
            Self::Pwm3 => DigitalPinId::D3,
            Self::Pwm5 => DigitalPinId::D5,
            Self::Pwm6 => DigitalPinId::D6,
            Self::Pwm9 => DigitalPinId::D9,
            Self::Pwm10 => DigitalPinId::D10,
            Self::Pwm11 => DigitalPinId::D11,
        }
    }

    /// Look up a PWM pin by its Arduino number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|pin| pin.number() == number)
    }
}

impl From<PwmPinId> for DigitalPinId {
    fn from(pin: PwmPinId) -> Self {
        pin.as_digital()
    }
}

impl fmt::Display for PwmPinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PWM{}", self.number())
    }
}
