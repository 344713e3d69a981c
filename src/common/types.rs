// src/common/types.rs

use core::fmt;

/// Parameter value outside the range the device accepts.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{name} {value} outside accepted range [{min}, {max}]")]
pub struct RangeError {
    pub name: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Sampling rate in Hz, validated against the device's accepted range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRate(f32);

impl SamplingRate {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 8.0;

    /// Creates a new `SamplingRate` if `value` is within the accepted range.
    pub fn new(value: f32) -> Result<Self, RangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(SamplingRate(value))
        } else {
            Err(RangeError {
                name: "sampling rate",
                value: value as f64,
                min: Self::MIN as f64,
                max: Self::MAX as f64,
            })
        }
    }

    #[inline]
    pub const fn as_hz(&self) -> f32 {
        self.0
    }
}

impl Default for SamplingRate {
    fn default() -> Self {
        SamplingRate(5.0)
    }
}

/// Water salinity in parts per thousand, validated against the device's
/// accepted range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salinity(f64);

impl Salinity {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 50.0;

    /// Creates a new `Salinity` if `value` is within the accepted range.
    pub fn new(value: f64) -> Result<Self, RangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Salinity(value))
        } else {
            Err(RangeError {
                name: "salinity",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[inline]
    pub const fn as_ppt(&self) -> f64 {
        self.0
    }
}

impl Default for Salinity {
    fn default() -> Self {
        Salinity(35.0)
    }
}

/// Available transmit power levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerLevel {
    Min,
    Med,
    Max,
}

impl PowerLevel {
    /// Power level in dB relative to maximum, as embedded in `SETBT`.
    pub const fn as_db(&self) -> f32 {
        match self {
            PowerLevel::Min => -20.0,
            PowerLevel::Med => -10.0,
            PowerLevel::Max => 0.0,
        }
    }
}

/// The device's mode of operation as tracked by the session.
///
/// In `Command` mode the device accepts textual setup commands; in
/// `Measurement` mode it streams measurement output and is not
/// command-responsive until woken up again. The device offers no query for
/// its current mode, so this flag is the session's best knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Command,
    Measurement,
}

/// Wall-clock time broken down into the calendar fields of `SETCLOCK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenDownTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for BrokenDownTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
