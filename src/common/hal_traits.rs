// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

use super::types::BrokenDownTime;

/// Abstraction for the bidirectional byte stream the device is reached over.
///
/// Implementations wrap an already-connected channel (TCP socket, serial
/// port). The driver never opens or closes the channel; at most it sends a
/// best-effort power-down command before the owner releases it. A channel is
/// exclusively owned by one session, so implementations need not be
/// re-entrant.
pub trait Transport {
    /// Associated error type for channel failures.
    type Error: Debug;

    /// Waits up to `timeout` for the channel to become readable.
    ///
    /// Returns `Ok(true)` if at least one byte can be read without blocking,
    /// `Ok(false)` if the timeout elapsed first.
    fn poll(&mut self, timeout: Duration) -> Result<bool, Self::Error>;

    /// Reads available bytes into `buf`, returning the number of bytes read.
    ///
    /// May return `Ok(0)` even after a positive poll; callers treat that as
    /// a transient and poll again.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Writes bytes from `buf`, returning the number of bytes accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
}

/// Point in monotonic time usable for deadline arithmetic.
///
/// `std::time::Instant` satisfies this; test clocks provide their own.
pub trait MonotonicInstant:
    Copy + Debug + Add<Duration, Output = Self> + Sub<Self, Output = Duration> + PartialOrd
{
}

impl MonotonicInstant for std::time::Instant {}

/// Abstraction over time: monotonic deadlines, settle delays, and the
/// broken-down wall-clock time embedded in the device's clock-set command.
///
/// Kept separate from [`Transport`] concerns so a session can run against a
/// fake clock in tests without real waiting.
pub trait Clock {
    type Instant: MonotonicInstant;

    /// Current monotonic time, used only for deadline tracking.
    fn now(&self) -> Self::Instant;

    /// Blocks the calling thread for at least `duration`.
    fn sleep(&mut self, duration: Duration);

    /// Current wall-clock time, broken down into calendar fields.
    fn wall_clock(&self) -> BrokenDownTime;
}
