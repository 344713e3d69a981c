// src/common/error.rs

use super::types::RangeError;

/// Errors surfaced by the driver.
///
/// `E` is the transport implementation's own error type. Every variant is
/// fatal to the current command only; the session stays usable for retries,
/// which are the caller's responsibility.
#[derive(Debug, thiserror::Error)]
pub enum DvlError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying channel error from the transport implementation.
    #[error("transport error: {0:?}")]
    Io(E),

    /// Deadline elapsed before the expected reply terminator arrived.
    #[error("timed out waiting for device reply")]
    Timeout,

    /// Reply grew past the bounded buffer without the terminator matching.
    #[error("reply buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// Parameter rejected before any command was sent.
    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}
