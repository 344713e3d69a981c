// src/common/buffer.rs

use arrayvec::ArrayVec;

/// Capacity of a reply accumulator in bytes.
///
/// Large enough for every reply the command interface produces, including
/// the multi-line login banner.
pub const REPLY_CAPACITY: usize = 256;

/// Attempt to grow a [`ReplyBuffer`] past its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError {
    /// Bytes the buffer would have needed to hold.
    pub needed: usize,
    /// Bytes the buffer can hold.
    pub got: usize,
}

/// Bounded byte accumulator scoped to a single read operation.
///
/// Accumulated bytes are opaque: replies may interleave binary noise with
/// text, so matching is done on raw byte suffixes and diagnostics escape
/// rather than decode. The write offset can never pass the capacity; an
/// append that would not fit fails whole instead of truncating.
#[derive(Debug, Default)]
pub struct ReplyBuffer {
    data: ArrayVec<u8, REPLY_CAPACITY>,
}

impl ReplyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes still available before the capacity is exhausted.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.data.remaining_capacity()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.is_full()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends `chunk`, failing without partial writes if it does not fit.
    pub fn extend_from_slice(&mut self, chunk: &[u8]) -> Result<(), OverflowError> {
        self.data
            .try_extend_from_slice(chunk)
            .map_err(|_| OverflowError {
                needed: self.data.len() + chunk.len(),
                got: REPLY_CAPACITY,
            })
    }

    /// Whether the accumulated bytes currently end with `sequence`.
    #[inline]
    pub fn ends_with(&self, sequence: &[u8]) -> bool {
        self.data.ends_with(sequence)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
