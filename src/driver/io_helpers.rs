// src/driver/io_helpers.rs

use core::time::Duration;

use super::Driver;
use crate::common::buffer::{ReplyBuffer, REPLY_CAPACITY};
use crate::common::command::LINE_TERMINATOR;
use crate::common::error::DvlError;
use crate::common::hal_traits::{Clock, Transport};

/// Upper bound on bytes pulled from the channel per read call.
const READ_CHUNK: usize = 64;

// Low-level framed I/O. `read_until` is the only place the driver blocks,
// and it always makes forward progress toward its deadline.
impl<IF> Driver<IF>
where
    IF: Transport + Clock,
{
    /// Accumulates channel bytes until they end with `sequence` or the
    /// deadline elapses.
    ///
    /// Each step polls with the remaining time budget, then reads one chunk
    /// into the free tail of a bounded buffer. Bytes after the matched
    /// sequence may be discarded. A zero-byte read after a positive poll is
    /// treated as a transient. Exhausting the buffer without a match is a
    /// hard failure, not a truncation.
    pub(super) fn read_until(
        &mut self,
        sequence: &[u8],
        timeout: Duration,
    ) -> Result<(), DvlError<IF::Error>> {
        let mut buf = ReplyBuffer::new();
        let deadline = self.interface.now() + timeout;

        loop {
            let now = self.interface.now();
            if now >= deadline {
                log::debug!(
                    "recv: '{}' (does not end with: '{}')",
                    buf.as_bytes().escape_ascii(),
                    sequence.escape_ascii()
                );
                return Err(DvlError::Timeout);
            }

            if !self.interface.poll(deadline - now).map_err(DvlError::Io)? {
                continue;
            }

            let mut chunk = [0u8; READ_CHUNK];
            let want = chunk.len().min(buf.remaining_capacity());
            let n = self
                .interface
                .read(&mut chunk[..want])
                .map_err(DvlError::Io)?;
            if n == 0 {
                continue;
            }

            buf.extend_from_slice(&chunk[..n])
                .map_err(|e| DvlError::BufferOverflow { needed: e.needed, got: e.got })?;

            if buf.ends_with(sequence) {
                log::trace!("recv: '{}'", buf.as_bytes().escape_ascii());
                return Ok(());
            }

            if buf.is_full() {
                // no room left for the sequence to ever match
                log::debug!(
                    "recv: '{}' (buffer exhausted before: '{}')",
                    buf.as_bytes().escape_ascii(),
                    sequence.escape_ascii()
                );
                return Err(DvlError::BufferOverflow {
                    needed: buf.len() + 1,
                    got: REPLY_CAPACITY,
                });
            }
        }
    }

    /// Writes `payload` terminated by CRLF, looping over short writes.
    pub(super) fn write_line(&mut self, payload: &str) -> Result<(), DvlError<IF::Error>> {
        let frame = format!("{payload}{LINE_TERMINATOR}");
        let mut remaining = frame.as_bytes();
        while !remaining.is_empty() {
            let n = self.interface.write(remaining).map_err(DvlError::Io)?;
            remaining = &remaining[n..];
        }
        log::trace!("sent: '{}'", frame.as_bytes().escape_ascii());
        Ok(())
    }
}
