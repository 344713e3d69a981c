// src/driver/mock.rs

//! Scripted transport/clock double shared by the driver test modules.

use core::ops::{Add, Sub};
use core::time::Duration;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::common::hal_traits::{Clock, MonotonicInstant, Transport};
use crate::common::types::BrokenDownTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

/// Virtual monotonic time in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MockInstant(pub u64);

impl Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

impl MonotonicInstant for MockInstant {}

/// Fake channel: staged read chunks are handed out in order, writes are
/// logged, and time only advances when the driver polls an empty queue or
/// sleeps.
pub(crate) struct MockLink {
    pub reads: VecDeque<Vec<u8>>,
    pub written: Vec<u8>,
    pub now_us: u64,
    pub slept: Duration,
    /// Number of upcoming polls that report silence regardless of staged
    /// data, each consuming its full timeout.
    pub silent_polls: u32,
    /// When set, the next poll fails with a channel error.
    pub fail_next_poll: bool,
    /// Optional shared copy of everything written, for assertions that
    /// outlive the driver (drop behavior).
    pub write_mirror: Option<Rc<RefCell<Vec<u8>>>>,
    pub wall: BrokenDownTime,
}

impl MockLink {
    pub fn new() -> Self {
        MockLink {
            reads: VecDeque::new(),
            written: Vec::new(),
            now_us: 0,
            slept: Duration::ZERO,
            silent_polls: 0,
            fail_next_poll: false,
            write_mirror: None,
            wall: BrokenDownTime {
                year: 2024,
                month: 3,
                day: 9,
                hour: 14,
                minute: 5,
                second: 59,
            },
        }
    }

    /// Stages one chunk the driver will receive from a single `read` call.
    pub fn stage(&mut self, chunk: &[u8]) {
        self.reads.push_back(chunk.to_vec());
    }

    /// Stages one acknowledgement token.
    pub fn stage_ok(&mut self) {
        self.stage(b"OK\r\n");
    }

    /// Stages `data` split into single-byte chunks.
    pub fn stage_bytewise(&mut self, data: &[u8]) {
        for byte in data {
            self.stage(&[*byte]);
        }
    }

    /// Complete request lines written by the driver so far, in order.
    pub fn lines_written(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.written)
            .split("\r\n")
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Transport for MockLink {
    type Error = MockError;

    fn poll(&mut self, timeout: Duration) -> Result<bool, MockError> {
        if self.fail_next_poll {
            self.fail_next_poll = false;
            return Err(MockError);
        }
        if self.silent_polls > 0 {
            self.silent_polls -= 1;
            self.now_us += timeout.as_micros() as u64;
            return Ok(false);
        }
        if self.reads.is_empty() {
            self.now_us += timeout.as_micros() as u64;
            Ok(false)
        } else {
            Ok(true)
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
        match self.reads.pop_front() {
            None => Ok(0),
            Some(chunk) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                if n < chunk.len() {
                    self.reads.push_front(chunk[n..].to_vec());
                }
                Ok(n)
            }
        }
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, MockError> {
        self.written.extend_from_slice(buf);
        if let Some(mirror) = &self.write_mirror {
            mirror.borrow_mut().extend_from_slice(buf);
        }
        Ok(buf.len())
    }
}

impl Clock for MockLink {
    type Instant = MockInstant;

    fn now(&self) -> MockInstant {
        MockInstant(self.now_us)
    }

    fn sleep(&mut self, duration: Duration) {
        self.now_us += duration.as_micros() as u64;
        self.slept += duration;
    }

    fn wall_clock(&self) -> BrokenDownTime {
        self.wall
    }
}
