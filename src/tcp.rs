// src/tcp.rs

//! TCP channel for devices reached over Ethernet.
//!
//! [`TcpLink`] bundles an already-connected `TcpStream` with the system
//! clock, satisfying both capability seams the driver is generic over.
//! Opening and closing the connection stays with the caller's resource
//! management; the driver itself never does either.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{Datelike, Timelike, Utc};

use crate::common::hal_traits::{Clock, Transport};
use crate::common::types::BrokenDownTime;

/// TCP-backed [`Transport`] + [`Clock`] implementation.
pub struct TcpLink {
    stream: TcpStream,
}

impl TcpLink {
    /// Wraps an already-connected stream.
    pub fn new(stream: TcpStream) -> Self {
        TcpLink { stream }
    }

    /// Connects to the device's command interface.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        Ok(TcpLink {
            stream: TcpStream::connect(addr)?,
        })
    }
}

impl From<TcpStream> for TcpLink {
    fn from(stream: TcpStream) -> Self {
        TcpLink::new(stream)
    }
}

impl Transport for TcpLink {
    type Error = io::Error;

    fn poll(&mut self, timeout: Duration) -> Result<bool, io::Error> {
        // a zero read-timeout would mean "block forever" on TcpStream
        let timeout = timeout.max(Duration::from_millis(1));
        self.stream.set_read_timeout(Some(timeout))?;

        let mut probe = [0u8; 1];
        match self.stream.peek(&mut probe) {
            // n == 0 is an orderly shutdown by the peer; report readable and
            // let the bounded read loop run out its deadline on empty reads
            Ok(_) => Ok(true),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        self.stream.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.stream.write(buf)
    }
}

impl Clock for TcpLink {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn wall_clock(&self) -> BrokenDownTime {
        let now = Utc::now();
        BrokenDownTime {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}
