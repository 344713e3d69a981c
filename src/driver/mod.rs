// src/driver/mod.rs

//! Session driver for the Nortek DVL command interface.
//!
//! One [`Driver`] exclusively owns one connected channel. Execution is
//! single-threaded and blocking: each command runs to completion before the
//! next is issued, so replies are matched strictly in send order.

mod io_helpers;
mod session;

#[cfg(test)]
pub(crate) mod mock;

use crate::common::command::Command;
use crate::common::error::DvlError;
use crate::common::hal_traits::{Clock, Transport};
use crate::common::types::{Mode, PowerLevel, Salinity, SamplingRate};

/// Driver configuring a Nortek DVL before it streams measurement data.
///
/// Generic over a combined [`Transport`] + [`Clock`] interface so sessions
/// run identically against a TCP socket, a serial port, or a test fake. The
/// mode flag is per-session state; concurrent sessions to different devices
/// share nothing.
pub struct Driver<IF>
where
    IF: Transport + Clock,
{
    interface: IF,
    mode: Mode,
    sampling_rate: SamplingRate,
    salinity: Salinity,
}

impl<IF> Driver<IF>
where
    IF: Transport + Clock,
{
    /// Creates a driver over an already-connected channel.
    ///
    /// The device's mode is unknown at this point, so the first command
    /// forces a wake-up and mode switch.
    pub fn new(interface: IF) -> Self {
        Driver {
            interface,
            mode: Mode::Measurement,
            sampling_rate: SamplingRate::default(),
            salinity: Salinity::default(),
        }
    }

    /// The mode the session currently believes the device is in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sampling_rate(&self) -> SamplingRate {
        self.sampling_rate
    }

    pub fn salinity(&self) -> Salinity {
        self.salinity
    }

    /// Runs the device's setup sequence and starts measuring.
    ///
    /// Login, mode negotiation, factory reset, indicator off, clock
    /// synchronization, measurement parameters, persistence, start — in
    /// that order, aborting on the first failing step. No partial-success
    /// state is reported.
    pub fn setup(&mut self) -> Result<(), DvlError<IF::Error>> {
        self.login()?;
        self.enter_command_mode()?;
        self.execute(&Command::FactoryReset)?;
        self.execute(&Command::DisableLed)?;
        self.set_clock()?;
        self.send_dvl_parameters()?;
        self.save()?;
        self.start()
    }

    /// Updates the cached sampling rate, to be embedded in the next
    /// parameter configuration command.
    pub fn set_sampling_rate(&mut self, rate: f32) -> Result<(), DvlError<IF::Error>> {
        self.sampling_rate = SamplingRate::new(rate)?;
        Ok(())
    }

    /// Updates the cached salinity, to be embedded in the next parameter
    /// configuration command.
    pub fn set_salinity(&mut self, value: f64) -> Result<(), DvlError<IF::Error>> {
        self.salinity = Salinity::new(value)?;
        Ok(())
    }

    /// Sets the transmit power level, then resumes measuring.
    ///
    /// The restart is best-effort and never overrides the outcome of the
    /// power-level command itself.
    pub fn set_power_level(&mut self, level: PowerLevel) -> Result<(), DvlError<IF::Error>> {
        let result = self.execute(&Command::SetPowerLevel(level));
        if let Err(err) = self.start() {
            log::debug!("restart after power level change failed: {err}");
        }
        result
    }

    /// Sends one command and waits for its acknowledgement.
    ///
    /// Unless the command bypasses mode entry, command mode is ensured
    /// first; one redundant round-trip buys correctness regardless of prior
    /// state.
    fn execute(&mut self, command: &Command) -> Result<(), DvlError<IF::Error>> {
        if !command.bypasses_mode_entry() {
            self.enter_command_mode()?;
        }

        self.write_line(&command.to_string())?;
        self.read_until(command.expected_reply(), command.reply_timeout())
    }

    fn set_clock(&mut self) -> Result<(), DvlError<IF::Error>> {
        let now = self.interface.wall_clock();
        self.execute(&Command::SetClock(now))
    }

    fn send_dvl_parameters(&mut self) -> Result<(), DvlError<IF::Error>> {
        self.execute(&Command::SetDvl {
            sampling_rate: self.sampling_rate,
            salinity: self.salinity,
        })
    }

    /// Persists the configuration. On failure the device's own error is
    /// pulled into the logs with a best-effort `GETERROR`; the original
    /// failure is returned unchanged.
    fn save(&mut self) -> Result<(), DvlError<IF::Error>> {
        if let Err(err) = self.execute(&Command::Save) {
            if let Err(diag) = self.execute(&Command::GetError) {
                log::debug!("error query after failed save went unanswered: {diag}");
            }
            return Err(err);
        }
        Ok(())
    }
}

impl<IF> Drop for Driver<IF>
where
    IF: Transport + Clock,
{
    /// Gracefully powers the device down before the channel is released.
    /// The device may already be gone; failure is logged and ignored.
    fn drop(&mut self) {
        if let Err(err) = self.execute(&Command::PowerDown) {
            log::debug!("power-down on disconnect failed: {err}");
        }
    }
}
