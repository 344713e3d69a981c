// src/common/command.rs

//! Wire commands of the Nortek DVL command interface.
//!
//! Each request is an ASCII line terminated by CRLF; each successful reply
//! ends with the acknowledgement token `OK\r\n`. The `Display`
//! implementation produces the exact payload without the line terminator.

use core::fmt;
use core::time::Duration;

use super::timing;
use super::types::{BrokenDownTime, PowerLevel, Salinity, SamplingRate};

/// Line terminator appended to every request.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Trailing byte sequence of every successful reply.
pub const ACK_TOKEN: &[u8] = b"OK\r\n";

/// A single request to the device.
///
/// A command carries everything the executor needs: the textual payload
/// (via `Display`), the reply terminator to wait for, the reply deadline,
/// and whether the command may be issued outside of command mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Wake-up token forcing the device out of measurement or an
    /// unsynchronized state (`K1W%!Q`).
    Break,
    /// Switch from measurement to command mode (`MC`).
    EnterCommandMode,
    /// Restore factory defaults for all settings (`SETDEFAULT,ALL`).
    FactoryReset,
    /// Turn off the status indicator (`SETINST,LED="OFF"`).
    DisableLed,
    /// Synchronize the device clock to the given wall-clock time.
    SetClock(BrokenDownTime),
    /// Configure the DVL measurement parameters.
    SetDvl {
        sampling_rate: SamplingRate,
        salinity: Salinity,
    },
    /// Set the bottom-track transmit power level.
    SetPowerLevel(PowerLevel),
    /// Persist the current configuration (`SAVE,ALL`).
    Save,
    /// Query the device's last error. Issued best-effort for diagnostics.
    GetError,
    /// Leave command mode and start streaming measurements (`START`).
    Start,
    /// Gracefully power the device down (`POWERDOWN`).
    PowerDown,
}

impl Command {
    /// Reply terminator this command waits for.
    pub fn expected_reply(&self) -> &'static [u8] {
        ACK_TOKEN
    }

    /// Deadline for the device's acknowledgement.
    pub fn reply_timeout(&self) -> Duration {
        match self {
            Command::Break => timing::BREAK_REPLY_TIMEOUT,
            Command::EnterCommandMode => timing::MODE_SWITCH_TIMEOUT,
            _ => timing::DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// Whether this command is issued without first ensuring command mode.
    ///
    /// True only for the wake-up exchanges that establish command mode in
    /// the first place; guarding those would recurse.
    pub fn bypasses_mode_entry(&self) -> bool {
        matches!(self, Command::Break | Command::EnterCommandMode)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Break => write!(f, "K1W%!Q"),
            Command::EnterCommandMode => write!(f, "MC"),
            Command::FactoryReset => write!(f, "SETDEFAULT,ALL"),
            Command::DisableLed => write!(f, "SETINST,LED=\"OFF\""),
            Command::SetClock(tm) => write!(
                f,
                "SETCLOCK,YEAR={},MONTH={},DAY={},HOUR={},MINUTE={},SECOND={}",
                tm.year, tm.month, tm.day, tm.hour, tm.minute, tm.second
            ),
            // The interface expects fixed six-decimal notation for floats.
            Command::SetDvl { sampling_rate, salinity } => write!(
                f,
                "SETDVL,SR={:.6},SA={:.6}",
                sampling_rate.as_hz(),
                salinity.as_ppt()
            ),
            Command::SetPowerLevel(level) => write!(f, "SETBT,PL={:.6}", level.as_db()),
            Command::Save => write!(f, "SAVE,ALL"),
            Command::GetError => write!(f, "GETERROR"),
            Command::Start => write!(f, "START"),
            Command::PowerDown => write!(f, "POWERDOWN"),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_payloads() {
        assert_eq!(Command::Break.to_string(), "K1W%!Q");
        assert_eq!(Command::EnterCommandMode.to_string(), "MC");
        assert_eq!(Command::FactoryReset.to_string(), "SETDEFAULT,ALL");
        assert_eq!(Command::DisableLed.to_string(), "SETINST,LED=\"OFF\"");
        assert_eq!(Command::Save.to_string(), "SAVE,ALL");
        assert_eq!(Command::GetError.to_string(), "GETERROR");
        assert_eq!(Command::Start.to_string(), "START");
        assert_eq!(Command::PowerDown.to_string(), "POWERDOWN");
    }

    #[test]
    fn set_clock_payload() {
        let tm = BrokenDownTime {
            year: 2024,
            month: 3,
            day: 9,
            hour: 14,
            minute: 5,
            second: 59,
        };
        assert_eq!(
            Command::SetClock(tm).to_string(),
            "SETCLOCK,YEAR=2024,MONTH=3,DAY=9,HOUR=14,MINUTE=5,SECOND=59"
        );
    }

    #[test]
    fn set_dvl_payload_uses_fixed_precision() {
        let cmd = Command::SetDvl {
            sampling_rate: SamplingRate::new(5.0).unwrap(),
            salinity: Salinity::new(30.0).unwrap(),
        };
        assert_eq!(cmd.to_string(), "SETDVL,SR=5.000000,SA=30.000000");
    }

    #[test]
    fn set_power_level_payloads() {
        assert_eq!(
            Command::SetPowerLevel(PowerLevel::Min).to_string(),
            "SETBT,PL=-20.000000"
        );
        assert_eq!(
            Command::SetPowerLevel(PowerLevel::Max).to_string(),
            "SETBT,PL=0.000000"
        );
    }

    #[test]
    fn only_wakeup_exchanges_bypass_mode_entry() {
        assert!(Command::Break.bypasses_mode_entry());
        assert!(Command::EnterCommandMode.bypasses_mode_entry());
        assert!(!Command::Start.bypasses_mode_entry());
        assert!(!Command::Save.bypasses_mode_entry());
        assert!(!Command::PowerDown.bypasses_mode_entry());
    }

    #[test]
    fn wakeup_exchanges_get_longer_deadlines() {
        assert_eq!(Command::Break.reply_timeout(), timing::BREAK_REPLY_TIMEOUT);
        assert_eq!(
            Command::EnterCommandMode.reply_timeout(),
            timing::MODE_SWITCH_TIMEOUT
        );
        assert_eq!(Command::Save.reply_timeout(), timing::DEFAULT_REPLY_TIMEOUT);
    }
}
