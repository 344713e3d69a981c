// src/driver/session.rs

use super::Driver;
use crate::common::command::Command;
use crate::common::error::DvlError;
use crate::common::hal_traits::{Clock, Transport};
use crate::common::timing;
use crate::common::types::Mode;

/// Prompt preceding the username credential.
const USERNAME_PROMPT: &[u8] = b"Username: ";
/// Prompt preceding the password credential.
const PASSWORD_PROMPT: &[u8] = b"Password: ";
/// Banner confirming the command interface is up.
const LOGIN_BANNER: &[u8] = b"Command Interface\r\r\n";
/// Fixed credential, used for both username and password.
const CREDENTIALS: &str = "nortek";

// Session state machine: login, wake-up signaling, and mode transitions.
impl<IF> Driver<IF>
where
    IF: Transport + Clock,
{
    /// Logs into the device's command interface.
    ///
    /// Waits for the username and password prompts in turn, replying with
    /// the fixed credentials, then waits for the confirmation banner. A
    /// missing prompt fails the whole login.
    pub(super) fn login(&mut self) -> Result<(), DvlError<IF::Error>> {
        self.answer_prompt(USERNAME_PROMPT)?;
        self.answer_prompt(PASSWORD_PROMPT)?;
        self.read_until(LOGIN_BANNER, timing::BANNER_TIMEOUT)?;
        self.interface.sleep(timing::POST_LOGIN_DELAY);
        Ok(())
    }

    fn answer_prompt(&mut self, prompt: &[u8]) -> Result<(), DvlError<IF::Error>> {
        self.read_until(prompt, timing::PROMPT_TIMEOUT)?;
        self.write_line(CREDENTIALS)
    }

    /// Wakes the device with a break token.
    ///
    /// An unacknowledged break is resent exactly once, immediately; the
    /// device offers no way to tell whether the first token was consumed.
    pub(super) fn send_break(&mut self) -> Result<(), DvlError<IF::Error>> {
        match self.execute(&Command::Break) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::debug!("break not acknowledged ({err}), retrying once");
                self.execute(&Command::Break)
            }
        }
    }

    /// Puts the device into command mode. No-op when the session already
    /// believes the device is there.
    pub(super) fn enter_command_mode(&mut self) -> Result<(), DvlError<IF::Error>> {
        if self.mode == Mode::Command {
            return Ok(());
        }

        self.send_break()?;
        self.interface.sleep(timing::POST_BREAK_DELAY);
        self.execute(&Command::EnterCommandMode)?;
        self.mode = Mode::Command;
        Ok(())
    }

    /// Leaves command mode and starts streaming measurements.
    ///
    /// The mode flag flips unconditionally on success; the device exposes
    /// no query to confirm its current mode.
    pub(super) fn start(&mut self) -> Result<(), DvlError<IF::Error>> {
        self.execute(&Command::Start)?;
        self.mode = Mode::Measurement;
        Ok(())
    }
}
