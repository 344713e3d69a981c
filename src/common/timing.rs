// src/common/timing.rs

use core::time::Duration;

// Deadlines and settle delays of the command interface. The device does not
// document these; values carry over from field-proven driver behavior.

// === Reply deadlines ===

/// Time allowed for the acknowledgement of an ordinary command.
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(1);
/// Time allowed for each login prompt to appear.
pub const PROMPT_TIMEOUT: Duration = Duration::from_secs(1);
/// Time allowed for the command-interface banner after credentials.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(2);
/// Time allowed for the acknowledgement of a break token.
pub const BREAK_REPLY_TIMEOUT: Duration = Duration::from_secs(2);
/// Time allowed for the acknowledgement of the mode-switch command.
pub const MODE_SWITCH_TIMEOUT: Duration = Duration::from_secs(2);

// === Settle delays ===

/// Marking time between a successful break and the mode-switch command.
pub const POST_BREAK_DELAY: Duration = Duration::from_secs(1);
/// Marking time after the login banner before the first command.
pub const POST_LOGIN_DELAY: Duration = Duration::from_secs(1);
