// src/common/mod.rs

// --- Protocol-level building blocks shared by the driver ---
pub mod buffer;
pub mod command;
pub mod error;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From buffer.rs
pub use buffer::ReplyBuffer;

// From command.rs
pub use command::{Command, ACK_TOKEN, LINE_TERMINATOR};

// From error.rs
pub use error::DvlError;

// From hal_traits.rs
pub use hal_traits::{Clock, MonotonicInstant, Transport};

// From types.rs
pub use types::{BrokenDownTime, Mode, PowerLevel, RangeError, Salinity, SamplingRate};

// From timing.rs (constants - users can access via common::timing::*)
