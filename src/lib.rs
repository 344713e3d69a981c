// src/lib.rs

//! Client-side driver for the Nortek DVL textual command interface.
//!
//! The device speaks a line-oriented command/response protocol over an
//! unreliable byte stream (TCP or serial). Before it starts streaming
//! measurement data it must be woken up, logged into, and driven through an
//! ordered configuration sequence in command mode. [`Driver`] implements
//! that sequence on top of two capability seams, [`Transport`] and
//! [`Clock`], so the whole session is testable against fakes.

pub mod common;
pub mod driver;
pub mod tcp;

// Re-export key types for convenience
pub use common::error::DvlError;
pub use common::hal_traits::{Clock, Transport};
pub use common::types::{Mode, PowerLevel};
pub use driver::Driver;
