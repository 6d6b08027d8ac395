#![allow(dead_code)] // Init/Config variants reserved for typed init returns

//! Unified error types for the ledramp firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! ramp task's error handling uniform.  All variants are `Copy` so they can
//! be passed out of the tick path without allocation.

use core::fmt;

use crate::ports::PwmError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A PWM stage or latch operation failed.
    Pwm(PwmError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm(e) => write!(f, "pwm: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
