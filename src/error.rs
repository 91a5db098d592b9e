//! Unified error type for controller operations.
//!
//! A single `Error` enum that both port error families convert into,
//! keeping the host's error handling uniform. All variants are `Copy`
//! so they pass through the command dispatch path without allocation.

use core::fmt;

use crate::app::ports::{DeviceError, SettingsError};

/// Every fallible controller operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The persisted settings store failed.
    Settings(SettingsError),
    /// The device command channel failed.
    Device(DeviceError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(e) => write!(f, "settings: {e}"),
            Self::Device(e) => write!(f, "device: {e}"),
        }
    }
}

impl From<SettingsError> for Error {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Self::Device(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
