//! Port traits — the hexagonal boundary between the controller core and
//! the host application.
//!
//! ```text
//!   Host adapter ──▶ Port trait ──▶ LightController (domain)
//! ```
//!
//! The host implements these traits around its own settings store,
//! printer connection, and picker widget. The
//! [`LightController`](super::service::LightController) consumes them via
//! generics, so the core never touches the host framework directly.
//!
//! All port errors are typed; the controller never retries a failed
//! call — errors flow back to the host unmodified.

use core::fmt;

use serde_json::Value;

use super::events::LightEvent;

// ───────────────────────────────────────────────────────────────
// Settings port (driven adapter: domain ↔ persisted settings)
// ───────────────────────────────────────────────────────────────

/// Durable key/value settings owned by the host application.
///
/// `set` stages a value in the host's live settings view; `save` flushes
/// staged values to durable storage and may perform I/O on the host
/// side. Keys used by this crate are
/// [`LED_STATUS_KEY`](crate::config::LED_STATUS_KEY) and
/// [`LED_COLOR_KEY`](crate::config::LED_COLOR_KEY).
pub trait SettingsPort {
    /// Read the current value for `key`.
    fn get(&self, key: &str) -> Result<Value, SettingsError>;

    /// Stage a new value for `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;

    /// Flush staged values to durable storage.
    fn save(&mut self) -> Result<(), SettingsError>;
}

// ───────────────────────────────────────────────────────────────
// Device port (driven adapter: domain → printer firmware)
// ───────────────────────────────────────────────────────────────

/// Write-side port to the printer firmware's command parser.
pub trait DevicePort {
    /// Send one textual command. The only command this crate builds is
    /// the LED color command (see [`crate::gcode`]).
    fn send(&mut self, command: &str) -> Result<(), DeviceError>;
}

// ───────────────────────────────────────────────────────────────
// Picker port (driven adapter: domain → picker widget)
// ───────────────────────────────────────────────────────────────

/// The interactive color-picker widget.
///
/// Only the open/position half of the widget is a port. Its `change`
/// and `exit` callbacks re-enter the controller as
/// [`LightCommand`](super::commands::LightCommand)s, keeping the event
/// flow one-directional.
pub trait PickerPort {
    /// Open the picker.
    fn enter(&mut self);

    /// Move the picker to the given screen position.
    fn fit(&mut self, x: i32, y: i32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`LightEvent`]s through this port.
/// Adapters decide where they go (log output, a status bar, a test
/// recorder).
pub trait EventSink {
    fn emit(&mut self, event: &LightEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`SettingsPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// Key has never been written.
    NotFound,
    /// The backing store rejected the staged write.
    WriteFailed,
    /// The durable save step failed (host-side I/O).
    SaveFailed,
}

/// Errors from [`DevicePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// No live connection to the printer.
    NotConnected,
    /// The connection is up but the write failed.
    SendFailed,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::WriteFailed => write!(f, "settings write failed"),
            Self::SaveFailed => write!(f, "settings save failed"),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "device not connected"),
            Self::SendFailed => write!(f, "device send failed"),
        }
    }
}
