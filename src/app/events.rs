//! Outbound controller events.
//!
//! The [`LightController`](super::service::LightController) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them — log them, surface them
//! in the host UI, record them in tests.

use crate::color::Rgb;

/// Structured events emitted by the controller core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightEvent {
    /// Power was switched by a user command.
    PowerChanged { on: bool },

    /// A color-editing session opened.
    SessionOpened,

    /// A color-editing session closed; `committed` was pushed to the
    /// device and persisted.
    SessionClosed { committed: Rgb },

    /// In-memory state was re-read from the settings store.
    SettingsLoaded { power: bool, color: Rgb },

    /// In-memory state was re-asserted on a (re)connected device.
    DeviceSynced { output: Rgb },

    /// A user command was ignored because the printer is busy or
    /// offline.
    CommandIgnored { reason: &'static str },
}
