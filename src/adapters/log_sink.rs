//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured controller events to
//! the `log` facade, which the host routes wherever its logging goes.
//! A host UI status adapter would implement the same trait.

use log::info;

use crate::app::events::LightEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`LightEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &LightEvent) {
        match event {
            LightEvent::PowerChanged { on } => {
                info!("POWER | {}", if *on { "on" } else { "off" });
            }
            LightEvent::SessionOpened => {
                info!("PICKER | session opened");
            }
            LightEvent::SessionClosed { committed } => {
                info!("PICKER | session closed, committed {committed}");
            }
            LightEvent::SettingsLoaded { power, color } => {
                info!("SETTINGS | loaded power={power} color={color}");
            }
            LightEvent::DeviceSynced { output } => {
                info!("DEVICE | synced {output}");
            }
            LightEvent::CommandIgnored { reason } => {
                info!("CMD | ignored: {reason}");
            }
        }
    }
}
