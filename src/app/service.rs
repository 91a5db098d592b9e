//! The light controller — the hexagonal core.
//!
//! [`LightController`] owns the in-memory [`LightState`] and the picker
//! session, and synchronizes them with the host's persisted settings,
//! the printer's command channel, and the picker widget. All I/O flows
//! through port traits injected at call sites, making the whole core
//! testable with mock adapters.
//!
//! ```text
//!  SettingsPort ◀─▶ ┌───────────────────────┐ ──▶ EventSink
//!                   │    LightController     │
//!  DevicePort  ◀────│  LightState · Session  │
//!  PickerPort  ◀────└───────────────────────┘
//! ```
//!
//! Everything runs on the host's UI/event-loop thread; operations never
//! block and never retry. Within one event-loop turn the in-memory state
//! is the source of truth — the store may lag behind it.

use log::{debug, info, warn};

use serde_json::Value;

use crate::color::Rgb;
use crate::config::{LED_COLOR_KEY, LED_STATUS_KEY, LightConfig};
use crate::error::Result;
use crate::gcode;
use crate::session::{PickerAnchor, PickerSession, SessionState};
use crate::state::LightState;

use super::commands::LightCommand;
use super::events::LightEvent;
use super::ports::{DevicePort, EventSink, PickerPort, SettingsError, SettingsPort};

// ───────────────────────────────────────────────────────────────
// LightController
// ───────────────────────────────────────────────────────────────

/// Synchronizes the light's power/color state between the persisted
/// settings store, the device, and the picker widget.
pub struct LightController {
    state: LightState,
    session: Option<PickerSession>,
    config: LightConfig,
    /// Printer connection is up and accepting commands.
    operational: bool,
    /// A print job is running; user controls are disabled meanwhile.
    printing: bool,
}

impl LightController {
    /// Construct the controller from configuration.
    ///
    /// State starts at the configured defaults; call
    /// [`load_from_settings`](Self::load_from_settings) next to pick up
    /// whatever the host has persisted.
    pub fn new(config: LightConfig) -> Self {
        let state = LightState {
            power: config.default_power,
            color: config.default_color,
        };
        Self {
            state,
            session: None,
            config,
            operational: true,
            printing: false,
        }
    }

    // ── User actions ──────────────────────────────────────────

    /// Switch the light on: push the current color to the device and
    /// persist. Idempotent.
    pub fn turn_on(
        &mut self,
        dev: &mut impl DevicePort,
        settings: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.state.power = true;
        dev.send(&gcode::set_led(self.state.color))?;
        self.persist(settings)?;
        sink.emit(&LightEvent::PowerChanged { on: true });
        info!("lights on at {}", self.state.color);
        Ok(())
    }

    /// Switch the light off: push black to the device and persist.
    /// The remembered color is untouched. Idempotent.
    pub fn turn_off(
        &mut self,
        dev: &mut impl DevicePort,
        settings: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.state.power = false;
        dev.send(&gcode::set_led(Rgb::OFF))?;
        self.persist(settings)?;
        sink.emit(&LightEvent::PowerChanged { on: false });
        info!("lights off");
        Ok(())
    }

    /// Toggle the color-editing session.
    ///
    /// Closed → open: create the session and fit the picker below its
    /// trigger control; nothing is sent to the device. Open → closed:
    /// commit — exactly one device send of the current color, then
    /// persist.
    pub fn toggle_color_edit(
        &mut self,
        anchor: PickerAnchor,
        io: &mut (impl DevicePort + PickerPort),
        settings: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.session.is_some() {
            return self.close_session(io, settings, sink);
        }
        self.session = Some(PickerSession::new(anchor));
        io.enter();
        let (x, y) = anchor.drop_position(self.config.picker_gap_px);
        io.fit(x, y);
        sink.emit(&LightEvent::SessionOpened);
        info!("picker session opened at ({x}, {y})");
        Ok(())
    }

    /// The picker widget's `change` callback. Updates the in-memory
    /// color only — no device send, no persist — and only while a
    /// session is open; otherwise a no-op.
    pub fn color_picked(&mut self, color: Rgb) {
        if self.session.is_some() {
            self.state.color = color;
            debug!("picker color {color}");
        } else {
            debug!("picker change with no open session, ignoring");
        }
    }

    /// The picker widget's `exit` callback: the user dismissed the
    /// widget. Routes to the commit path when a session is open.
    pub fn picker_dismissed(
        &mut self,
        dev: &mut impl DevicePort,
        settings: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }
        self.close_session(dev, settings, sink)
    }

    // ── Host lifecycle ────────────────────────────────────────

    /// Re-read `ledStatus`/`ledColor` from the store into memory.
    ///
    /// Called at startup and whenever the host reports an out-of-band
    /// settings change. Missing or malformed values fall back to the
    /// configured defaults. Never pushes to the device.
    pub fn load_from_settings(
        &mut self,
        settings: &impl SettingsPort,
        sink: &mut impl EventSink,
    ) {
        let power = match settings.get(LED_STATUS_KEY) {
            Ok(value) => match value.as_i64() {
                // The original host stored JS truthiness: any nonzero is on.
                Some(n) => n != 0,
                None => {
                    warn!("stored {LED_STATUS_KEY} is not an integer, using default");
                    self.config.default_power
                }
            },
            Err(SettingsError::NotFound) => self.config.default_power,
            Err(e) => {
                warn!("could not read {LED_STATUS_KEY} ({e}), using default");
                self.config.default_power
            }
        };

        let color = match settings.get(LED_COLOR_KEY) {
            Ok(value) => match Rgb::from_value(&value) {
                Some(c) => c,
                None => {
                    warn!("stored {LED_COLOR_KEY} is malformed, using default");
                    self.config.default_color
                }
            },
            Err(SettingsError::NotFound) => self.config.default_color,
            Err(e) => {
                warn!("could not read {LED_COLOR_KEY} ({e}), using default");
                self.config.default_color
            }
        };

        self.state = LightState { power, color };
        sink.emit(&LightEvent::SettingsLoaded { power, color });
        info!("settings loaded: power={power} color={color}");
    }

    /// Re-assert in-memory state on a freshly (re)connected device.
    ///
    /// Device state is volatile across reconnects and power cycles, so
    /// the light is told what it should be showing: the current color
    /// when powered, black otherwise.
    pub fn device_connected(
        &mut self,
        dev: &mut impl DevicePort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        let output = self.state.led_output();
        dev.send(&gcode::set_led(output))?;
        sink.emit(&LightEvent::DeviceSynced { output });
        info!("device connected, re-asserted {output}");
        Ok(())
    }

    /// Host report of printer availability. User controls (power
    /// toggles, color edit) are ignored while the printer is offline or
    /// printing; lifecycle commands are never gated.
    pub fn set_printer_status(&mut self, operational: bool, printing: bool) {
        self.operational = operational;
        self.printing = printing;
        debug!("printer status: operational={operational} printing={printing}");
    }

    // ── Persistence ───────────────────────────────────────────

    /// Write power and color back to the store, then flush.
    ///
    /// No retries — the first failure is returned to the host as-is.
    /// The save step may perform I/O on the host side.
    pub fn persist(&self, settings: &mut impl SettingsPort) -> Result<()> {
        settings.set(LED_STATUS_KEY, Value::from(i64::from(self.state.power)))?;
        settings.set(LED_COLOR_KEY, self.state.color.to_value())?;
        settings.save()?;
        Ok(())
    }

    // ── Command dispatch ──────────────────────────────────────

    /// Process one command from the host event loop.
    pub fn handle_command(
        &mut self,
        cmd: LightCommand,
        io: &mut (impl DevicePort + PickerPort),
        settings: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.is_user_command(cmd) && !self.user_controls_enabled() {
            let reason = if self.printing {
                "printer is printing"
            } else {
                "printer is not operational"
            };
            sink.emit(&LightEvent::CommandIgnored { reason });
            debug!("ignoring {cmd:?}: {reason}");
            return Ok(());
        }

        match cmd {
            LightCommand::TurnOn => self.turn_on(io, settings, sink),
            LightCommand::TurnOff => self.turn_off(io, settings, sink),
            LightCommand::ToggleColorEdit(anchor) => {
                self.toggle_color_edit(anchor, io, settings, sink)
            }
            LightCommand::ColorPicked(color) => {
                self.color_picked(color);
                Ok(())
            }
            LightCommand::PickerDismissed => self.picker_dismissed(io, settings, sink),
            LightCommand::ReloadSettings => {
                self.load_from_settings(settings, sink);
                Ok(())
            }
            LightCommand::DeviceConnected => self.device_connected(io, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current in-memory state.
    pub fn state(&self) -> LightState {
        self.state
    }

    /// Whether a color-editing session is open.
    pub fn session_state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&PickerSession> {
        self.session.as_ref()
    }

    /// The controller's configuration.
    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Commit a session: drop it, push the edited color to the device,
    /// persist.
    fn close_session(
        &mut self,
        dev: &mut impl DevicePort,
        settings: &mut impl SettingsPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.session = None;
        dev.send(&gcode::set_led(self.state.color))?;
        self.persist(settings)?;
        sink.emit(&LightEvent::SessionClosed {
            committed: self.state.color,
        });
        info!("picker session closed, committed {}", self.state.color);
        Ok(())
    }

    fn is_user_command(&self, cmd: LightCommand) -> bool {
        matches!(
            cmd,
            LightCommand::TurnOn | LightCommand::TurnOff | LightCommand::ToggleColorEdit(_)
        )
    }

    fn user_controls_enabled(&self) -> bool {
        self.operational && !self.printing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_configured_defaults() {
        let ctl = LightController::new(LightConfig::default());
        assert_eq!(ctl.session_state(), SessionState::Closed);
        assert_eq!(ctl.state(), LightState::default());
    }

    #[test]
    fn color_picked_without_session_is_a_no_op() {
        let mut ctl = LightController::new(LightConfig::default());
        ctl.color_picked(Rgb::new(255, 0, 0));
        assert_eq!(ctl.state().color, Rgb::OFF);
    }
}
