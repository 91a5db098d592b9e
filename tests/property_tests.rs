//! Property tests: wire-format exactness and a reference-model check of
//! the controller under arbitrary command sequences.

use ledpanel::adapters::memory_settings::MemorySettings;
use ledpanel::app::commands::LightCommand;
use ledpanel::app::events::LightEvent;
use ledpanel::app::ports::{DeviceError, DevicePort, EventSink, PickerPort};
use ledpanel::app::service::LightController;
use ledpanel::color::Rgb;
use ledpanel::config::LightConfig;
use ledpanel::gcode;
use ledpanel::session::{PickerAnchor, SessionState};
use proptest::prelude::*;

// ── Minimal port stand-ins ────────────────────────────────────

#[derive(Default)]
struct RecordingIo {
    sent: Vec<String>,
}

impl DevicePort for RecordingIo {
    fn send(&mut self, command: &str) -> Result<(), DeviceError> {
        self.sent.push(command.to_string());
        Ok(())
    }
}

impl PickerPort for RecordingIo {
    fn enter(&mut self) {}
    fn fit(&mut self, _x: i32, _y: i32) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &LightEvent) {}
}

// ── Strategies ────────────────────────────────────────────────

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn arb_command() -> impl Strategy<Value = LightCommand> {
    prop_oneof![
        Just(LightCommand::TurnOn),
        Just(LightCommand::TurnOff),
        Just(LightCommand::ToggleColorEdit(PickerAnchor::new(10, 10, 20))),
        arb_rgb().prop_map(LightCommand::ColorPicked),
        Just(LightCommand::PickerDismissed),
        Just(LightCommand::ReloadSettings),
        Just(LightCommand::DeviceConnected),
    ]
}

// ── Reference model ───────────────────────────────────────────
//
// An independent, obviously-correct restatement of the contract:
// power toggles persist, sessions toggle and commit on close,
// picks apply only while open, reload restores the last persisted
// pair (or the defaults when nothing was ever persisted).

#[derive(Default)]
struct Model {
    power: bool,
    color: Rgb,
    open: bool,
    persisted: Option<(bool, Rgb)>,
}

impl Model {
    fn apply(&mut self, cmd: LightCommand) {
        match cmd {
            LightCommand::TurnOn => {
                self.power = true;
                self.persist();
            }
            LightCommand::TurnOff => {
                self.power = false;
                self.persist();
            }
            LightCommand::ToggleColorEdit(_) => {
                if self.open {
                    self.open = false;
                    self.persist();
                } else {
                    self.open = true;
                }
            }
            LightCommand::ColorPicked(c) => {
                if self.open {
                    self.color = c;
                }
            }
            LightCommand::PickerDismissed => {
                if self.open {
                    self.open = false;
                    self.persist();
                }
            }
            LightCommand::ReloadSettings => {
                let (power, color) = self.persisted.unwrap_or((false, Rgb::OFF));
                self.power = power;
                self.color = color;
            }
            LightCommand::DeviceConnected => {}
        }
    }

    fn persist(&mut self) {
        self.persisted = Some((self.power, self.color));
    }
}

// ── Properties ────────────────────────────────────────────────

proptest! {
    #[test]
    fn wire_format_is_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let cmd = gcode::set_led(Rgb::new(r, g, b));
        prop_assert_eq!(cmd.as_str(), format!("M146 r{} g{} b{}", r, g, b));
    }

    #[test]
    fn turn_on_pushes_the_current_color(color in arb_rgb()) {
        let mut ctl = LightController::new(LightConfig::default());
        let mut io = RecordingIo::default();
        let mut store = MemorySettings::new();
        let mut sink = NullSink;

        let anchor = PickerAnchor::new(0, 0, 0);
        ctl.toggle_color_edit(anchor, &mut io, &mut store, &mut sink).unwrap();
        ctl.color_picked(color);
        ctl.toggle_color_edit(anchor, &mut io, &mut store, &mut sink).unwrap();
        io.sent.clear();

        ctl.turn_on(&mut io, &mut store, &mut sink).unwrap();
        let expected = gcode::set_led(color);
        prop_assert_eq!(
            io.sent.last().map(String::as_str),
            Some(expected.as_str())
        );
    }

    #[test]
    fn persist_load_round_trip(power in any::<bool>(), color in arb_rgb()) {
        let mut ctl = LightController::new(LightConfig::default());
        let mut io = RecordingIo::default();
        let mut store = MemorySettings::new();
        let mut sink = NullSink;

        let anchor = PickerAnchor::new(0, 0, 0);
        ctl.toggle_color_edit(anchor, &mut io, &mut store, &mut sink).unwrap();
        ctl.color_picked(color);
        ctl.toggle_color_edit(anchor, &mut io, &mut store, &mut sink).unwrap();
        if power {
            ctl.turn_on(&mut io, &mut store, &mut sink).unwrap();
        } else {
            ctl.turn_off(&mut io, &mut store, &mut sink).unwrap();
        }

        let mut fresh = LightController::new(LightConfig::default());
        fresh.load_from_settings(&store, &mut sink);
        prop_assert_eq!(fresh.state(), ctl.state());
    }

    #[test]
    fn controller_matches_reference_model(
        cmds in proptest::collection::vec(arb_command(), 1..60)
    ) {
        let mut ctl = LightController::new(LightConfig::default());
        let mut io = RecordingIo::default();
        let mut store = MemorySettings::new();
        let mut sink = NullSink;
        let mut model = Model::default();

        for cmd in cmds {
            ctl.handle_command(cmd, &mut io, &mut store, &mut sink).unwrap();
            model.apply(cmd);

            prop_assert_eq!(ctl.state().power, model.power);
            prop_assert_eq!(ctl.state().color, model.color);
            let open = ctl.session_state() == SessionState::Open;
            prop_assert_eq!(open, model.open);
        }
    }
}
