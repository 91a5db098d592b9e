//! Inbound commands to the controller.
//!
//! These represent actions requested by the outside world — panel button
//! clicks, picker widget callbacks, host lifecycle hooks — that the
//! [`LightController`](super::service::LightController) interprets and
//! acts upon.

use crate::color::Rgb;
use crate::session::PickerAnchor;

/// Commands the host event loop feeds into the controller core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// "Lights On" control pressed.
    TurnOn,

    /// "Lights Off" control pressed.
    TurnOff,

    /// "Change Color" control pressed; carries the trigger geometry so
    /// the picker can be fitted below it.
    ToggleColorEdit(PickerAnchor),

    /// Picker `change` callback fired with a new color.
    ColorPicked(Rgb),

    /// Picker `exit` callback fired (user dismissed the widget).
    PickerDismissed,

    /// Host reports settings loaded or changed out-of-band.
    ReloadSettings,

    /// Host reports the printer connection (re-)established.
    DeviceConnected,
}
