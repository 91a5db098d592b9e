//! Picker session lifecycle.
//!
//! The open/closed state of the interactive color picker:
//!
//! ```text
//!  Closed ──toggle──▶ Open ──toggle / dismiss──▶ Closed
//! ```
//!
//! The controller holds the live session as `Option<PickerSession>` —
//! no sentinel booleans, and no peeking at UI text to infer whether the
//! picker is open. Only while a session exists do incoming picker
//! `change` callbacks have any effect.

/// Screen-space geometry of the control that opened the picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerAnchor {
    /// Left edge of the trigger control, in pixels.
    pub x: i32,
    /// Top edge of the trigger control, in pixels.
    pub y: i32,
    /// Height of the trigger control, in pixels.
    pub height: i32,
}

impl PickerAnchor {
    pub const fn new(x: i32, y: i32, height: i32) -> Self {
        Self { x, y, height }
    }

    /// Where the picker should be fitted: directly below the trigger,
    /// separated by `gap_px`.
    pub fn drop_position(&self, gap_px: i32) -> (i32, i32) {
        (self.x, self.y + self.height + gap_px)
    }
}

/// A live color-editing session. At most one exists per controller;
/// it is created when the picker opens and dropped when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSession {
    /// Geometry of the trigger control, kept so the widget can be
    /// re-fitted while the session is open.
    pub anchor: PickerAnchor,
}

impl PickerSession {
    pub const fn new(anchor: PickerAnchor) -> Self {
        Self { anchor }
    }
}

/// Reported session state, derived from the controller's `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}
