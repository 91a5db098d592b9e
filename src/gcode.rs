//! Firmware wire commands.
//!
//! Exactly one command format exists: the LED color command
//! `M146 r<R> g<G> b<B>`, with each field a decimal integer in 0–255.
//! The printer firmware's parser matches this text byte-for-byte, so the
//! encoding here must never change shape.

use core::fmt::Write;

use crate::color::Rgb;

/// Widest possible encoding is `M146 r255 g255 b255` (19 bytes); the
/// buffer is sized with headroom.
pub const MAX_COMMAND_LEN: usize = 24;

/// A formatted device command, stack-allocated.
pub type LedCommand = heapless::String<MAX_COMMAND_LEN>;

/// Build the LED color command for `color`.
pub fn set_led(color: Rgb) -> LedCommand {
    let mut cmd = LedCommand::new();
    // Cannot overflow: see MAX_COMMAND_LEN.
    let _ = write!(cmd, "M146 r{} g{} b{}", color.r, color.g, color.b);
    cmd
}
