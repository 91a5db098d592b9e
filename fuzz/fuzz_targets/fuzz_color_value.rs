//! Fuzz target: the untyped settings boundary.
//!
//! Feeds arbitrary bytes through the two loose-input parsers
//! (`Rgb::from_value` on stored JSON, `Rgb::from_hex` on picker text)
//! and verifies they never panic and never produce a color from
//! malformed input shapes.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - A parsed color always round-trips through its JSON form
//!
//! cargo fuzz run fuzz_color_value

#![no_main]

use ledpanel::color::Rgb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        if let Some(color) = Rgb::from_value(&value) {
            // Anything accepted must round-trip exactly.
            assert_eq!(Rgb::from_value(&color.to_value()), Some(color));
        }
    }

    if let Some(color) = Rgb::from_hex(text) {
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
    }
});
