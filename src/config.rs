//! Controller configuration and persisted-settings schema.
//!
//! The key names match the host application's stored settings schema —
//! panels persisted by earlier releases load against them, so do not
//! rename them.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Settings key for the persisted power flag. Stored as integer 0 or 1.
pub const LED_STATUS_KEY: &str = "ledStatus";

/// Settings key for the persisted color. Stored as a 3-element integer
/// array, each element 0–255.
pub const LED_COLOR_KEY: &str = "ledColor";

/// Tunable controller parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightConfig {
    /// Power state assumed when the store has no `ledStatus` entry.
    pub default_power: bool,
    /// Color assumed when the store has no `ledColor` entry or the
    /// stored value is malformed.
    pub default_color: Rgb,
    /// Vertical gap in pixels between the trigger control and the
    /// picker widget fitted below it.
    pub picker_gap_px: i32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            default_power: false,
            default_color: Rgb::OFF,
            picker_gap_px: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = LightConfig::default();
        assert!(!c.default_power, "lights must default to off");
        assert_eq!(c.default_color, Rgb::OFF);
        assert!(c.picker_gap_px >= 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = LightConfig {
            default_power: true,
            default_color: Rgb::new(255, 255, 255),
            picker_gap_px: 4,
        };
        let json = serde_json::to_string(&c).unwrap();
        let c2: LightConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.default_power, c2.default_power);
        assert_eq!(c.default_color, c2.default_color);
        assert_eq!(c.picker_gap_px, c2.picker_gap_px);
    }
}
