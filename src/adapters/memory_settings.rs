//! In-memory settings store.
//!
//! Simulation backend for the [`SettingsPort`]: in production the store
//! is the host application's own persisted settings, but headless hosts
//! and tests need a stand-in. Mirrors the host's two-level model —
//! `set` stages values in the live view, `save` copies the live view to
//! the durable one.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::app::ports::{SettingsError, SettingsPort};

/// In-memory [`SettingsPort`] with staged/durable levels.
#[derive(Debug, Default)]
pub struct MemorySettings {
    live: HashMap<String, Value>,
    durable: HashMap<String, Value>,
    saves: usize,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Host-side mutation that bypasses the controller, made durable
    /// immediately — models an out-of-band settings change.
    pub fn inject(&mut self, key: &str, value: Value) {
        self.live.insert(key.to_string(), value.clone());
        self.durable.insert(key.to_string(), value);
    }

    /// Drop staged values, reverting the live view to the durable one.
    pub fn discard_staged(&mut self) {
        self.live = self.durable.clone();
    }

    /// Read straight from the durable level (what a reload would see
    /// after a host restart).
    pub fn durable_value(&self, key: &str) -> Option<&Value> {
        self.durable.get(key)
    }
}

impl SettingsPort for MemorySettings {
    fn get(&self, key: &str) -> Result<Value, SettingsError> {
        self.live.get(key).cloned().ok_or(SettingsError::NotFound)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        self.live.insert(key.to_string(), value);
        Ok(())
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        self.durable = self.live.clone();
        self.saves += 1;
        debug!("settings saved ({} keys)", self.durable.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_missing_key_is_not_found() {
        let store = MemorySettings::new();
        assert_eq!(store.get("nope"), Err(SettingsError::NotFound));
    }

    #[test]
    fn set_stages_until_save() {
        let mut store = MemorySettings::new();
        store.set("k", json!(1)).unwrap();
        assert_eq!(store.get("k").unwrap(), json!(1));
        assert!(store.durable_value("k").is_none(), "not durable before save");

        store.save().unwrap();
        assert_eq!(store.durable_value("k"), Some(&json!(1)));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn discard_staged_reverts_to_durable() {
        let mut store = MemorySettings::new();
        store.set("k", json!("old")).unwrap();
        store.save().unwrap();
        store.set("k", json!("new")).unwrap();
        store.discard_staged();
        assert_eq!(store.get("k").unwrap(), json!("old"));
    }

    #[test]
    fn inject_is_immediately_durable() {
        let mut store = MemorySettings::new();
        store.inject("k", json!([1, 2, 3]));
        assert_eq!(store.get("k").unwrap(), json!([1, 2, 3]));
        assert_eq!(store.durable_value("k"), Some(&json!([1, 2, 3])));
        assert_eq!(store.save_count(), 0);
    }
}
