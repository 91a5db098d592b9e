//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the light panel's business rules: power
//! toggling, the picker session lifecycle, settings synchronization,
//! and device re-assertion. All interaction with the host happens
//! through **port traits** defined in [`ports`], keeping this layer
//! fully testable without a host framework or a printer.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
