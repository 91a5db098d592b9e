//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter           | Implements   | Connects to                |
//! |-------------------|--------------|----------------------------|
//! | `log_sink`        | EventSink    | `log` facade output        |
//! | `memory_settings` | SettingsPort | In-memory store (hosts     |
//! |                   |              | without persistence, tests)|
//!
//! The device channel and picker widget adapters live in the host
//! application — they wrap host-framework objects this crate does not
//! depend on.

pub mod log_sink;
pub mod memory_settings;
