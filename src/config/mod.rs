//! Configuration module for muatan
//!
//! Settings are process-wide and read from the environment once at startup:
//! the field encryption secret and the log filter.

pub mod settings;

pub use settings::Settings;
