//! Utility modules: build info, settings, logging, file helpers.

pub mod build_info;
pub mod logging;
pub mod persistence;
pub mod settings;

pub use settings::Settings;
