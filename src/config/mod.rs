//! Configuration management for standup.
//!
//! This module handles loading and saving configuration from `~/.standup/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, IndicatorConfig};
