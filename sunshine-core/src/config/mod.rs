//! Configuration module for Sunshine.
//!
//! The configuration is a flat JSON record stored next to the executable's
//! working directory.

mod settings;
mod store;

pub use settings::{
    Config, Language, Theme, FONT_SIZE_MIN, REFRESH_INTERVAL_MIN, WINDOW_SIZE_MAX, WINDOW_SIZE_MIN,
};
pub use store::{ConfigError, ConfigStore, CONFIG_FILE};
