//! Sunshine Core Library
//!
//! This crate provides everything behind the Sunshine floating widget that
//! does not draw pixels:
//!
//! - Configuration record and its JSON file store
//! - Quote list loading and random selection
//! - Translation table keyed by label
//! - Main widget state (pin state, quote timer, image fitting, drag math)
//! - Settings session with live preview, save and cancel

pub mod config;
pub mod dialog;
pub mod i18n;
pub mod quotes;
pub mod widget;

// Re-exports for convenience
pub use config::{Config, ConfigError, ConfigStore, Language, Theme};
pub use dialog::{ChangeKind, ConfigChange, ConfigListener, NumericKind, SettingsSession};
pub use i18n::TextKey;
pub use quotes::{QuoteList, QuoteSource, FALLBACK_QUOTE};
pub use widget::{ButtonStyle, PinState, Point, WidgetState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
