//! The configuration record and its enumerated fields.

use serde::{Deserialize, Serialize};

/// Smallest accepted window edge, in pixels.
pub const WINDOW_SIZE_MIN: u32 = 200;
/// Largest accepted window edge, in pixels.
pub const WINDOW_SIZE_MAX: u32 = 400;
/// Shortest quote refresh period, in seconds.
pub const REFRESH_INTERVAL_MIN: u32 = 1;
/// Smallest quote font size.
pub const FONT_SIZE_MIN: u32 = 5;

// =============================================================================
// Theme Selection
// =============================================================================

/// Visual style of both windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Cosmo,
    Flatly,
    Litera,
    #[default]
    Minty,
    Lumen,
    Sandstone,
    Yeti,
    Pulse,
    United,
    Morph,
    Journal,
    Darkly,
    Superhero,
    Solar,
    Cyborg,
    Vapor,
}

impl Theme {
    /// Get all available themes, in dropdown order.
    pub fn all() -> &'static [Theme] {
        &[
            Self::Cosmo,
            Self::Flatly,
            Self::Litera,
            Self::Minty,
            Self::Lumen,
            Self::Sandstone,
            Self::Yeti,
            Self::Pulse,
            Self::United,
            Self::Morph,
            Self::Journal,
            Self::Darkly,
            Self::Superhero,
            Self::Solar,
            Self::Cyborg,
            Self::Vapor,
        ]
    }

    /// Identifier as written to the configuration file.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Cosmo => "cosmo",
            Self::Flatly => "flatly",
            Self::Litera => "litera",
            Self::Minty => "minty",
            Self::Lumen => "lumen",
            Self::Sandstone => "sandstone",
            Self::Yeti => "yeti",
            Self::Pulse => "pulse",
            Self::United => "united",
            Self::Morph => "morph",
            Self::Journal => "journal",
            Self::Darkly => "darkly",
            Self::Superhero => "superhero",
            Self::Solar => "solar",
            Self::Cyborg => "cyborg",
            Self::Vapor => "vapor",
        }
    }

    /// Whether the theme uses a dark background.
    pub fn is_dark(&self) -> bool {
        matches!(
            self,
            Self::Darkly | Self::Superhero | Self::Solar | Self::Cyborg | Self::Vapor
        )
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Language Selection
// =============================================================================

/// Locale used for every user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "en_US")]
    EnUs,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Self::ZhCn, Self::EnUs]
    }

    /// Locale identifier as written to the configuration file.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh_CN",
            Self::EnUs => "en_US",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Configuration Record
// =============================================================================

/// Widget configuration - persisted to `config.json`.
///
/// Missing keys take their default; the record is replaced wholesale on
/// every change, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visual style.
    pub theme: Theme,

    /// Path to the raster image shown above the quote. May not exist.
    pub image_path: String,

    /// Window width in pixels.
    pub window_width: u32,

    /// Window height in pixels.
    pub window_height: u32,

    /// Quote rotation period in seconds.
    pub refresh_interval: u32,

    /// Quote font size.
    pub font_size: u32,

    /// Label language.
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            image_path: "pic/sun.png".to_string(),
            window_width: 250,
            window_height: 350,
            refresh_interval: 120,
            font_size: 10,
            language: Language::default(),
        }
    }
}

impl Config {
    /// Clamp numeric fields to their accepted ranges.
    pub fn validate(&mut self) {
        self.window_width = self.window_width.clamp(WINDOW_SIZE_MIN, WINDOW_SIZE_MAX);
        self.window_height = self.window_height.clamp(WINDOW_SIZE_MIN, WINDOW_SIZE_MAX);
        self.refresh_interval = self.refresh_interval.max(REFRESH_INTERVAL_MIN);
        self.font_size = self.font_size.max(FONT_SIZE_MIN);
    }

    /// Quote rotation period.
    pub fn refresh_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.refresh_interval))
    }

    /// Window size as `(width, height)`.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

// =============================================================================
// Tests
// =============================================================================
