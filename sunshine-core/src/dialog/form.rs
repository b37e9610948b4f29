//! Numeric spinner fields of the settings form.

use crate::config::{FONT_SIZE_MIN, REFRESH_INTERVAL_MIN, WINDOW_SIZE_MAX, WINDOW_SIZE_MIN};

/// Upper bound of the interval spinner arrows.
pub const REFRESH_INTERVAL_SPIN_MAX: u32 = 3600;
/// Upper bound of the font size spinner arrows.
pub const FONT_SIZE_SPIN_MAX: u32 = 16;

/// Which numeric field a spinner edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Width,
    Height,
    RefreshInterval,
    FontSize,
}

impl NumericKind {
    pub fn all() -> &'static [NumericKind] {
        &[Self::Width, Self::Height, Self::RefreshInterval, Self::FontSize]
    }

    /// Spinner arrow range, inclusive.
    pub fn spin_range(self) -> (u32, u32) {
        match self {
            Self::Width | Self::Height => (WINDOW_SIZE_MIN, WINDOW_SIZE_MAX),
            Self::RefreshInterval => (REFRESH_INTERVAL_MIN, REFRESH_INTERVAL_SPIN_MAX),
            Self::FontSize => (FONT_SIZE_MIN, FONT_SIZE_SPIN_MAX),
        }
    }

    pub fn step(self) -> u32 {
        match self {
            Self::Width | Self::Height => 10,
            Self::RefreshInterval | Self::FontSize => 1,
        }
    }

    /// Whether a typed value may be previewed.
    ///
    /// Window edges are bounded on both sides; interval and font size only
    /// from below.
    pub fn accepts(self, value: u32) -> bool {
        match self {
            Self::Width | Self::Height => (WINDOW_SIZE_MIN..=WINDOW_SIZE_MAX).contains(&value),
            Self::RefreshInterval => value >= REFRESH_INTERVAL_MIN,
            Self::FontSize => value >= FONT_SIZE_MIN,
        }
    }
}

/// A spinner: an editable text buffer over the last valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    kind: NumericKind,
    text: String,
    value: u32,
}

impl NumericField {
    pub fn new(kind: NumericKind, value: u32) -> Self {
        Self {
            kind,
            text: value.to_string(),
            value,
        }
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Last valid value.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text buffer for binding to a text input.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Parse the buffer.
    ///
    /// Returns the new value when it is valid and differs from the last one.
    /// An invalid buffer is reverted to the last valid value.
    pub fn commit(&mut self) -> Option<u32> {
        match self.text.trim().parse::<u32>() {
            Ok(value) if self.kind.accepts(value) => self.set(value),
            _ => {
                tracing::debug!(kind = ?self.kind, input = %self.text, "Ignoring invalid value");
                self.text = self.value.to_string();
                None
            }
        }
    }

    /// Move one step up or down from the last valid value, within the
    /// spinner range.
    pub fn step(&mut self, up: bool) -> Option<u32> {
        let (min, max) = self.kind.spin_range();
        let step = self.kind.step();
        let next = if up {
            self.value.saturating_add(step)
        } else {
            self.value.saturating_sub(step)
        };
        self.set(next.clamp(min, max))
    }

    fn set(&mut self, value: u32) -> Option<u32> {
        self.text = value.to_string();
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }
}
