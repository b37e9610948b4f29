//! Live state of the main widget.
//!
//! Rendering lives in the GUI crate; this holds everything the renderer
//! reads: the active configuration, pin state, quote timer and drag anchor.

mod drag;
mod layout;
mod rotation;

pub use drag::{DragState, Point};
pub use layout::{fit_image, CONTROL_BAR_ALLOWANCE, MAX_IMAGE_HEIGHT, SIDE_MARGIN};
pub use rotation::QuoteRotator;

use std::time::Instant;

use rand::Rng;

use crate::config::Config;
use crate::dialog::{ConfigChange, ConfigListener};
use crate::i18n::TextKey;
use crate::quotes::QuoteList;

/// Always-on-top state. Changes only on user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinState {
    #[default]
    Pinned,
    Unpinned,
}

impl PinState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Pinned => Self::Unpinned,
            Self::Unpinned => Self::Pinned,
        }
    }

    pub fn is_topmost(self) -> bool {
        self == Self::Pinned
    }
}

/// Visual emphasis of the pin toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Warning,
    Info,
    Danger,
    Secondary,
}

/// Main widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    config: Config,
    pin: PinState,
    rotator: QuoteRotator,
    drag: DragState,
}

impl WidgetState {
    /// Start pinned, showing a first quote immediately.
    pub fn new<R: Rng + ?Sized>(mut config: Config, quotes: QuoteList, now: Instant, rng: &mut R) -> Self {
        config.validate();
        let rotator = QuoteRotator::start(quotes, now, config.refresh_period(), rng);
        Self {
            config,
            pin: PinState::default(),
            rotator,
            drag: DragState::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the active configuration wholesale.
    ///
    /// Pin state, the displayed quote and the armed deadline are untouched;
    /// applying the same snapshot twice is the same as applying it once.
    pub fn apply(&mut self, mut config: Config) {
        config.validate();
        if config != self.config {
            tracing::debug!(theme = %config.theme, language = %config.language, "Applying config");
        }
        self.config = config;
    }

    pub fn pin(&self) -> PinState {
        self.pin
    }

    /// Flip the always-on-top flag and return the new state.
    pub fn toggle_topmost(&mut self) -> PinState {
        self.pin = self.pin.toggled();
        tracing::info!(topmost = self.pin.is_topmost(), "Toggled always-on-top");
        self.pin
    }

    /// Label of the pin toggle: offers the opposite of the current state.
    pub fn toggle_label(&self) -> &'static str {
        match self.pin {
            PinState::Pinned => self.text(TextKey::Unpin),
            PinState::Unpinned => self.text(TextKey::Pin),
        }
    }

    pub fn toggle_style(&self) -> ButtonStyle {
        match self.pin {
            PinState::Pinned => ButtonStyle::Warning,
            PinState::Unpinned => ButtonStyle::Info,
        }
    }

    /// Translate `key` in the active language.
    pub fn text(&self, key: TextKey) -> &'static str {
        self.config.language.text(key)
    }

    /// Drawn image size for a decoded image of `image` pixels.
    pub fn image_target(&self, image: (u32, u32)) -> Option<(u32, u32)> {
        fit_image(image, self.config.window_size())
    }

    pub fn quote(&self) -> &str {
        self.rotator.current()
    }

    pub fn rotator(&self) -> &QuoteRotator {
        &self.rotator
    }

    /// Rotate the quote if due, re-arming with the current interval.
    pub fn rotate_quote<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        self.rotator.tick(now, self.config.refresh_period(), rng)
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }
}

impl ConfigListener for WidgetState {
    fn on_change(&mut self, change: ConfigChange) {
        tracing::debug!(kind = ?change.kind, "Config change received");
        self.apply(change.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Language, Theme};
    use crate::dialog::ChangeKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn widget(config: Config) -> (WidgetState, StdRng, Instant) {
        let mut rng = StdRng::seed_from_u64(11);
        let now = Instant::now();
        let quotes = QuoteList::new(vec!["a".into(), "b".into()]).unwrap();
        (WidgetState::new(config, quotes, now, &mut rng), rng, now)
    }

    #[test]
    fn test_starts_pinned_with_unpin_label() {
        let (state, _, _) = widget(Config::default());

        assert_eq!(state.pin(), PinState::Pinned);
        assert_eq!(state.toggle_label(), "取消置顶");
        assert_eq!(state.toggle_style(), ButtonStyle::Warning);
    }

    #[test]
    fn test_toggle_topmost_flips_state_and_label() {
        let (mut state, _, _) = widget(Config {
            language: Language::EnUs,
            ..Default::default()
        });

        assert_eq!(state.toggle_topmost(), PinState::Unpinned);
        assert_eq!(state.toggle_label(), "Pin");
        assert_eq!(state.toggle_style(), ButtonStyle::Info);

        assert_eq!(state.toggle_topmost(), PinState::Pinned);
        assert_eq!(state.toggle_label(), "Unpin");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (mut once, _, _) = widget(Config::default());
        let mut twice = once.clone();
        let next = Config {
            theme: Theme::Cyborg,
            window_width: 300,
            language: Language::EnUs,
            ..Default::default()
        };

        once.apply(next.clone());
        twice.apply(next.clone());
        twice.apply(next);

        assert_eq!(once.config(), twice.config());
        assert_eq!(once.pin(), twice.pin());
        assert_eq!(once.quote(), twice.quote());
        assert_eq!(once.rotator().next_due(), twice.rotator().next_due());
    }

    #[test]
    fn test_apply_retexts_labels_and_keeps_pin() {
        let (mut state, _, _) = widget(Config::default());
        state.toggle_topmost();

        state.apply(Config {
            language: Language::EnUs,
            ..Default::default()
        });

        assert_eq!(state.pin(), PinState::Unpinned);
        assert_eq!(state.text(TextKey::Close), "Close");
        assert_eq!(state.toggle_label(), "Pin");
    }

    #[test]
    fn test_listener_applies_change() {
        let (mut state, _, _) = widget(Config::default());
        let config = Config {
            theme: Theme::Solar,
            ..Default::default()
        };

        state.on_change(ConfigChange {
            config: config.clone(),
            kind: ChangeKind::Preview,
        });

        assert_eq!(state.config(), &config);
    }

    #[test]
    fn test_rotate_uses_current_interval() {
        let (mut state, mut rng, now) = widget(Config {
            refresh_interval: 10,
            ..Default::default()
        });
        state.apply(Config {
            refresh_interval: 3,
            ..Default::default()
        });

        let fired_at = now + Duration::from_secs(10);
        assert!(state.rotate_quote(fired_at, &mut rng));
        assert_eq!(state.rotator().next_due(), fired_at + Duration::from_secs(3));
    }

    #[test]
    fn test_image_target_follows_window_size() {
        let (mut state, _, _) = widget(Config::default());
        assert_eq!(state.image_target((100, 100)), Some((150, 150)));

        state.apply(Config {
            window_width: 200,
            window_height: 200,
            ..Default::default()
        });
        assert_eq!(state.image_target((100, 100)), Some((140, 140)));
    }
}
