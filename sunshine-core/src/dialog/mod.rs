//! Settings session: the form behind the settings dialog.
//!
//! The session keeps the configuration snapshot taken at open time plus the
//! working field values. Every valid edit is reported to a
//! [`ConfigListener`] as a preview; Save persists and reports once more;
//! Cancel reports the original snapshot.

mod form;

pub use form::{NumericField, NumericKind, FONT_SIZE_SPIN_MAX, REFRESH_INTERVAL_SPIN_MAX};

use crate::config::{Config, ConfigStore, Language, Theme};
use crate::i18n::TextKey;

/// Why a snapshot was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Live edit, not persisted.
    Preview,
    /// Committed to the store.
    Saved,
    /// Original snapshot restored on cancel.
    Restored,
}

/// A full configuration snapshot pushed out of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub config: Config,
    pub kind: ChangeKind,
}

/// Receives configuration snapshots from a settings session.
pub trait ConfigListener {
    fn on_change(&mut self, change: ConfigChange);
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Saved,
    Cancelled,
}

/// Form state for one opening of the settings dialog.
#[derive(Debug, Clone)]
pub struct SettingsSession {
    original: Config,
    theme: Theme,
    language: Language,
    image_path: String,
    image_path_input: String,
    width: NumericField,
    height: NumericField,
    refresh_interval: NumericField,
    font_size: NumericField,
    state: SessionState,
}

impl SettingsSession {
    /// Open a session over `config`.
    pub fn open(config: &Config) -> Self {
        tracing::debug!("Opening settings session");
        Self {
            original: config.clone(),
            theme: config.theme,
            language: config.language,
            image_path: config.image_path.clone(),
            image_path_input: config.image_path.clone(),
            width: NumericField::new(NumericKind::Width, config.window_width),
            height: NumericField::new(NumericKind::Height, config.window_height),
            refresh_interval: NumericField::new(NumericKind::RefreshInterval, config.refresh_interval),
            font_size: NumericField::new(NumericKind::FontSize, config.font_size),
            state: SessionState::Open,
        }
    }

    /// Snapshot taken at open time.
    pub fn original(&self) -> &Config {
        &self.original
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Language of the dialog's own labels.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key` in the dialog's language.
    pub fn text(&self, key: TextKey) -> &'static str {
        self.language.text(key)
    }

    /// Full record assembled from the current valid field values.
    pub fn snapshot(&self) -> Config {
        Config {
            theme: self.theme,
            image_path: self.image_path.clone(),
            window_width: self.width.value(),
            window_height: self.height.value(),
            refresh_interval: self.refresh_interval.value(),
            font_size: self.font_size.value(),
            language: self.language,
        }
    }

    // =========================================================================
    // Field Edits
    // =========================================================================

    pub fn set_theme(&mut self, theme: Theme, listener: &mut dyn ConfigListener) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.preview(listener);
    }

    /// Switch the dialog labels and preview the new language.
    pub fn set_language(&mut self, language: Language, listener: &mut dyn ConfigListener) {
        if language == self.language {
            return;
        }
        self.language = language;
        self.preview(listener);
    }

    /// Text buffer of the image path input.
    pub fn image_path_input_mut(&mut self) -> &mut String {
        &mut self.image_path_input
    }

    pub fn image_path_input(&self) -> &str {
        &self.image_path_input
    }

    /// Commit the typed image path; previews when it changed.
    pub fn commit_image_path(&mut self, listener: &mut dyn ConfigListener) {
        if self.image_path_input == self.image_path {
            return;
        }
        self.image_path = self.image_path_input.clone();
        self.preview(listener);
    }

    /// Path picked from the file browser. Always previews.
    pub fn choose_image(&mut self, path: String, listener: &mut dyn ConfigListener) {
        self.image_path_input = path.clone();
        self.image_path = path;
        self.preview(listener);
    }

    pub fn field(&self, kind: NumericKind) -> &NumericField {
        match kind {
            NumericKind::Width => &self.width,
            NumericKind::Height => &self.height,
            NumericKind::RefreshInterval => &self.refresh_interval,
            NumericKind::FontSize => &self.font_size,
        }
    }

    pub fn field_mut(&mut self, kind: NumericKind) -> &mut NumericField {
        match kind {
            NumericKind::Width => &mut self.width,
            NumericKind::Height => &mut self.height,
            NumericKind::RefreshInterval => &mut self.refresh_interval,
            NumericKind::FontSize => &mut self.font_size,
        }
    }

    /// Commit the typed text of a spinner. Invalid text is reverted silently.
    pub fn commit_field(&mut self, kind: NumericKind, listener: &mut dyn ConfigListener) {
        if self.field_mut(kind).commit().is_some() {
            self.preview(listener);
        }
    }

    /// Spinner arrow press.
    pub fn step_field(&mut self, kind: NumericKind, up: bool, listener: &mut dyn ConfigListener) {
        if self.field_mut(kind).step(up).is_some() {
            self.preview(listener);
        }
    }

    fn preview(&self, listener: &mut dyn ConfigListener) {
        listener.on_change(ConfigChange {
            config: self.snapshot(),
            kind: ChangeKind::Preview,
        });
    }

    // =========================================================================
    // Closing
    // =========================================================================

    /// Persist the form and report the final snapshot.
    ///
    /// Pending typed text is committed first. A write failure is logged and
    /// the session still closes. No-op once closed; returns whether this
    /// call closed the session.
    pub fn save(&mut self, store: &ConfigStore, listener: &mut dyn ConfigListener) -> bool {
        if !self.is_open() {
            return false;
        }
        for kind in NumericKind::all() {
            self.field_mut(*kind).commit();
        }
        self.image_path = self.image_path_input.clone();

        let config = self.snapshot();
        if let Err(e) = store.save(&config) {
            tracing::error!(path = %store.path().display(), error = %e, "Failed to save config");
        }
        listener.on_change(ConfigChange {
            config,
            kind: ChangeKind::Saved,
        });
        self.state = SessionState::Saved;
        true
    }

    /// Restore the snapshot taken at open time. No-op once closed.
    pub fn cancel(&mut self, listener: &mut dyn ConfigListener) -> bool {
        if !self.is_open() {
            return false;
        }
        listener.on_change(ConfigChange {
            config: self.original.clone(),
            kind: ChangeKind::Restored,
        });
        self.state = SessionState::Cancelled;
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteList;
    use crate::widget::WidgetState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        changes: Vec<ConfigChange>,
    }

    impl ConfigListener for Recorder {
        fn on_change(&mut self, change: ConfigChange) {
            self.changes.push(change);
        }
    }

    impl Recorder {
        fn last(&self) -> &ConfigChange {
            self.changes.last().unwrap()
        }
    }

    fn setup_store() -> (TempDir, ConfigStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::at(temp_dir.path().join("config.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_open_mirrors_config() {
        let config = Config {
            theme: Theme::Pulse,
            language: Language::EnUs,
            ..Default::default()
        };
        let session = SettingsSession::open(&config);

        assert_eq!(session.snapshot(), config);
        assert_eq!(session.original(), &config);
        assert_eq!(session.text(TextKey::SaveButton), "Save");
        assert!(session.is_open());
    }

    #[test]
    fn test_theme_change_previews_full_record() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        session.set_theme(Theme::Darkly, &mut rec);

        assert_eq!(rec.changes.len(), 1);
        assert_eq!(rec.last().kind, ChangeKind::Preview);
        assert_eq!(
            rec.last().config,
            Config {
                theme: Theme::Darkly,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_out_of_range_width_fires_no_preview() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        *session.field_mut(NumericKind::Width).text_mut() = "500".to_string();
        session.commit_field(NumericKind::Width, &mut rec);

        assert!(rec.changes.is_empty());
        assert_eq!(session.field(NumericKind::Width).text(), "250");
        assert_eq!(session.snapshot().window_width, 250);
    }

    #[test]
    fn test_valid_width_previews() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        *session.field_mut(NumericKind::Width).text_mut() = "320".to_string();
        session.commit_field(NumericKind::Width, &mut rec);

        assert_eq!(rec.last().config.window_width, 320);
    }

    #[test]
    fn test_spinner_step_previews() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        session.step_field(NumericKind::FontSize, true, &mut rec);
        session.step_field(NumericKind::RefreshInterval, false, &mut rec);

        assert_eq!(rec.changes.len(), 2);
        assert_eq!(rec.last().config.font_size, 11);
        assert_eq!(rec.last().config.refresh_interval, 119);
    }

    #[test]
    fn test_browse_previews_immediately() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        session.choose_image("/home/me/sun.jpg".to_string(), &mut rec);

        assert_eq!(rec.last().kind, ChangeKind::Preview);
        assert_eq!(rec.last().config.image_path, "/home/me/sun.jpg");
        assert_eq!(session.image_path_input(), "/home/me/sun.jpg");
    }

    #[test]
    fn test_typed_image_path_previews_on_commit() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        session.image_path_input_mut().push_str(".bak");
        assert!(rec.changes.is_empty());
        session.commit_image_path(&mut rec);
        session.commit_image_path(&mut rec);

        assert_eq!(rec.changes.len(), 1);
        assert_eq!(rec.last().config.image_path, "pic/sun.png.bak");
    }

    #[test]
    fn test_language_switch_retexts_and_previews() {
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();
        assert_eq!(session.text(TextKey::CancelButton), "取消 Cancel");

        session.set_language(Language::EnUs, &mut rec);

        assert_eq!(session.text(TextKey::CancelButton), "Cancel");
        assert_eq!(rec.last().config.language, Language::EnUs);
    }

    #[test]
    fn test_cancel_restores_original() {
        let original = Config::default();
        let mut session = SettingsSession::open(&original);
        let mut rec = Recorder::default();

        session.set_theme(Theme::Vapor, &mut rec);
        assert!(session.cancel(&mut rec));

        assert_eq!(rec.last().kind, ChangeKind::Restored);
        assert_eq!(rec.last().config, original);
        assert_eq!(session.state(), SessionState::Cancelled);
    }

    #[test]
    fn test_cancel_reverts_widget_theme() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut widget = WidgetState::new(Config::default(), QuoteList::fallback(), Instant::now(), &mut rng);
        let mut session = SettingsSession::open(widget.config());

        session.set_theme(Theme::Darkly, &mut widget);
        assert_eq!(widget.config().theme, Theme::Darkly);

        assert!(session.cancel(&mut widget));
        assert_eq!(widget.config().theme, Theme::Minty);
        assert_eq!(widget.config(), &Config::default());
    }

    #[test]
    fn test_preview_then_cancel_leaves_file_untouched() {
        let (_temp, store) = setup_store();
        store.save(&Config::default()).unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let mut session = SettingsSession::open(&store.load());
        let mut rec = Recorder::default();
        session.set_theme(Theme::Cyborg, &mut rec);
        session.step_field(NumericKind::Height, false, &mut rec);
        session.choose_image("other.png".to_string(), &mut rec);
        session.cancel(&mut rec);

        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_save_persists_and_reports() {
        let (_temp, store) = setup_store();
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        session.set_theme(Theme::Sandstone, &mut rec);
        *session.field_mut(NumericKind::RefreshInterval).text_mut() = "30".to_string();
        assert!(session.save(&store, &mut rec));

        assert_eq!(rec.last().kind, ChangeKind::Saved);
        assert_eq!(rec.last().config.refresh_interval, 30);
        assert_eq!(store.load(), rec.last().config);
    }

    #[test]
    fn test_save_failure_still_closes() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::at(temp_dir.path().join("missing").join("config.json"));
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        assert!(session.save(&store, &mut rec));

        assert_eq!(rec.last().kind, ChangeKind::Saved);
        assert_eq!(session.state(), SessionState::Saved);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (_temp, store) = setup_store();
        let mut session = SettingsSession::open(&Config::default());
        let mut rec = Recorder::default();

        assert!(session.save(&store, &mut rec));
        assert!(!session.save(&store, &mut rec));
        assert!(!session.cancel(&mut rec));

        assert_eq!(rec.changes.len(), 1);
    }
}
