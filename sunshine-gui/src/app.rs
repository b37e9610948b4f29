//! Main application state and update loop.

use std::time::Instant;

use eframe::egui;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use sunshine_core::{Config, ConfigStore, PinState, QuoteSource, SettingsSession, TextKey, WidgetState};

use crate::ui;
use crate::ui::image::WidgetImage;
use crate::ui::settings::SettingsDialog;

/// Main application state.
pub struct SunshineApp {
    /// Tokio runtime for the file picker.
    pub runtime: Runtime,

    /// Configuration file.
    pub store: ConfigStore,

    /// Live widget state.
    pub widget: WidgetState,

    /// Scaled image for the current configuration.
    pub image: WidgetImage,

    /// Open settings dialog, if any.
    pub settings_dialog: Option<SettingsDialog>,

    /// Configuration last pushed to the window.
    applied_config: Option<Config>,

    /// Pin state last pushed to the window.
    applied_pin: Option<PinState>,
}

impl SunshineApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Runtime, store: ConfigStore, config: Config) -> Self {
        info!("Initializing SunshineApp");

        let quotes = QuoteSource::new().load();
        let widget = WidgetState::new(config, quotes, Instant::now(), &mut rand::thread_rng());

        ui::fonts::install_cjk_fallback(&cc.egui_ctx);

        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        cc.egui_ctx.set_style(style);
        cc.egui_ctx.set_visuals(ui::colors::visuals(widget.config().theme));

        Self {
            runtime,
            store,
            widget,
            image: WidgetImage::default(),
            settings_dialog: None,
            applied_config: None,
            applied_pin: Some(PinState::Pinned),
        }
    }

    /// Whether the modal settings dialog is open.
    pub fn is_modal_open(&self) -> bool {
        self.settings_dialog.is_some()
    }

    /// Open the settings dialog over the live configuration.
    pub fn open_settings(&mut self) {
        if self.settings_dialog.is_some() {
            return;
        }
        info!("Opening settings");
        self.settings_dialog = Some(SettingsDialog::new(SettingsSession::open(self.widget.config())));
    }

    /// Flip always-on-top.
    pub fn toggle_topmost(&mut self) {
        self.widget.toggle_topmost();
    }

    /// End the event loop.
    pub fn close(&mut self, ctx: &egui::Context) {
        info!("Closing");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Pick a new quote when due and schedule the next wakeup.
    fn rotate_quote(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.widget.rotate_quote(now, &mut rand::thread_rng()) {
            debug!("Quote rotated");
        }
        ctx.request_repaint_after(self.widget.rotator().time_until_due(now));
    }

    /// Push configuration and pin changes to the window.
    ///
    /// Re-themes, resizes and retitles in one frame. The window position is
    /// never touched.
    fn sync_viewport(&mut self, ctx: &egui::Context) {
        let config = self.widget.config();
        if self.applied_config.as_ref() != Some(config) {
            ctx.set_visuals(ui::colors::visuals(config.theme));
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                config.window_width as f32,
                config.window_height as f32,
            )));
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.widget.text(TextKey::Title).to_string(),
            ));
            self.applied_config = Some(config.clone());
            ctx.request_repaint();
        }

        let pin = self.widget.pin();
        if self.applied_pin != Some(pin) {
            let level = if pin.is_topmost() {
                egui::viewport::WindowLevel::AlwaysOnTop
            } else {
                egui::viewport::WindowLevel::Normal
            };
            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
            self.applied_pin = Some(pin);
        }

        self.image.sync(&self.widget, ctx);
    }
}

impl eframe::App for SunshineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.rotate_quote(ctx);

        // Settings dialog first so its previews land in this frame
        if self.settings_dialog.is_some() {
            ui::settings::render(self, ctx);
        }

        self.sync_viewport(ctx);

        ui::widget::render(self, ctx);
    }
}
