//! Settings dialog.
//!
//! Shown in its own viewport while the main widget is disabled underneath.
//! Every valid edit previews on the widget immediately.

use std::path::PathBuf;

use eframe::egui::{self, RichText, Rounding, Vec2};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use sunshine_core::{
    ConfigListener, ConfigStore, Language, NumericKind, SettingsSession, TextKey, Theme, WidgetState,
};

use crate::app::SunshineApp;
use crate::ui::colors;

/// Extensions offered by the image file filter.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

const DIALOG_SIZE: Vec2 = Vec2::new(420.0, 640.0);

/// An open settings dialog.
pub struct SettingsDialog {
    pub session: SettingsSession,

    /// Pending file picker result receiver.
    browse_rx: Option<tokio::sync::oneshot::Receiver<Option<PathBuf>>>,
}

impl SettingsDialog {
    pub fn new(session: SettingsSession) -> Self {
        Self {
            session,
            browse_rx: None,
        }
    }

    /// Open the image picker asynchronously.
    fn browse_image(&mut self, runtime: &Runtime) {
        // Don't open another picker if one is pending
        if self.browse_rx.is_some() {
            return;
        }

        let (tx, rx) = tokio::sync::oneshot::channel();
        self.browse_rx = Some(rx);

        let title = self.session.text(TextKey::ImageSection);
        let image_files = self.session.text(TextKey::ImageFileType);
        let all_files = self.session.text(TextKey::AllFiles);

        runtime.spawn(async move {
            let file = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(image_files, IMAGE_EXTENSIONS)
                .add_filter(all_files, &["*"])
                .pick_file()
                .await
                .map(|f| f.path().to_path_buf());
            let _ = tx.send(file);
        });
    }

    /// Check for picker completion.
    fn check_browse_selection(&mut self, listener: &mut dyn ConfigListener) {
        if let Some(mut rx) = self.browse_rx.take() {
            match rx.try_recv() {
                Ok(Some(path)) => {
                    info!("Picked image: {}", path.display());
                    self.session
                        .choose_image(path.to_string_lossy().to_string(), listener);
                }
                Ok(None) => {
                    // User cancelled the picker
                    debug!("Image selection cancelled");
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    // Still waiting
                    self.browse_rx = Some(rx);
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    warn!("Image picker channel closed unexpectedly");
                }
            }
        }
    }
}

/// Render the settings dialog and drop it once saved or cancelled.
pub fn render(app: &mut SunshineApp, ctx: &egui::Context) {
    let Some(dialog) = app.settings_dialog.as_mut() else {
        return;
    };

    dialog.check_browse_selection(&mut app.widget);

    let mut builder = egui::ViewportBuilder::default()
        .with_title(dialog.session.text(TextKey::WindowTitle))
        .with_inner_size(DIALOG_SIZE)
        .with_resizable(false)
        .with_always_on_top();
    if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
        let pos = ((monitor - DIALOG_SIZE) / 2.0).max(Vec2::ZERO);
        builder = builder.with_position(pos.to_pos2());
    }

    let widget = &mut app.widget;
    let store = &app.store;
    let runtime = &app.runtime;

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("settings_dialog"),
        builder,
        |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                // Backend without multiple windows: draw inside the widget.
                egui::Window::new(dialog.session.text(TextKey::WindowTitle))
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| render_form(dialog, ui, widget, store, runtime));
            } else {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        render_form(dialog, ui, widget, store, runtime);
                    });
                });
            }

            // Closing the window is the same as Cancel
            if ctx.input(|i| i.viewport().close_requested()) {
                dialog.session.cancel(widget);
            }

            if dialog.browse_rx.is_some() {
                ctx.request_repaint();
            }
        },
    );

    if !dialog.session.is_open() {
        info!(state = ?dialog.session.state(), "Settings closed");
        app.settings_dialog = None;
        ctx.request_repaint();
    }
}

fn render_form(
    dialog: &mut SettingsDialog,
    ui: &mut egui::Ui,
    widget: &mut WidgetState,
    store: &ConfigStore,
    runtime: &Runtime,
) {
    ui.spacing_mut().item_spacing = Vec2::new(8.0, 10.0);
    let palette = colors::for_theme(dialog.session.theme());

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------
    section(ui, dialog.session.text(TextKey::ThemeSection), |ui| {
        let current = dialog.session.theme();
        let mut selected: Option<Theme> = None;

        egui::ComboBox::from_id_salt("theme_select")
            .selected_text(current.id())
            .width(240.0)
            .show_ui(ui, |ui| {
                for theme in Theme::all() {
                    if ui.selectable_label(*theme == current, theme.id()).clicked() {
                        selected = Some(*theme);
                    }
                }
            });

        // Apply selection after ComboBox closes (avoids borrow conflict)
        if let Some(theme) = selected {
            dialog.session.set_theme(theme, widget);
        }
    });

    // -------------------------------------------------------------------------
    // Image
    // -------------------------------------------------------------------------
    section(ui, dialog.session.text(TextKey::ImageSection), |ui| {
        ui.horizontal(|ui| {
            let browse_label = dialog.session.text(TextKey::BrowseButton);
            let width = ui.available_width() - 80.0;
            let response = ui.add(
                egui::TextEdit::singleline(dialog.session.image_path_input_mut()).desired_width(width),
            );
            if response.lost_focus() {
                dialog.session.commit_image_path(widget);
            }

            let browse = egui::Button::new(RichText::new(browse_label).color(palette.info))
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::new(1.0, palette.info))
                .rounding(Rounding::same(4.0));
            if ui.add_enabled(dialog.browse_rx.is_none(), browse).clicked() {
                dialog.browse_image(runtime);
            }
        });
    });

    // -------------------------------------------------------------------------
    // Window size
    // -------------------------------------------------------------------------
    section(ui, dialog.session.text(TextKey::WindowSizeSection), |ui| {
        spinner_row(ui, &mut dialog.session, TextKey::WidthLabel, NumericKind::Width, widget);
        spinner_row(ui, &mut dialog.session, TextKey::HeightLabel, NumericKind::Height, widget);
    });

    // -------------------------------------------------------------------------
    // Refresh interval
    // -------------------------------------------------------------------------
    section(ui, dialog.session.text(TextKey::RefreshSection), |ui| {
        spinner_row(
            ui,
            &mut dialog.session,
            TextKey::IntervalLabel,
            NumericKind::RefreshInterval,
            widget,
        );
    });

    // -------------------------------------------------------------------------
    // Font size
    // -------------------------------------------------------------------------
    section(ui, dialog.session.text(TextKey::FontSection), |ui| {
        spinner_row(ui, &mut dialog.session, TextKey::SizeLabel, NumericKind::FontSize, widget);
    });

    // -------------------------------------------------------------------------
    // Language
    // -------------------------------------------------------------------------
    section(ui, dialog.session.text(TextKey::LanguageSection), |ui| {
        ui.horizontal(|ui| {
            ui.label(dialog.session.text(TextKey::LanguageLabel));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let current = dialog.session.language();
                let mut selected: Option<Language> = None;

                egui::ComboBox::from_id_salt("language_select")
                    .selected_text(current.id())
                    .width(100.0)
                    .show_ui(ui, |ui| {
                        for language in Language::all() {
                            if ui
                                .selectable_label(*language == current, language.id())
                                .clicked()
                            {
                                selected = Some(*language);
                            }
                        }
                    });

                if let Some(language) = selected {
                    dialog.session.set_language(language, widget);
                }
            });
        });
    });

    // -------------------------------------------------------------------------
    // Footer
    // -------------------------------------------------------------------------
    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add_sized(
                Vec2::new(90.0, 30.0),
                egui::Button::new(RichText::new(dialog.session.text(TextKey::SaveButton)).strong())
                    .fill(palette.success)
                    .rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            dialog.session.save(store, widget);
        }

        if ui
            .add_sized(
                Vec2::new(100.0, 30.0),
                egui::Button::new(
                    RichText::new(dialog.session.text(TextKey::CancelButton)).color(palette.danger),
                )
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::new(1.0, palette.danger))
                .rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            dialog.session.cancel(widget);
        }
    });
}

/// A titled group box.
fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong());
        add_contents(ui);
    });
}

/// Label on the left, spinner on the right.
fn spinner_row(
    ui: &mut egui::Ui,
    session: &mut SettingsSession,
    label: TextKey,
    kind: NumericKind,
    widget: &mut WidgetState,
) {
    ui.horizontal(|ui| {
        ui.label(session.text(label));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left: added in reverse visual order
            if ui.small_button("+").clicked() {
                session.step_field(kind, true, widget);
            }
            let response = ui.add(
                egui::TextEdit::singleline(session.field_mut(kind).text_mut())
                    .desired_width(60.0),
            );
            if response.lost_focus() {
                session.commit_field(kind, widget);
            }
            if ui.small_button("-").clicked() {
                session.step_field(kind, false, widget);
            }
        });
    });
}
