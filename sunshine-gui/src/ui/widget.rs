//! The floating widget: image, quote and control bar.

use eframe::egui::{self, Color32, RichText, Rounding, Sense, Stroke, Vec2};

use sunshine_core::{ButtonStyle, Point, TextKey};

use crate::app::SunshineApp;
use crate::ui::colors;

/// Height of the button row.
const CONTROL_BAR_HEIGHT: f32 = 50.0;

/// Height of the image area when the placeholder is shown.
const PLACEHOLDER_HEIGHT: f32 = 75.0;

/// Quotes wrap at this width.
const QUOTE_WRAP_WIDTH: f32 = 200.0;

/// Configured font sizes are in points.
const POINTS_TO_PIXELS: f32 = 4.0 / 3.0;

/// Largest size the quote is drawn at. The stored font size has no upper
/// bound, but the font atlas cannot hold arbitrarily large glyphs.
const MAX_QUOTE_FONT_PX: f32 = 96.0;

/// Render the widget.
pub fn render(app: &mut SunshineApp, ctx: &egui::Context) {
    let palette = colors::for_theme(app.widget.config().theme);
    let enabled = !app.is_modal_open();
    let frame = egui::Frame::none()
        .fill(palette.background)
        .inner_margin(egui::Margin::same(5.0));

    // Control bar
    egui::TopBottomPanel::bottom("control_bar")
        .exact_height(CONTROL_BAR_HEIGHT)
        .show_separator_line(false)
        .frame(frame)
        .show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| render_controls(app, ui, ctx, &palette));
        });

    // Image and quote
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                let response = render_image(app, ui, &palette);
                handle_drag(app, &response, ctx);

                ui.add_space(10.0);
                let response = render_quote(app, ui, &palette);
                handle_drag(app, &response, ctx);
            });
        });
    });
}

fn render_image(app: &SunshineApp, ui: &mut egui::Ui, palette: &colors::Palette) -> egui::Response {
    match app.image.texture() {
        Some(texture) => {
            let size = Vec2::new(texture.size()[0] as f32, texture.size()[1] as f32);
            ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(size)
                    .sense(Sense::drag()),
            )
        }
        None => {
            let width = ui.available_width();
            ui.allocate_ui(Vec2::new(width, PLACEHOLDER_HEIGHT), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new(app.widget.text(TextKey::ImageUnavailable))
                                .color(palette.warning),
                        )
                        .selectable(false)
                        .sense(Sense::drag()),
                    )
                })
                .inner
            })
            .inner
        }
    }
}

fn render_quote(app: &SunshineApp, ui: &mut egui::Ui, palette: &colors::Palette) -> egui::Response {
    let width = ui.available_width().min(QUOTE_WRAP_WIDTH);
    let height = ui.available_height();

    ui.allocate_ui(Vec2::new(width, height), |ui| {
        ui.centered_and_justified(|ui| {
            ui.add(quote_label(app.widget.quote(), app.widget.config().font_size, palette.info))
        })
        .inner
    })
    .inner
}

/// Pixel size of the quote text for a configured point size.
fn quote_font_px(font_size: u32) -> f32 {
    (font_size as f32 * POINTS_TO_PIXELS).min(MAX_QUOTE_FONT_PX)
}

fn quote_label(quote: &str, font_size: u32, color: Color32) -> egui::Label {
    egui::Label::new(RichText::new(quote).size(quote_font_px(font_size)).color(color))
        .wrap()
        .selectable(false)
        .sense(Sense::drag())
}

fn render_controls(app: &mut SunshineApp, ui: &mut egui::Ui, ctx: &egui::Context, palette: &colors::Palette) {
    ui.horizontal_centered(|ui| {
        let toggle = outline_button(app.widget.toggle_label(), app.widget.toggle_style(), palette);
        if ui.add(toggle).clicked() {
            app.toggle_topmost();
        }

        let close = outline_button(app.widget.text(TextKey::Close), ButtonStyle::Danger, palette);
        if ui.add(close).clicked() {
            app.close(ctx);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let settings = outline_button(app.widget.text(TextKey::Settings), ButtonStyle::Secondary, palette);
            if ui.add(settings).clicked() {
                app.open_settings();
            }
        });
    });
}

fn outline_button(label: &str, style: ButtonStyle, palette: &colors::Palette) -> egui::Button<'static> {
    let color = colors::button(palette, style);
    egui::Button::new(RichText::new(label.to_string()).color(color))
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, color))
        .rounding(Rounding::same(4.0))
}

/// Move the window while the image or quote is dragged.
fn handle_drag(app: &mut SunshineApp, response: &egui::Response, ctx: &egui::Context) {
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.widget.drag_mut().press(Point::new(pos.x, pos.y));
        }
    }

    if response.dragged() {
        let pointer = response.interact_pointer_pos();
        let outer = ctx.input(|i| i.viewport().outer_rect);
        if let (Some(pointer), Some(outer)) = (pointer, outer) {
            let origin = Point::new(outer.min.x, outer.min.y);
            if let Some(next) = app.widget.drag().move_to(origin, Point::new(pointer.x, pointer.y)) {
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(next.x, next.y)));
            }
        }
    }

    if response.drag_stopped() {
        app.widget.drag_mut().release();
    }
}
