//! Loading and scaling the widget image.

use std::path::Path;

use eframe::egui;
use image::{imageops::FilterType, DynamicImage, ImageReader};
use sunshine_core::WidgetState;

/// The decoded image, scaled for the current window size.
///
/// Reloaded only when the path or window size changes, so applying the same
/// configuration again does not touch the disk.
#[derive(Default)]
pub struct WidgetImage {
    key: Option<(String, (u32, u32))>,
    texture: Option<egui::TextureHandle>,
}

impl WidgetImage {
    /// Reload if the configured path or window size changed.
    pub fn sync(&mut self, widget: &WidgetState, ctx: &egui::Context) {
        let config = widget.config();
        let key = (config.image_path.clone(), config.window_size());
        if self.key.as_ref() == Some(&key) {
            return;
        }

        self.texture = match load_scaled(Path::new(&key.0), widget, ctx) {
            Ok(Some(texture)) => Some(texture),
            Ok(None) => {
                tracing::warn!(path = %key.0, "No room for image at this window size");
                None
            }
            Err(e) => {
                tracing::warn!(path = %key.0, error = %e, "Failed to load image");
                None
            }
        };
        self.key = Some(key);
    }

    /// The scaled texture, or `None` when the placeholder should be shown.
    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}

/// Decode `path` and scale it to the widget's target size.
fn load_scaled(
    path: &Path,
    widget: &WidgetState,
    ctx: &egui::Context,
) -> anyhow::Result<Option<egui::TextureHandle>> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;

    let Some((width, height)) = widget.image_target((img.width(), img.height())) else {
        return Ok(None);
    };
    let scaled = img.resize_exact(width, height, FilterType::Triangle);

    tracing::debug!(path = %path.display(), width, height, "Loaded image");
    Ok(Some(create_texture(ctx, &scaled, &path.to_string_lossy())))
}

/// Create an egui texture from an image
fn create_texture(ctx: &egui::Context, img: &DynamicImage, name: &str) -> egui::TextureHandle {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();

    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);

    ctx.load_texture(
        format!("widget-image-{}", name),
        color_image,
        egui::TextureOptions::LINEAR,
    )
}
