//! Sunshine GUI Application
//!
//! A small always-on-top widget showing an image and a rotating quote.

mod app;
mod ui;

use eframe::egui;
use sunshine_core::{ConfigStore, TextKey};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sunshine=debug".parse().unwrap())
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Sunshine v{}", sunshine_core::VERSION);

    // The window is sized from the config, so it must be loaded before
    // eframe::run_native() creates it.
    let store = ConfigStore::new();
    let config = store.load();
    tracing::info!(theme = %config.theme, language = %config.language, "Config loaded");

    // Create tokio runtime for the file picker
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    // Borderless, pinned, centered on screen
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top()
            .with_title(config.language.text(TextKey::Title)),
        renderer: eframe::Renderer::Glow,
        centered: true,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sunshine",
        options,
        Box::new(|cc| Ok(Box::new(app::SunshineApp::new(cc, runtime, store, config)))),
    )
}
