#![warn(clippy::all, rust_2018_idioms)]

use collage_canvas::{CollageApp, CollageConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CollageConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Falling back to default configuration: {}", err);
        CollageConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(CollageApp::new(cc, &config)))),
    )
}
