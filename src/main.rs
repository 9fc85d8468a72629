mod analysis;
mod app;
mod data;
mod state;
mod ui;

use app::DistalyzerApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Distalyzer")
            .with_inner_size([980.0, 1040.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Distalyzer",
        options,
        Box::new(|cc| Ok(Box::new(DistalyzerApp::new(cc)))),
    )
}
