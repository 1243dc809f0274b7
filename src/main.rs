mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SalescopeApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::AppConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salescope – Sales Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalescopeApp::new(config)))),
    )
}
