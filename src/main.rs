#![windows_subsystem = "windows"]

use eframe::egui;
use log::error;

mod api;
mod app;
mod geometry;
mod models;
mod overlay;
mod ui;
mod utils;

use app::InspectionApp;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("PCB Perfect"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "PCB Perfect",
        options,
        Box::new(|_cc| Ok(Box::new(InspectionApp::default()))),
    ) {
        error!("error running native application: {e}");
    }
}
