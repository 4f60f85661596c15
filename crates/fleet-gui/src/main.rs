//! GUI entry point for Fleet Manager

mod app;
mod cargo_panel;
mod dashboard_panel;
mod driver_panel;
mod notice;
mod route_panel;
mod vehicle_panel;

use app::FleetApp;
use eframe::egui;
use fleet_app::logging::{init_logging, Verbosity};

fn main() -> eframe::Result<()> {
    init_logging(Verbosity::Normal);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fleet Manager",
        options,
        Box::new(|cc| Ok(Box::new(FleetApp::new(cc)))),
    )
}
