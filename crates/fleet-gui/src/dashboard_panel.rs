//! Dashboard counters

use eframe::egui::{self, Color32, RichText, Ui};
use fleet_app::FleetSession;

pub fn ui(ui: &mut Ui, session: &FleetSession) {
    ui.heading("Dashboard");
    ui.add_space(10.0);

    let stats = session.views().dashboard;
    let cards = [
        ("Available vehicles", stats.available_vehicles, Color32::LIGHT_GREEN),
        ("Vehicles in transit", stats.in_transit_vehicles, Color32::LIGHT_BLUE),
        ("Active drivers", stats.active_drivers, Color32::WHITE),
        ("Pending cargo", stats.pending_cargo, Color32::YELLOW),
    ];

    ui.horizontal_wrapped(|ui| {
        for (label, value, color) in cards {
            egui::Frame::new()
                .fill(Color32::from_gray(30))
                .inner_margin(12.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_min_width(160.0);
                    ui.vertical(|ui| {
                        ui.label(label);
                        ui.label(RichText::new(value.to_string()).size(28.0).color(color).strong());
                    });
                });
            ui.add_space(8.0);
        }
    });
}
