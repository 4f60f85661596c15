//! Blocking notification for rejected submissions

use eframe::egui::{self, Color32, Id, RichText};
use fleet_app::FleetSession;

pub fn show(ctx: &egui::Context, session: &mut FleetSession) {
    let Some(notice) = session.notice().cloned() else {
        return;
    };

    let mut acknowledged = false;
    egui::Modal::new(Id::new("form_notice")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading(RichText::new(&notice.message).color(Color32::YELLOW));
        ui.add_space(6.0);
        ui.label(notice.error.to_string());
        ui.add_space(10.0);
        if ui.button("OK").clicked() {
            acknowledged = true;
        }
    });

    if acknowledged {
        session.take_notice();
    }
}
