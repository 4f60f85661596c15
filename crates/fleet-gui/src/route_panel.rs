//! Route registration form and route table

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use fleet_app::{FleetSession, RouteForm};

pub struct RoutePanel {
    form: RouteForm,
    status_message: Option<String>,
}

impl RoutePanel {
    pub fn new() -> Self {
        Self {
            form: RouteForm::default(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.heading("Routes");
        ui.add_space(10.0);

        ui.label(RichText::new("Register route").strong());
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label("Origin:");
            ui.add(egui::TextEdit::singleline(&mut self.form.origin).desired_width(160.0));
            ui.label("Destination:");
            ui.add(egui::TextEdit::singleline(&mut self.form.destination).desired_width(160.0));
            if ui.button("Save route").clicked() {
                self.status_message = session
                    .register_route(&mut self.form)
                    .ok()
                    .map(|_| "Route registered".to_string());
            }
        });
        if let Some(ref msg) = self.status_message {
            ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        let routes = session.store().routes();
        if routes.is_empty() {
            ui.label(RichText::new("No routes registered.").italics());
            return;
        }

        ui.push_id("route_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(160.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Origin", "Destination"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for r in routes {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(r.origin.as_str());
                            });
                            row.col(|ui| {
                                ui.label(r.destination.as_str());
                            });
                        });
                    }
                });
        });
    }
}
