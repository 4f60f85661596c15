//! Driver registration form and driver table

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use fleet_app::{DriverForm, FleetSession};

pub struct DriverPanel {
    form: DriverForm,
    status_message: Option<String>,
}

impl DriverPanel {
    pub fn new() -> Self {
        Self {
            form: DriverForm::default(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.heading("Drivers");
        ui.add_space(10.0);

        ui.label(RichText::new("Register driver").strong());
        ui.add_space(5.0);
        egui::Grid::new("add_driver_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut self.form.name).desired_width(200.0));
                ui.end_row();

                ui.label("License:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.license)
                        .hint_text("e.g. B, C, CE")
                        .desired_width(120.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button("Save driver").clicked() {
            self.status_message = session
                .register_driver(&mut self.form)
                .ok()
                .map(|_| "Driver registered".to_string());
        }
        if let Some(ref msg) = self.status_message {
            ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        let drivers = session.store().drivers();
        if drivers.is_empty() {
            ui.label(RichText::new("No drivers registered.").italics());
            return;
        }

        ui.push_id("driver_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().at_least(120.0), 2)
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Name", "License", "Trips"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for d in drivers {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(d.name.as_str());
                            });
                            row.col(|ui| {
                                ui.label(d.license.as_str());
                            });
                            row.col(|ui| {
                                ui.label(d.trip_count().to_string());
                            });
                        });
                    }
                });
        });
    }
}
