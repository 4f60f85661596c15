//! Vehicle registration form, filters and vehicle table

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use fleet_app::{FleetSession, VehicleForm};
use fleet_domain::VehicleStatus;

/// Badge colour for a vehicle status
fn status_color(status: VehicleStatus) -> Color32 {
    match status {
        VehicleStatus::Available => Color32::LIGHT_GREEN,
        VehicleStatus::InTransit => Color32::LIGHT_BLUE,
        VehicleStatus::Maintenance => Color32::from_rgb(255, 170, 80),
    }
}

pub struct VehiclePanel {
    form: VehicleForm,
    /// Status message of the last successful registration
    status_message: Option<String>,
}

impl VehiclePanel {
    pub fn new() -> Self {
        Self {
            form: VehicleForm::default(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.heading("Vehicles");
        ui.add_space(10.0);

        self.render_add_form(ui, session);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        render_filters(ui, session);
        ui.add_space(8.0);
        render_vehicle_table(ui, session);
    }

    fn render_add_form(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.label(RichText::new("Register vehicle").strong());
        ui.add_space(5.0);

        egui::Grid::new("add_vehicle_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Type:");
                let selected = if self.form.vehicle_type.is_empty() {
                    "Select...".to_string()
                } else {
                    self.form.vehicle_type.clone()
                };
                egui::ComboBox::from_id_salt("vehicle-type")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for vehicle_type in session.vehicle_types() {
                            ui.selectable_value(
                                &mut self.form.vehicle_type,
                                vehicle_type.clone(),
                                vehicle_type.as_str(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Plate:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.plate)
                        .hint_text("e.g. ABC123")
                        .desired_width(200.0),
                );
                ui.end_row();

                ui.label("Capacity:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.capacity)
                            .hint_text("e.g. 5.0")
                            .desired_width(80.0),
                    );
                    ui.label(session.capacity_unit());
                });
                ui.end_row();

                ui.label("Status:");
                let selected = if self.form.status.is_empty() {
                    "Select...".to_string()
                } else {
                    self.form.status.clone()
                };
                egui::ComboBox::from_id_salt("vehicle-status")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for status in VehicleStatus::ALL {
                            ui.selectable_value(
                                &mut self.form.status,
                                status.label().to_string(),
                                status.label(),
                            );
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);

        if ui.button("Save vehicle").clicked() {
            self.status_message = match session.register_vehicle(&mut self.form) {
                Ok(_) => Some("Vehicle registered".to_string()),
                Err(_) => None,
            };
        }

        if let Some(ref msg) = self.status_message {
            ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
        }
    }
}

fn render_filters(ui: &mut Ui, session: &mut FleetSession) {
    let mut vehicle_type = session.filter().vehicle_type.clone().unwrap_or_default();
    let mut status = session.filter().status;

    ui.horizontal(|ui| {
        ui.label("Type:");
        egui::ComboBox::from_id_salt("filter-type")
            .selected_text(if vehicle_type.is_empty() { "All" } else { vehicle_type.as_str() }.to_string())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut vehicle_type, String::new(), "All");
                for t in session.vehicle_types() {
                    ui.selectable_value(&mut vehicle_type, t.clone(), t.as_str());
                }
            });

        ui.add_space(10.0);
        ui.label("Status:");
        egui::ComboBox::from_id_salt("filter-status")
            .selected_text(status.map(|s| s.label()).unwrap_or("All"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut status, None, "All");
                for s in VehicleStatus::ALL {
                    ui.selectable_value(&mut status, Some(s), s.label());
                }
            });
    });

    if session.filter().vehicle_type.as_deref().unwrap_or("") != vehicle_type {
        session.set_type_filter(&vehicle_type);
    }
    if session.filter().status != status {
        session.set_status_filter(status);
    }
}

fn render_vehicle_table(ui: &mut Ui, session: &FleetSession) {
    let vehicles = session.filtered_vehicles();
    if vehicles.is_empty() {
        ui.label(RichText::new("No vehicles registered.").italics());
        return;
    }

    let capacity_header = format!("Capacity ({})", session.capacity_unit());
    ui.push_id("vehicle_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(100.0), 3)
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["Type", "Plate", capacity_header.as_str(), "Status"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for v in &vehicles {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(v.vehicle_type.as_str());
                        });
                        row.col(|ui| {
                            ui.label(v.plate.as_str());
                        });
                        row.col(|ui| {
                            ui.label(v.capacity.to_string());
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(v.status.label()).color(status_color(v.status)));
                        });
                    });
                }
            });
    });
}
