//! Cargo registration, assignment to vehicles and cargo table

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use fleet_app::{AssignmentForm, CargoForm, FleetSession};

pub struct CargoPanel {
    form: CargoForm,
    assignment: AssignmentForm,
    status_message: Option<String>,
}

impl CargoPanel {
    pub fn new() -> Self {
        Self {
            form: CargoForm::default(),
            assignment: AssignmentForm::default(),
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.heading("Cargo");
        ui.add_space(10.0);

        ui.label(RichText::new("Register cargo").strong());
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label("Description:");
            ui.add(egui::TextEdit::singleline(&mut self.form.description).desired_width(260.0));
            if ui.button("Save cargo").clicked() {
                self.status_message = session
                    .register_cargo(&mut self.form)
                    .ok()
                    .map(|i| format!("Cargo #{} registered", i));
            }
        });

        ui.add_space(10.0);
        self.render_assign_form(ui, session);

        if let Some(ref msg) = self.status_message {
            ui.add_space(5.0);
            ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        render_cargo_table(ui, session);
    }

    fn render_assign_form(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.label(RichText::new("Assign to vehicle").strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            let pending: Vec<(usize, String)> = session
                .store()
                .cargo()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_pending())
                .map(|(i, c)| (i, format!("#{} {}", i, c.description)))
                .collect();

            let selected = pending
                .iter()
                .find(|(i, _)| i.to_string() == self.assignment.cargo_index)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| "Select cargo...".to_string());
            egui::ComboBox::from_id_salt("assign-cargo")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (i, label) in &pending {
                        ui.selectable_value(&mut self.assignment.cargo_index, i.to_string(), label.as_str());
                    }
                });

            let plate_text = if self.assignment.plate.is_empty() {
                "Select vehicle...".to_string()
            } else {
                self.assignment.plate.clone()
            };
            egui::ComboBox::from_id_salt("assign-vehicle")
                .selected_text(plate_text)
                .show_ui(ui, |ui| {
                    for v in session.store().vehicles() {
                        ui.selectable_value(
                            &mut self.assignment.plate,
                            v.plate.clone(),
                            format!("{} ({})", v.plate, v.vehicle_type),
                        );
                    }
                });

            if ui.button("Assign").clicked() {
                self.status_message = session
                    .assign_cargo(&mut self.assignment)
                    .ok()
                    .map(|_| "Cargo assigned".to_string());
            }
        });
    }
}

fn render_cargo_table(ui: &mut Ui, session: &FleetSession) {
    let cargo = session.store().cargo();
    if cargo.is_empty() {
        ui.label(RichText::new("No cargo registered.").italics());
        return;
    }

    ui.push_id("cargo_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::exact(40.0))
            .column(Column::auto().at_least(200.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["#", "Description", "Vehicle"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for (i, c) in cargo.iter().enumerate() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(i.to_string());
                        });
                        row.col(|ui| {
                            ui.label(c.description.as_str());
                        });
                        row.col(|ui| match &c.vehicle {
                            Some(plate) => {
                                ui.label(plate.as_str());
                            }
                            None => {
                                ui.label(RichText::new("Pending").color(Color32::YELLOW));
                            }
                        });
                    });
                }
            });
    });
}
