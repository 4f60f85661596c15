//! Main application structure with view navigation

use eframe::egui::{self, Color32, RichText};
use fleet_app::{Config, FleetSession, ViewId};
use tracing::{error, info, warn};

use crate::cargo_panel::CargoPanel;
use crate::dashboard_panel;
use crate::driver_panel::DriverPanel;
use crate::notice;
use crate::route_panel::RoutePanel;
use crate::vehicle_panel::VehiclePanel;

/// Main application state
pub struct FleetApp {
    session: FleetSession,
    vehicle_panel: VehiclePanel,
    driver_panel: DriverPanel,
    cargo_panel: CargoPanel,
    route_panel: RoutePanel,
    /// Result of the last export (message, is_error)
    export_status: Option<(String, bool)>,
}

impl FleetApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "using default configuration");
            Config::default()
        });

        Self {
            session: FleetSession::new(&config),
            vehicle_panel: VehiclePanel::new(),
            driver_panel: DriverPanel::new(),
            cargo_panel: CargoPanel::new(),
            route_panel: RoutePanel::new(),
            export_status: None,
        }
    }

    fn render_nav_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for view in ViewId::ALL {
                let selected = self.session.current_view() == view;
                if ui.selectable_label(selected, view.label()).clicked() {
                    self.session.change_view(view);
                }
                ui.add_space(8.0);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Export HTML...").clicked() {
                    self.export_page();
                }
                if let Some((ref msg, is_error)) = self.export_status {
                    let color = if is_error {
                        Color32::LIGHT_RED
                    } else {
                        Color32::LIGHT_GREEN
                    };
                    ui.label(RichText::new(msg).color(color));
                }
            });
        });
    }

    fn export_page(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html", "htm"])
            .set_file_name("fleet.html")
            .save_file()
        else {
            return;
        };

        match std::fs::write(&path, self.session.render_page()) {
            Ok(()) => {
                info!(path = %path.display(), "page exported");
                self.export_status = Some((format!("Exported to {}", path.display()), false));
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "export failed");
                self.export_status = Some((format!("Export failed: {}", e), true));
            }
        }
    }
}

impl eframe::App for FleetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_nav_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.session.current_view() {
                ViewId::Vehicles => self.vehicle_panel.ui(ui, &mut self.session),
                ViewId::Drivers => self.driver_panel.ui(ui, &mut self.session),
                ViewId::Cargo => self.cargo_panel.ui(ui, &mut self.session),
                ViewId::Routes => self.route_panel.ui(ui, &mut self.session),
                ViewId::Dashboard => dashboard_panel::ui(ui, &self.session),
            });
        });

        // Rejected submissions block the UI until acknowledged
        notice::show(ctx, &mut self.session);
    }
}
