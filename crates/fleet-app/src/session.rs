//! Fleet session: application state plus the views derived from it
//!
//! Every mutation runs synchronously inside one call: validate, mutate,
//! re-render. A rejected submission leaves the store untouched and raises a
//! blocking [`Notice`].

use fleet_domain::service::{DashboardStats, VehicleFilter};
use fleet_domain::{Vehicle, VehicleStatus};
use fleet_store::{Entity, FleetStore};
use fleet_types::FormError;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::form::{
    register_item, AssignmentForm, CargoForm, DriverForm, EntryForm, RouteForm, VehicleForm,
};
use crate::navigation::{Navigation, ViewId};
use crate::view::html;

/// Blocking notification raised by a rejected submission
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Short message for the user
    pub message: String,
    pub error: FormError,
}

impl From<&FormError> for Notice {
    fn from(error: &FormError) -> Self {
        Self {
            message: error.notice(),
            error: error.clone(),
        }
    }
}

/// Rendered fragments of every view, regenerated after each mutation
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderedViews {
    pub vehicles: String,
    pub drivers: String,
    pub cargo: String,
    pub assignments: String,
    pub routes: String,
    pub dashboard_html: String,
    pub dashboard: DashboardStats,
}

pub struct FleetSession {
    store: FleetStore,
    vehicle_types: Vec<String>,
    capacity_unit: String,
    filter: VehicleFilter,
    navigation: Navigation,
    views: RenderedViews,
    notice: Option<Notice>,
}

impl FleetSession {
    /// Create an empty session and render the initial views
    pub fn new(config: &Config) -> Self {
        let mut session = Self {
            store: FleetStore::new(),
            vehicle_types: config.vehicle_types.clone(),
            capacity_unit: config.capacity_unit.clone(),
            filter: VehicleFilter::new(),
            navigation: Navigation::new(config.default_view),
            views: RenderedViews::default(),
            notice: None,
        };
        session.update_all();
        session
    }

    pub fn store(&self) -> &FleetStore {
        &self.store
    }

    pub fn views(&self) -> &RenderedViews {
        &self.views
    }

    pub fn filter(&self) -> &VehicleFilter {
        &self.filter
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn current_view(&self) -> ViewId {
        self.navigation.current()
    }

    pub fn vehicle_types(&self) -> &[String] {
        &self.vehicle_types
    }

    pub fn capacity_unit(&self) -> &str {
        &self.capacity_unit
    }

    /// Pending blocking notification, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Acknowledge the pending notification
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Vehicles passing the current filter, in list order
    pub fn filtered_vehicles(&self) -> Vec<&Vehicle> {
        self.filter.apply(self.store.vehicles())
    }

    fn register<F: EntryForm>(&mut self, form: &mut F) -> Result<usize, FormError> {
        let kind = <F::Entry as Entity>::KIND;
        match register_item(form, &mut self.store, &self.vehicle_types) {
            Ok(index) => {
                info!(kind, index, "registered");
                self.notice = None;
                self.update_all();
                Ok(index)
            }
            Err(e) => Err(self.reject(kind, e)),
        }
    }

    fn reject(&mut self, kind: &'static str, error: FormError) -> FormError {
        warn!(kind, error = %error, "submission rejected");
        self.notice = Some(Notice::from(&error));
        error
    }

    pub fn register_vehicle(&mut self, form: &mut VehicleForm) -> Result<usize, FormError> {
        self.register(form)
    }

    pub fn register_driver(&mut self, form: &mut DriverForm) -> Result<usize, FormError> {
        self.register(form)
    }

    pub fn register_cargo(&mut self, form: &mut CargoForm) -> Result<usize, FormError> {
        self.register(form)
    }

    pub fn register_route(&mut self, form: &mut RouteForm) -> Result<usize, FormError> {
        self.register(form)
    }

    /// Assign pending cargo to a registered vehicle, then re-render everything
    pub fn assign_cargo(&mut self, form: &mut AssignmentForm) -> Result<(), FormError> {
        let result = form
            .parse_index()
            .and_then(|index| self.store.assign_cargo(index, &form.plate));
        match result {
            Ok(()) => {
                info!(cargo = %form.cargo_index.trim(), plate = %form.plate.trim(), "cargo assigned");
                form.clear();
                self.notice = None;
                self.update_all();
                Ok(())
            }
            Err(e) => Err(self.reject("assignment", e)),
        }
    }

    /// Set the type filter; an empty value removes it
    pub fn set_type_filter(&mut self, vehicle_type: &str) {
        let status = self.filter.status;
        self.filter = VehicleFilter::new().by_type(vehicle_type).by_status(status);
        self.render_vehicles();
    }

    pub fn set_status_filter(&mut self, status: Option<VehicleStatus>) {
        self.filter.status = status;
        self.render_vehicles();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.render_vehicles();
    }

    pub fn change_view(&mut self, view: ViewId) {
        debug!(view = %view, "view changed");
        self.navigation.change_view(view);
    }

    fn render_vehicles(&mut self) {
        let vehicles = self.filter.apply(self.store.vehicles());
        self.views.vehicles = html::render_vehicles(&vehicles, &self.capacity_unit);
    }

    /// Re-render every view from the current state
    pub fn update_all(&mut self) {
        self.render_vehicles();
        self.views.drivers = html::render_drivers(self.store.drivers());
        self.views.cargo = html::render_cargo(self.store.cargo());
        self.views.assignments = html::render_assignments(self.store.cargo());
        self.views.routes = html::render_routes(self.store.routes());
        self.views.dashboard = DashboardStats::compute(
            self.store.vehicles(),
            self.store.drivers(),
            self.store.cargo(),
        );
        self.views.dashboard_html = html::render_dashboard(&self.views.dashboard);
        debug!(
            vehicles = self.store.vehicles().len(),
            drivers = self.store.drivers().len(),
            cargo = self.store.cargo().len(),
            routes = self.store.routes().len(),
            "views re-rendered"
        );
    }

    /// The complete HTML document for the current state
    pub fn render_page(&self) -> String {
        html::render_page(self)
    }
}

impl Default for FleetSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_renders_empty_states() {
        let session = FleetSession::default();
        assert!(session.views().vehicles.contains("No vehicles registered."));
        assert!(session.views().drivers.contains("No drivers registered."));
        assert_eq!(session.views().dashboard, DashboardStats::default());
        assert_eq!(session.current_view(), ViewId::Vehicles);
    }

    #[test]
    fn test_rejection_sets_notice_and_success_clears_it() {
        let mut session = FleetSession::default();
        let mut form = DriverForm::default();
        assert!(session.register_driver(&mut form).is_err());
        assert_eq!(
            session.notice().map(|n| n.message.as_str()),
            Some("Complete all fields")
        );

        form.name = "Ana".to_string();
        form.license = "B".to_string();
        session.register_driver(&mut form).unwrap();
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_take_notice_acknowledges() {
        let mut session = FleetSession::default();
        let _ = session.register_cargo(&mut CargoForm::default());
        assert!(session.take_notice().is_some());
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_assign_cargo_updates_dashboard() {
        let mut session = FleetSession::default();
        session
            .register_vehicle(&mut VehicleForm {
                vehicle_type: "Truck".to_string(),
                plate: "ABC123".to_string(),
                capacity: "5".to_string(),
                status: "Available".to_string(),
            })
            .unwrap();
        session
            .register_cargo(&mut CargoForm {
                description: "Pallets".to_string(),
            })
            .unwrap();
        assert_eq!(session.views().dashboard.pending_cargo, 1);

        let mut assignment = AssignmentForm {
            cargo_index: "0".to_string(),
            plate: "ABC123".to_string(),
        };
        session.assign_cargo(&mut assignment).unwrap();
        assert_eq!(session.views().dashboard.pending_cargo, 0);
        assert!(session.views().assignments.contains("<td>Pallets</td><td>ABC123</td>"));
        assert_eq!(assignment, AssignmentForm::default());
    }

    #[test]
    fn test_failed_assignment_keeps_form() {
        let mut session = FleetSession::default();
        let mut assignment = AssignmentForm {
            cargo_index: "0".to_string(),
            plate: "NOPE".to_string(),
        };
        let err = session.assign_cargo(&mut assignment).unwrap_err();
        assert_eq!(err, FormError::UnknownVehicle("NOPE".to_string()));
        assert_eq!(assignment.plate, "NOPE");
        assert!(session.notice().is_some());
    }

    #[test]
    fn test_change_view_reflected_in_page() {
        let mut session = FleetSession::default();
        session.change_view(ViewId::Dashboard);
        let page = session.render_page();
        assert!(page.contains("<a class=\"nav-item active\" data-view=\"dashboard\">"));
        assert!(page.contains("<section class=\"view active\" id=\"dashboard\">"));
        assert!(page.contains("<section class=\"view\" id=\"vehicles\">"));
    }
}
