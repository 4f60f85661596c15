//! End-to-end behaviour of a fleet session: forms in, views out

use fleet_app::{CargoForm, Config, DriverForm, FleetSession, RouteForm, VehicleForm, ViewId};
use fleet_domain::VehicleStatus;
use fleet_types::FormError;

fn vehicle_form(vehicle_type: &str, plate: &str, capacity: &str, status: &str) -> VehicleForm {
    VehicleForm {
        vehicle_type: vehicle_type.to_string(),
        plate: plate.to_string(),
        capacity: capacity.to_string(),
        status: status.to_string(),
    }
}

fn driver_form(name: &str, license: &str) -> DriverForm {
    DriverForm {
        name: name.to_string(),
        license: license.to_string(),
    }
}

fn seeded_session() -> FleetSession {
    let mut session = FleetSession::new(&Config::default());
    for (t, plate, cap, status) in [
        ("Truck", "T-100", "10", "Available"),
        ("Van", "V-200", "1.5", "In-Transit"),
        ("Truck", "T-300", "8", "Maintenance"),
        ("Pickup", "P-400", "0.8", "Available"),
    ] {
        session
            .register_vehicle(&mut vehicle_form(t, plate, cap, status))
            .unwrap();
    }
    session
}

#[test]
fn test_empty_required_field_leaves_vehicles_unchanged() {
    let mut session = seeded_session();
    let before = session.store().vehicles().to_vec();

    for form in [
        vehicle_form("", "ABC123", "5", "Available"),
        vehicle_form("Truck", "", "5", "Available"),
        vehicle_form("Truck", "ABC123", "", "Available"),
        vehicle_form("Truck", "ABC123", "5", ""),
    ] {
        let mut form = form;
        let err = session.register_vehicle(&mut form).unwrap_err();
        assert!(matches!(err, FormError::MissingFields(_)));
        assert_eq!(session.store().vehicles(), before.as_slice());
        let notice = session.take_notice().expect("warning surfaced");
        assert_eq!(notice.message, "Complete all fields");
    }
}

#[test]
fn test_valid_vehicle_appends_one_and_clears_form() {
    let mut session = FleetSession::new(&Config::default());
    let mut form = vehicle_form("Truck", "ABC123", "5.0", "Available");

    session.register_vehicle(&mut form).unwrap();

    let vehicles = session.store().vehicles();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].vehicle_type, "Truck");
    assert_eq!(vehicles[0].plate, "ABC123");
    assert!((vehicles[0].capacity - 5.0).abs() < f64::EPSILON);
    assert_eq!(vehicles[0].status, VehicleStatus::Available);
    assert!(form.is_empty());
    assert!(session.views().vehicles.contains("<td>ABC123</td>"));
}

#[test]
fn test_duplicate_driver_rejected() {
    let mut session = FleetSession::new(&Config::default());
    session.register_driver(&mut driver_form("Ana", "B")).unwrap();

    let mut again = driver_form("Ana", "C");
    let err = session.register_driver(&mut again).unwrap_err();

    assert_eq!(err, FormError::DuplicateDriver("Ana".to_string()));
    assert_eq!(session.store().drivers().len(), 1);
    assert_eq!(session.store().drivers()[0].license, "B");
    assert_eq!(
        session.notice().map(|n| n.message.as_str()),
        Some("Driver already registered")
    );
}

#[test]
fn test_type_filter_restricts_and_clearing_restores() {
    let mut session = seeded_session();

    session.set_type_filter("Truck");
    let filtered = session.filtered_vehicles();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|v| v.vehicle_type == "Truck"));
    assert!(session.views().vehicles.contains("T-100"));
    assert!(session.views().vehicles.contains("T-300"));
    assert!(!session.views().vehicles.contains("V-200"));

    session.set_type_filter("");
    assert_eq!(session.filtered_vehicles().len(), 4);
    assert!(session.views().vehicles.contains("V-200"));
    assert!(session.views().vehicles.contains("P-400"));
}

#[test]
fn test_padded_type_filter_matches_trimmed_records() {
    let mut session = seeded_session();
    session.set_type_filter(" Truck ");
    assert_eq!(session.filtered_vehicles().len(), 2);
    assert!(session.views().vehicles.contains("T-300"));
    assert!(!session.views().vehicles.contains("P-400"));
}

#[test]
fn test_type_and_status_filters_are_independent() {
    let mut session = seeded_session();
    session.set_status_filter(Some(VehicleStatus::Available));
    session.set_type_filter("Truck");
    let plates: Vec<_> = session
        .filtered_vehicles()
        .iter()
        .map(|v| v.plate.clone())
        .collect();
    assert_eq!(plates, vec!["T-100"]);

    session.set_type_filter("");
    assert_eq!(session.filter().status, Some(VehicleStatus::Available));
    assert_eq!(session.filtered_vehicles().len(), 2);

    session.clear_filters();
    assert_eq!(session.filtered_vehicles().len(), 4);
}

#[test]
fn test_filter_with_no_match_shows_empty_state() {
    let mut session = seeded_session();
    session.set_type_filter("Trailer");
    assert!(session.views().vehicles.contains("No vehicles registered."));
}

#[test]
fn test_available_count_tracks_every_mutation() {
    let mut session = FleetSession::new(&Config::default());
    let submissions = [
        vehicle_form("Truck", "A", "5", "Available"),
        vehicle_form("Van", "B", "2", "Maintenance"),
        vehicle_form("Truck", "", "5", "Available"),
        vehicle_form("Pickup", "C", "1", "available"),
        vehicle_form("Van", "D", "abc", "Available"),
        vehicle_form("Truck", "E", "7", "In-Transit"),
    ];

    for form in submissions {
        let mut form = form;
        let _ = session.register_vehicle(&mut form);
        let expected = session
            .store()
            .vehicles()
            .iter()
            .filter(|v| v.status == VehicleStatus::Available)
            .count();
        assert_eq!(session.views().dashboard.available_vehicles, expected);
        assert!(session
            .views()
            .dashboard_html
            .contains(&format!("id=\"stat-available-vehicles\">{}<", expected)));
    }
    assert_eq!(session.views().dashboard.available_vehicles, 2);
    assert_eq!(session.views().dashboard.in_transit_vehicles, 1);
}

#[test]
fn test_filters_do_not_change_dashboard() {
    let mut session = seeded_session();
    session.set_type_filter("Van");
    assert_eq!(session.views().dashboard.available_vehicles, 2);
}

#[test]
fn test_default_view_comes_from_config() {
    let config = Config {
        default_view: ViewId::Drivers,
        ..Config::default()
    };
    let session = FleetSession::new(&config);
    assert_eq!(session.current_view(), ViewId::Drivers);
}

#[test]
fn test_configured_vehicle_types_gate_registration() {
    let mut config = Config::default();
    config.add_vehicle_type("Bus");
    let mut session = FleetSession::new(&config);
    assert!(session
        .register_vehicle(&mut vehicle_form("Bus", "BUS-1", "12", "Available"))
        .is_ok());
    assert!(session
        .register_vehicle(&mut vehicle_form("Tram", "TR-1", "12", "Available"))
        .is_err());
    assert_eq!(session.store().vehicles().len(), 1);
}

#[test]
fn test_registered_driver_appears_in_drivers_view() {
    let mut session = FleetSession::new(&Config::default());
    assert!(!session.views().drivers.contains("<td>Ana</td>"));

    session.register_driver(&mut driver_form("Ana", "B")).unwrap();
    assert!(session.views().drivers.contains("<td>Ana</td><td>B</td><td>0</td>"));
}

#[test]
fn test_registered_cargo_appears_in_cargo_view() {
    let mut session = FleetSession::new(&Config::default());
    let mut form = CargoForm {
        description: "Pallets".to_string(),
    };
    session.register_cargo(&mut form).unwrap();

    let cargo = &session.views().cargo;
    assert!(cargo.contains("<td>Pallets</td>"));
    assert!(cargo.contains("badge-pending"));
    assert_eq!(session.views().dashboard.pending_cargo, 1);
}

#[test]
fn test_registered_route_appears_in_routes_view() {
    let mut session = FleetSession::new(&Config::default());
    let mut form = RouteForm {
        origin: "Lima".to_string(),
        destination: "Cusco".to_string(),
    };
    session.register_route(&mut form).unwrap();
    assert!(session.views().routes.contains("<td>Lima</td><td>Cusco</td>"));
}
