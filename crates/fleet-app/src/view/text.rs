//! Plain-text tables for terminal output

use fleet_domain::service::DashboardStats;
use fleet_domain::{Cargo, Driver, Route, Vehicle};

fn rule(width: usize) -> String {
    "-".repeat(width)
}

pub fn vehicles_table(vehicles: &[&Vehicle], capacity_unit: &str) -> String {
    if vehicles.is_empty() {
        return "No vehicles registered.\n".to_string();
    }
    let capacity_header = format!("Capacity ({})", capacity_unit);
    let mut out = format!(
        "{:<10} {:<14} {:>14} {:<12}\n{}\n",
        "Type",
        "Plate",
        capacity_header,
        "Status",
        rule(53)
    );
    for v in vehicles {
        out.push_str(&format!(
            "{:<10} {:<14} {:>14} {:<12}\n",
            v.vehicle_type, v.plate, v.capacity, v.status
        ));
    }
    out
}

pub fn drivers_table(drivers: &[Driver]) -> String {
    if drivers.is_empty() {
        return "No drivers registered.\n".to_string();
    }
    let mut out = format!("{:<24} {:<12} {:>5}\n{}\n", "Name", "License", "Trips", rule(43));
    for d in drivers {
        out.push_str(&format!("{:<24} {:<12} {:>5}\n", d.name, d.license, d.trip_count()));
    }
    out
}

pub fn cargo_table(cargo: &[Cargo]) -> String {
    if cargo.is_empty() {
        return "No cargo registered.\n".to_string();
    }
    let mut out = format!("{:>3} {:<30} {:<14}\n{}\n", "#", "Description", "Vehicle", rule(49));
    for (i, c) in cargo.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} {:<30} {:<14}\n",
            i,
            c.description,
            c.vehicle.as_deref().unwrap_or("(pending)")
        ));
    }
    out
}

pub fn routes_table(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes registered.\n".to_string();
    }
    let mut out = format!("{:<24} {:<24}\n{}\n", "Origin", "Destination", rule(49));
    for r in routes {
        out.push_str(&format!("{:<24} {:<24}\n", r.origin, r.destination));
    }
    out
}

pub fn dashboard_summary(stats: &DashboardStats) -> String {
    format!(
        "Dashboard\n=========\nAvailable vehicles:  {}\nVehicles in transit: {}\nActive drivers:      {}\nPending cargo:       {}\n",
        stats.available_vehicles, stats.in_transit_vehicles, stats.active_drivers, stats.pending_cargo
    )
}
