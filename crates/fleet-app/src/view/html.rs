//! HTML rendering of the tracked lists
//!
//! Each function renders one view fragment. [`render_page`] assembles the
//! whole document from the fragments held by a session.

use fleet_domain::service::{DashboardStats, VehicleFilter};
use fleet_domain::{Cargo, Driver, Route, Vehicle, VehicleStatus};

use crate::navigation::ViewId;
use crate::session::FleetSession;

/// Escape text for embedding in element content or attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn empty_state(message: &str) -> String {
    format!("<p class=\"empty-state\">{}</p>", message)
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = String::from("<table>\n  <tr>");
    for header in headers {
        out.push_str(&format!("<th>{}</th>", header));
    }
    out.push_str("</tr>\n");
    for row in rows {
        out.push_str("  <tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");
    out
}

/// Vehicle table; `vehicles` is the already filtered slice
pub fn render_vehicles(vehicles: &[&Vehicle], capacity_unit: &str) -> String {
    if vehicles.is_empty() {
        return empty_state("No vehicles registered.");
    }

    let capacity_header = format!("Capacity ({})", escape(capacity_unit));
    let rows = vehicles
        .iter()
        .map(|v| {
            vec![
                escape(&v.vehicle_type),
                escape(&v.plate),
                v.capacity.to_string(),
                format!(
                    "<span class=\"badge {}\">{}</span>",
                    v.status.badge_class(),
                    v.status.label()
                ),
            ]
        })
        .collect();
    table(&["Type", "Plate", capacity_header.as_str(), "Status"], rows)
}

pub fn render_drivers(drivers: &[Driver]) -> String {
    if drivers.is_empty() {
        return empty_state("No drivers registered.");
    }
    let rows = drivers
        .iter()
        .map(|d| vec![escape(&d.name), escape(&d.license), d.trip_count().to_string()])
        .collect();
    table(&["Name", "License", "Trips"], rows)
}

/// Cargo table; the first column is the list position used for assignment
pub fn render_cargo(cargo: &[Cargo]) -> String {
    if cargo.is_empty() {
        return empty_state("No cargo registered.");
    }
    let rows = cargo
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let vehicle = match &c.vehicle {
                Some(plate) => escape(plate),
                None => "<span class=\"badge badge-pending\">Pending</span>".to_string(),
            };
            vec![i.to_string(), escape(&c.description), vehicle]
        })
        .collect();
    table(&["#", "Description", "Vehicle"], rows)
}

/// Cargo that has a vehicle assigned
pub fn render_assignments(cargo: &[Cargo]) -> String {
    let rows: Vec<Vec<String>> = cargo
        .iter()
        .filter_map(|c| {
            c.vehicle
                .as_ref()
                .map(|plate| vec![escape(&c.description), escape(plate)])
        })
        .collect();
    if rows.is_empty() {
        return empty_state("No cargo assigned.");
    }
    table(&["Cargo", "Vehicle"], rows)
}

pub fn render_routes(routes: &[Route]) -> String {
    if routes.is_empty() {
        return empty_state("No routes registered.");
    }
    let rows = routes
        .iter()
        .map(|r| vec![escape(&r.origin), escape(&r.destination)])
        .collect();
    table(&["Origin", "Destination"], rows)
}

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let cards = [
        ("stat-available-vehicles", "Available vehicles", stats.available_vehicles),
        ("stat-in-transit-vehicles", "Vehicles in transit", stats.in_transit_vehicles),
        ("stat-active-drivers", "Active drivers", stats.active_drivers),
        ("stat-pending-cargo", "Pending cargo", stats.pending_cargo),
    ];
    let mut out = String::from("<div class=\"stats\">\n");
    for (id, label, value) in cards {
        out.push_str(&format!(
            "  <div class=\"stat-card\"><span class=\"stat-label\">{}</span><span class=\"stat-value\" id=\"{}\">{}</span></div>\n",
            label, id, value
        ));
    }
    out.push_str("</div>");
    out
}

fn select_options(options: &[(String, String)], selected: Option<&str>) -> String {
    let mut out = String::from("<option value=\"\">All</option>");
    for (value, label) in options {
        let attr = if Some(value.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape(value),
            attr,
            escape(label)
        ));
    }
    out
}

fn render_filters(filter: &VehicleFilter, vehicle_types: &[String]) -> String {
    let types: Vec<(String, String)> = vehicle_types
        .iter()
        .map(|t| (t.clone(), t.clone()))
        .collect();
    let statuses: Vec<(String, String)> = VehicleStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect();
    format!(
        "<div class=\"filters\">\n  <select id=\"filter-type\">{}</select>\n  <select id=\"filter-status\">{}</select>\n</div>",
        select_options(&types, filter.vehicle_type.as_deref()),
        select_options(&statuses, filter.status.map(|s| s.label())),
    )
}

/// Whole document: navigation, dashboard and every view section
pub fn render_page(session: &FleetSession) -> String {
    let views = session.views();
    let navigation = session.navigation();

    let mut nav = String::from("<nav>\n");
    for view in ViewId::ALL {
        let active = if navigation.is_active(view) { " active" } else { "" };
        nav.push_str(&format!(
            "  <a class=\"nav-item{}\" data-view=\"{}\">{}</a>\n",
            active,
            view.id(),
            view.label()
        ));
    }
    nav.push_str("</nav>");

    let sections = ViewId::ALL
        .iter()
        .map(|view| {
            let body = match view {
                ViewId::Vehicles => format!(
                    "{}\n<div id=\"vehicle-list\">{}</div>",
                    render_filters(session.filter(), session.vehicle_types()),
                    views.vehicles
                ),
                ViewId::Drivers => format!("<div id=\"driver-list\">{}</div>", views.drivers),
                ViewId::Cargo => format!(
                    "<div id=\"cargo-list\">{}</div>\n<div id=\"assignment-list\">{}</div>",
                    views.cargo, views.assignments
                ),
                ViewId::Routes => format!("<div id=\"route-list\">{}</div>", views.routes),
                ViewId::Dashboard => views.dashboard_html.clone(),
            };
            let active = if navigation.is_active(*view) { " active" } else { "" };
            format!(
                "<section class=\"view{}\" id=\"{}\">\n<h2>{}</h2>\n{}\n</section>",
                active,
                view.id(),
                view.label(),
                body
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Fleet Manager</title>\n</head>\n<body>\n{}\n<main>\n{}\n</main>\n</body>\n</html>\n",
        nav, sections
    )
}
