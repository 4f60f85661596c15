//! Output formatting module

use std::io::Write;

use fleet_app::view::text;
use fleet_app::{FleetSession, ViewId};
use fleet_types::{OutputFormat, Result};

/// Write one view of the session in the requested format
pub fn output_view<W: Write>(
    out: &mut W,
    session: &FleetSession,
    view: ViewId,
    format: OutputFormat,
) -> Result<()> {
    let store = session.store();

    if format == OutputFormat::Json {
        let content = match view {
            ViewId::Vehicles => serde_json::to_string_pretty(&session.filtered_vehicles())?,
            ViewId::Drivers => serde_json::to_string_pretty(store.drivers())?,
            ViewId::Cargo => serde_json::to_string_pretty(store.cargo())?,
            ViewId::Routes => serde_json::to_string_pretty(store.routes())?,
            ViewId::Dashboard => serde_json::to_string_pretty(&session.views().dashboard)?,
        };
        writeln!(out, "{}", content)?;
        return Ok(());
    }

    let content = match view {
        ViewId::Vehicles => {
            let mut table = text::vehicles_table(&session.filtered_vehicles(), session.capacity_unit());
            if !session.filter().is_empty() {
                table.push_str(&format!(
                    "(filter: type={}, status={})\n",
                    session.filter().vehicle_type.as_deref().unwrap_or("*"),
                    session
                        .filter()
                        .status
                        .map(|s| s.label())
                        .unwrap_or("*")
                ));
            }
            table
        }
        ViewId::Drivers => text::drivers_table(store.drivers()),
        ViewId::Cargo => text::cargo_table(store.cargo()),
        ViewId::Routes => text::routes_table(store.routes()),
        ViewId::Dashboard => text::dashboard_summary(&session.views().dashboard),
    };
    write!(out, "{}", content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_app::VehicleForm;

    fn session_with_truck() -> FleetSession {
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
    }

    #[test]
    fn test_json_vehicles() {
        let session = session_with_truck();
        let mut buf = Vec::new();
        output_view(&mut buf, &session, ViewId::Vehicles, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["plate"], "ABC123");
        assert_eq!(value[0]["status"], "Available");
    }

    #[test]
    fn test_json_dashboard() {
        let session = session_with_truck();
        let mut buf = Vec::new();
        output_view(&mut buf, &session, ViewId::Dashboard, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["available_vehicles"], 1);
    }

    #[test]
    fn test_table_shows_active_filter() {
        let mut session = session_with_truck();
        session.set_type_filter("Truck");
        let mut buf = Vec::new();
        output_view(&mut buf, &session, ViewId::Vehicles, OutputFormat::Table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("ABC123"));
        assert!(text.contains("(filter: type=Truck, status=*)"));
    }
}
