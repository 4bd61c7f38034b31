//! Plain-text rendering for the terminal binary. Stateless; missing
//! optional fields render as a dash.

use crate::models::component::Component;
use crate::models::machine::{Machine, MachineStats};
use crate::models::report::DashboardStats;
use crate::models::work_order::{WorkOrder, WorkOrderStats};

pub fn dashboard(stats: &DashboardStats) -> String {
    let rows = [
        ("Total Machines", stats.total_machines),
        ("Active Work Orders", stats.active_work_orders),
        ("Upcoming Maintenance (7d)", stats.upcoming_maintenance),
        ("Low Stock Items", stats.low_stock_items),
        ("Critical Components", stats.critical_components),
        ("Overdue Compliance", stats.overdue_compliance),
    ];
    let mut out = String::from("Dashboard\n");
    for (label, value) in rows {
        out.push_str(&format!("  {:<28} {}\n", label, value));
    }
    out
}

pub fn machine_card(machine: &Machine) -> String {
    let installed = machine
        .installation_date
        .map(|d| d.format("%Y-%m-%d").to_string());
    format!(
        "{} [{}]\n  Model: {}  SN: {}\n  Location: {}  Installed: {}\n",
        machine.name,
        machine.status.label(),
        machine.model,
        machine.serial_number,
        dash(machine.location.as_deref()),
        dash(installed.as_deref()),
    )
}

pub fn machine_summary(stats: &MachineStats) -> String {
    format!(
        "Total: {}  Operational: {}  Maintenance: {}  Broken: {}\n",
        stats.total, stats.operational, stats.maintenance, stats.broken
    )
}

pub fn component_card(component: &Component) -> String {
    let usage = component
        .usage_percent()
        .map(|p| format!("  Usage: {}%", p))
        .unwrap_or_default();
    format!(
        "{} (PN: {})\n  Condition: {}  Status: {}{}\n",
        component.name,
        component.part_number,
        component.condition.label(),
        component.status.label(),
        usage,
    )
}

pub fn work_order_row(order: &WorkOrder, machine_name: Option<&str>) -> String {
    format!(
        "{} [{} | {}] {}\n  Machine: {}  Assigned: {}  Est: {}h\n",
        order.order_number,
        order.priority.label(),
        order.status.label(),
        order.title,
        dash(machine_name),
        dash(order.assigned_to.as_deref()),
        order.estimated_hours,
    )
}

pub fn work_order_summary(stats: &WorkOrderStats) -> String {
    format!(
        "Total: {}  Pending: {}  In Progress: {}  Completed: {}  Critical: {}\n",
        stats.total, stats.pending, stats.in_progress, stats.completed, stats.critical
    )
}

/// Shown instead of cards when the filtered list is empty; the hint depends
/// on whether any filter is active.
pub fn empty_state(noun: &str, filters_active: bool) -> String {
    let hint = if filters_active {
        "Try adjusting your filters"
    } else {
        "Add one to get started"
    };
    format!("No {} found\n  {}\n", noun, hint)
}

fn dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}
