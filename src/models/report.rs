use serde::{Deserialize, Serialize};

/// Aggregate counts computed server-side for the dashboard. The client only
/// formats these; it never derives them locally.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_machines: u64,
    #[serde(default)]
    pub active_work_orders: u64,
    #[serde(default)]
    pub upcoming_maintenance: u64,
    #[serde(default)]
    pub low_stock_items: u64,
    #[serde(default)]
    pub critical_components: u64,
    #[serde(default)]
    pub overdue_compliance: u64,
}
