use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_number: String,
    pub machine_id: String,
    #[serde(default)]
    pub component_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "type", default)]
    pub kind: WorkOrderType,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkOrderPayload {
    pub order_number: String,
    pub machine_id: String,
    pub component_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: WorkOrderType,
    pub status: WorkOrderStatus,
    pub assigned_to: Option<String>,
    pub estimated_hours: f64,
    pub scheduled_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderType {
    #[default]
    Corrective,
    Preventive,
    Predictive,
}

impl WorkOrderType {
    pub const ALL: [WorkOrderType; 3] = [
        WorkOrderType::Corrective,
        WorkOrderType::Preventive,
        WorkOrderType::Predictive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderType::Corrective => "Corrective",
            WorkOrderType::Preventive => "Preventive",
            WorkOrderType::Predictive => "Predictive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Pending,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "Pending",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::Completed => "Completed",
            WorkOrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The one-click transition offered on the list row, if any:
    /// pending -> in_progress -> completed.
    pub fn next_shortcut(&self) -> Option<WorkOrderStatus> {
        match self {
            WorkOrderStatus::Pending => Some(WorkOrderStatus::InProgress),
            WorkOrderStatus::InProgress => Some(WorkOrderStatus::Completed),
            WorkOrderStatus::Completed | WorkOrderStatus::Cancelled => None,
        }
    }
}

/// Summary counts shown above the work order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkOrderStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub critical: usize,
}

impl WorkOrderStats {
    pub fn tally(orders: &[WorkOrder]) -> Self {
        let mut stats = WorkOrderStats {
            total: orders.len(),
            ..Default::default()
        };
        for order in orders {
            match order.status {
                WorkOrderStatus::Pending => stats.pending += 1,
                WorkOrderStatus::InProgress => stats.in_progress += 1,
                WorkOrderStatus::Completed => stats.completed += 1,
                WorkOrderStatus::Cancelled => {}
            }
            if order.priority == Priority::Critical {
                stats.critical += 1;
            }
        }
        stats
    }
}
