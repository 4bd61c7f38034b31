use serde::{Deserialize, Serialize};

/// A machine component. `lifespan_hours == 0` means the part has no tracked
/// lifespan and no usage figure is defined for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "_id")]
    pub id: String,
    pub machine_id: String,
    pub name: String,
    pub part_number: String,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub status: ComponentStatus,
    #[serde(default)]
    pub lifespan_hours: f64,
    #[serde(default)]
    pub current_hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentPayload {
    pub machine_id: String,
    pub name: String,
    pub part_number: String,
    pub condition: Condition,
    pub status: ComponentStatus,
    pub lifespan_hours: f64,
    pub current_hours: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Good,
    Fair,
    Poor,
    Critical,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
        Condition::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
            Condition::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    #[default]
    Active,
    Inactive,
    Replaced,
}

impl ComponentStatus {
    pub const ALL: [ComponentStatus; 3] = [
        ComponentStatus::Active,
        ComponentStatus::Inactive,
        ComponentStatus::Replaced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComponentStatus::Active => "Active",
            ComponentStatus::Inactive => "Inactive",
            ComponentStatus::Replaced => "Replaced",
        }
    }
}

/// Color band for a usage figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Nominal,
    Warning,
    Critical,
}

/// Usage of a lifespan-tracked part, clamped so a part run past its lifespan
/// reads 100%.
pub fn usage_percent(current_hours: f64, lifespan_hours: f64) -> Option<u32> {
    if lifespan_hours > 0.0 {
        let ratio = (current_hours / lifespan_hours).min(1.0).max(0.0);
        Some((ratio * 100.0).round() as u32)
    } else {
        None
    }
}

pub fn usage_level(percent: u32) -> UsageLevel {
    if percent > 90 {
        UsageLevel::Critical
    } else if percent > 70 {
        UsageLevel::Warning
    } else {
        UsageLevel::Nominal
    }
}

impl Component {
    pub fn usage_percent(&self) -> Option<u32> {
        usage_percent(self.current_hours, self.lifespan_hours)
    }

    pub fn usage_level(&self) -> Option<UsageLevel> {
        self.usage_percent().map(usage_level)
    }
}
