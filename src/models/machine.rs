use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A machine as the server returns it. Identifiers are assigned server-side,
/// so a deserialized machine always carries one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub installation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: MachineStatus,
}

/// Body of a machine create/update call. No identifier: the server owns it.
#[derive(Debug, Clone, Serialize)]
pub struct MachinePayload {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub location: Option<String>,
    pub installation_date: Option<DateTime<Utc>>,
    pub status: MachineStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    #[default]
    Operational,
    Maintenance,
    Broken,
}

impl MachineStatus {
    pub const ALL: [MachineStatus; 3] = [
        MachineStatus::Operational,
        MachineStatus::Maintenance,
        MachineStatus::Broken,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "Operational",
            MachineStatus::Maintenance => "Under Maintenance",
            MachineStatus::Broken => "Broken",
        }
    }

    /// Wire form, also used for filter round-trips and CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "operational",
            MachineStatus::Maintenance => "maintenance",
            MachineStatus::Broken => "broken",
        }
    }
}

/// Summary counts shown above the machines list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MachineStats {
    pub total: usize,
    pub operational: usize,
    pub maintenance: usize,
    pub broken: usize,
}

impl MachineStats {
    pub fn tally(machines: &[Machine]) -> Self {
        let mut stats = MachineStats {
            total: machines.len(),
            ..Default::default()
        };
        for machine in machines {
            match machine.status {
                MachineStatus::Operational => stats.operational += 1,
                MachineStatus::Maintenance => stats.maintenance += 1,
                MachineStatus::Broken => stats.broken += 1,
            }
        }
        stats
    }
}
