use crate::forms::form::{FormFields, FormState, date_input_value, optional_text, parse_date_input};
use crate::models::machine::{Machine, MachinePayload, MachineStatus};

pub type MachineForm = FormState<MachineFields>;

#[derive(Debug, Clone, Default)]
pub struct MachineFields {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    /// `YYYY-MM-DD`, empty for unset.
    pub installation_date: String,
    pub status: MachineStatus,
}

impl MachineFields {
    pub fn from_machine(machine: &Machine) -> Self {
        Self {
            name: machine.name.clone(),
            model: machine.model.clone(),
            serial_number: machine.serial_number.clone(),
            location: machine.location.clone().unwrap_or_default(),
            installation_date: date_input_value(machine.installation_date),
            status: machine.status,
        }
    }
}

impl FormFields for MachineFields {
    type Payload = MachinePayload;

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.model.trim().is_empty()
            || self.serial_number.trim().is_empty()
        {
            return Err("Please fill in all required fields".to_string());
        }
        Ok(())
    }

    fn payload(&self) -> MachinePayload {
        MachinePayload {
            name: self.name.trim().to_string(),
            model: self.model.trim().to_string(),
            serial_number: self.serial_number.trim().to_string(),
            location: optional_text(&self.location),
            installation_date: parse_date_input(&self.installation_date),
            status: self.status,
        }
    }
}

pub fn create_machine_form() -> MachineForm {
    FormState::create(MachineFields::default())
}

pub fn edit_machine_form(machine: &Machine) -> MachineForm {
    FormState::edit(machine.id.clone(), MachineFields::from_machine(machine))
}
