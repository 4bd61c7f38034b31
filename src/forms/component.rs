use crate::forms::form::{FormFields, FormState, NumberField, optional_text};
use crate::models::component::{
    Component, ComponentPayload, ComponentStatus, Condition, UsageLevel, usage_level,
    usage_percent,
};

pub type ComponentForm = FormState<ComponentFields>;

#[derive(Debug, Clone, Default)]
pub struct ComponentFields {
    pub machine_id: String,
    pub name: String,
    pub part_number: String,
    pub condition: Condition,
    pub status: ComponentStatus,
    pub lifespan_hours: NumberField,
    pub current_hours: NumberField,
    pub notes: String,
}

impl ComponentFields {
    /// Defaults for a new component under the given machine.
    pub fn for_machine(machine_id: impl Into<String>) -> Self {
        Self {
            machine_id: machine_id.into(),
            ..Default::default()
        }
    }

    pub fn from_component(component: &Component) -> Self {
        Self {
            machine_id: component.machine_id.clone(),
            name: component.name.clone(),
            part_number: component.part_number.clone(),
            condition: component.condition,
            status: component.status,
            lifespan_hours: NumberField::from_value(component.lifespan_hours),
            current_hours: NumberField::from_value(component.current_hours),
            notes: component.notes.clone().unwrap_or_default(),
        }
    }

    /// Live usage readout from the current (possibly empty) number inputs;
    /// hidden while no lifespan is entered.
    pub fn usage_preview(&self) -> Option<(u32, UsageLevel)> {
        let percent = usage_percent(self.current_hours.value(), self.lifespan_hours.value())?;
        Some((percent, usage_level(percent)))
    }
}

impl FormFields for ComponentFields {
    type Payload = ComponentPayload;

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.part_number.trim().is_empty() {
            return Err("Name and Part Number are required".to_string());
        }
        Ok(())
    }

    fn payload(&self) -> ComponentPayload {
        ComponentPayload {
            machine_id: self.machine_id.clone(),
            name: self.name.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            condition: self.condition,
            status: self.status,
            lifespan_hours: self.lifespan_hours.value(),
            current_hours: self.current_hours.value(),
            notes: optional_text(&self.notes),
        }
    }
}

pub fn create_component_form(machine_id: impl Into<String>) -> ComponentForm {
    FormState::create(ComponentFields::for_machine(machine_id))
}

pub fn edit_component_form(component: &Component) -> ComponentForm {
    FormState::edit(
        component.id.clone(),
        ComponentFields::from_component(component),
    )
}
