use crate::forms::form::{
    FormFields, FormState, NumberField, RecordEndpoint, date_input_value, optional_text,
    parse_date_input,
};
use crate::models::component::Component;
use crate::models::work_order::{
    Priority, WorkOrder, WorkOrderPayload, WorkOrderStatus, WorkOrderType,
};
use crate::services::components::ComponentStore;

#[derive(Debug, Clone, Default)]
pub struct WorkOrderFields {
    pub order_number: String,
    pub machine_id: String,
    /// Empty means no component selected.
    pub component_id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub kind: WorkOrderType,
    pub status: WorkOrderStatus,
    pub assigned_to: String,
    pub estimated_hours: NumberField,
    pub scheduled_date: String,
}

impl WorkOrderFields {
    pub fn from_work_order(order: &WorkOrder) -> Self {
        Self {
            order_number: order.order_number.clone(),
            machine_id: order.machine_id.clone(),
            component_id: order.component_id.clone().unwrap_or_default(),
            title: order.title.clone(),
            description: order.description.clone().unwrap_or_default(),
            priority: order.priority,
            kind: order.kind,
            status: order.status,
            assigned_to: order.assigned_to.clone().unwrap_or_default(),
            estimated_hours: NumberField::from_value(order.estimated_hours),
            scheduled_date: date_input_value(order.scheduled_date),
        }
    }
}

impl FormFields for WorkOrderFields {
    type Payload = WorkOrderPayload;

    fn validate(&self) -> Result<(), String> {
        if self.order_number.trim().is_empty()
            || self.title.trim().is_empty()
            || self.machine_id.trim().is_empty()
        {
            return Err("Order number, title, and machine are required".to_string());
        }
        Ok(())
    }

    fn payload(&self) -> WorkOrderPayload {
        WorkOrderPayload {
            order_number: self.order_number.trim().to_string(),
            machine_id: self.machine_id.clone(),
            component_id: optional_text(&self.component_id),
            title: self.title.trim().to_string(),
            description: optional_text(&self.description),
            priority: self.priority,
            kind: self.kind,
            status: self.status,
            assigned_to: optional_text(&self.assigned_to),
            estimated_hours: self.estimated_hours.value(),
            scheduled_date: parse_date_input(&self.scheduled_date),
        }
    }
}

/// The work order form plus the dependent component dropdown, whose options
/// follow the selected machine.
#[derive(Debug, Clone)]
pub struct WorkOrderForm {
    pub state: FormState<WorkOrderFields>,
    component_options: Vec<Component>,
}

impl WorkOrderForm {
    pub fn create() -> Self {
        Self {
            state: FormState::create(WorkOrderFields::default()),
            component_options: Vec::new(),
        }
    }

    pub fn edit(order: &WorkOrder) -> Self {
        Self {
            state: FormState::edit(order.id.clone(), WorkOrderFields::from_work_order(order)),
            component_options: Vec::new(),
        }
    }

    pub fn component_options(&self) -> &[Component] {
        &self.component_options
    }

    /// Populate the component dropdown for the currently selected machine.
    /// A failed load leaves the options empty; the form stays usable.
    pub async fn load_component_options<C: ComponentStore>(&mut self, components: &C) {
        let machine_id = self.state.fields.machine_id.clone();
        if machine_id.is_empty() {
            self.component_options.clear();
            return;
        }
        match components.list_for_machine(&machine_id).await {
            Ok(options) => self.component_options = options,
            Err(err) => {
                tracing::warn!("Error loading components: {}", err);
                self.component_options.clear();
            }
        }
    }

    /// Change the selected machine. The previous machine's component options
    /// are discarded and the selected component is cleared; a component from
    /// one machine never rides along to another.
    pub async fn select_machine<C: ComponentStore>(
        &mut self,
        machine_id: impl Into<String>,
        components: &C,
    ) {
        let machine_id = machine_id.into();
        if machine_id == self.state.fields.machine_id {
            return;
        }
        self.state.fields.machine_id = machine_id;
        self.state.fields.component_id.clear();
        self.state.clear_error();
        self.load_component_options(components).await;
    }

    pub async fn submit<E>(&mut self, endpoint: &E) -> bool
    where
        E: RecordEndpoint<Payload = WorkOrderPayload>,
    {
        self.state.submit(endpoint).await
    }
}
