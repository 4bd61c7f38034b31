use crate::forms::component::{ComponentForm, create_component_form, edit_component_form};
use crate::models::component::Component;
use crate::models::machine::Machine;
use crate::pages::common::{ActionOutcome, ConfirmPrompt, LoadState};
use crate::services::components::ComponentStore;
use crate::services::machines::MachineStore;

/// One machine plus its components; hosts the component add/edit form.
#[derive(Default)]
pub struct MachineDetailPage {
    machine: Option<Machine>,
    components: Vec<Component>,
    state: LoadState,
    form: Option<ComponentForm>,
}

impl MachineDetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn machine(&self) -> Option<&Machine> {
        self.machine.as_ref()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub async fn load<M, C>(&mut self, machine_id: &str, machines: &M, components: &C)
    where
        M: MachineStore,
        C: ComponentStore,
    {
        self.state = LoadState::Loading;
        match tokio::try_join!(
            machines.get(machine_id),
            components.list_for_machine(machine_id)
        ) {
            Ok((machine, components)) => {
                self.machine = Some(machine);
                self.components = components;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                tracing::error!("Error loading machine: {}", err);
                self.state = LoadState::Error(err.to_string());
            }
        }
    }

    pub fn form(&self) -> Option<&ComponentForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ComponentForm> {
        self.form.as_mut()
    }

    /// Add is only reachable once the machine is loaded; the new component
    /// is preassigned to it.
    pub fn open_add(&mut self) {
        if let Some(machine) = &self.machine {
            self.form = Some(create_component_form(machine.id.clone()));
        }
    }

    pub fn open_edit(&mut self, component: &Component) {
        self.form = Some(edit_component_form(component));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub async fn submit_form<M, C>(&mut self, machines: &M, components: &C) -> bool
    where
        M: MachineStore,
        C: ComponentStore,
    {
        let Some(machine_id) = self.machine.as_ref().map(|m| m.id.clone()) else {
            return false;
        };
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if form.submit(components).await {
            self.form = None;
            self.load(&machine_id, machines, components).await;
            true
        } else {
            false
        }
    }

    pub async fn delete_component<M, C>(
        &mut self,
        component: &Component,
        confirm: &dyn ConfirmPrompt,
        machines: &M,
        components: &C,
    ) -> ActionOutcome
    where
        M: MachineStore,
        C: ComponentStore,
    {
        let Some(machine_id) = self.machine.as_ref().map(|m| m.id.clone()) else {
            return ActionOutcome::Declined;
        };
        let message = format!("Delete component \"{}\"?", component.name);
        if !confirm.confirm(&message) {
            return ActionOutcome::Declined;
        }
        match components.delete(&component.id).await {
            Ok(()) => {
                self.load(&machine_id, machines, components).await;
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::error!("Error deleting component: {}", err);
                ActionOutcome::Failed(err.to_string())
            }
        }
    }
}
