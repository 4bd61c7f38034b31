use crate::forms::component::{ComponentForm, create_component_form, edit_component_form};
use crate::models::component::Component;
use crate::models::machine::Machine;
use crate::models::report::DashboardStats;
use crate::pages::common::{ActionOutcome, ConfirmPrompt, LoadState};
use crate::services::components::ComponentStore;
use crate::services::machines::MachineStore;
use crate::services::reports::ReportStore;

/// Components across all machines: dashboard stats and the machine list are
/// fetched jointly, then each machine's components are aggregated. A single
/// machine's failed component fetch is logged and skipped rather than
/// failing the page.
#[derive(Default)]
pub struct ComponentsPage {
    stats: DashboardStats,
    machines: Vec<Machine>,
    components: Vec<Component>,
    /// `None` shows components of every machine.
    pub machine_filter: Option<String>,
    state: LoadState,
    form: Option<ComponentForm>,
}

impl ComponentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub async fn load<R, M, C>(&mut self, reports: &R, machines: &M, components: &C)
    where
        R: ReportStore,
        M: MachineStore,
        C: ComponentStore,
    {
        self.state = LoadState::Loading;
        let (stats, machine_list) = match tokio::try_join!(reports.dashboard(), machines.list()) {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::error!("Error loading data: {}", err);
                self.state = LoadState::Error(err.to_string());
                return;
            }
        };

        let mut all_components = Vec::new();
        for machine in &machine_list {
            match components.list_for_machine(&machine.id).await {
                Ok(mut list) => all_components.append(&mut list),
                Err(err) => {
                    tracing::warn!("Error loading components for {}: {}", machine.name, err);
                }
            }
        }

        self.stats = stats;
        self.machines = machine_list;
        self.components = all_components;
        self.state = LoadState::Ready;
    }

    pub fn filtered(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| {
                self.machine_filter
                    .as_deref()
                    .is_none_or(|machine_id| c.machine_id == machine_id)
            })
            .collect()
    }

    pub fn form(&self) -> Option<&ComponentForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ComponentForm> {
        self.form.as_mut()
    }

    /// Add preselects the filtered machine when one is chosen.
    pub fn open_create(&mut self) {
        let machine_id = self.machine_filter.clone().unwrap_or_default();
        self.form = Some(create_component_form(machine_id));
    }

    pub fn open_edit(&mut self, component: &Component) {
        self.form = Some(edit_component_form(component));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub async fn submit_form<R, M, C>(&mut self, reports: &R, machines: &M, components: &C) -> bool
    where
        R: ReportStore,
        M: MachineStore,
        C: ComponentStore,
    {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if form.submit(components).await {
            self.form = None;
            self.load(reports, machines, components).await;
            true
        } else {
            false
        }
    }

    pub async fn delete<R, M, C>(
        &mut self,
        component: &Component,
        confirm: &dyn ConfirmPrompt,
        reports: &R,
        machines: &M,
        components: &C,
    ) -> ActionOutcome
    where
        R: ReportStore,
        M: MachineStore,
        C: ComponentStore,
    {
        let message = format!("Delete component \"{}\"?", component.name);
        if !confirm.confirm(&message) {
            return ActionOutcome::Declined;
        }
        match components.delete(&component.id).await {
            Ok(()) => {
                self.load(reports, machines, components).await;
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::error!("Error deleting component: {}", err);
                ActionOutcome::Failed(err.to_string())
            }
        }
    }
}
