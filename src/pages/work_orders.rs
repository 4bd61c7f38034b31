use crate::forms::work_order::WorkOrderForm;
use crate::models::machine::Machine;
use crate::models::work_order::{Priority, WorkOrder, WorkOrderStats, WorkOrderStatus};
use crate::pages::common::{ActionOutcome, ConfirmPrompt, LoadState, matches_search};
use crate::services::components::ComponentStore;
use crate::services::machines::MachineStore;
use crate::services::work_orders::WorkOrderStore;

/// The work orders list. Machines are fetched alongside the orders for the
/// form's dropdown and for showing machine names on rows.
#[derive(Default)]
pub struct WorkOrdersPage {
    work_orders: Vec<WorkOrder>,
    machines: Vec<Machine>,
    pub search: String,
    pub status_filter: Option<WorkOrderStatus>,
    pub priority_filter: Option<Priority>,
    state: LoadState,
    form: Option<WorkOrderForm>,
}

impl WorkOrdersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn work_orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Both collections are fetched concurrently and awaited jointly; a
    /// failure in either puts the whole page in the error state.
    pub async fn load<W, M>(&mut self, work_orders: &W, machines: &M)
    where
        W: WorkOrderStore,
        M: MachineStore,
    {
        self.state = LoadState::Loading;
        match tokio::try_join!(work_orders.list(), machines.list()) {
            Ok((orders, machines)) => {
                self.work_orders = orders;
                self.machines = machines;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                tracing::error!("Error loading data: {}", err);
                self.state = LoadState::Error(err.to_string());
            }
        }
    }

    pub fn filtered(&self) -> Vec<&WorkOrder> {
        self.work_orders
            .iter()
            .filter(|wo| {
                self.search.is_empty()
                    || matches_search(&self.search, &[&wo.order_number, &wo.title])
            })
            .filter(|wo| self.status_filter.is_none_or(|status| wo.status == status))
            .filter(|wo| {
                self.priority_filter
                    .is_none_or(|priority| wo.priority == priority)
            })
            .collect()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.status_filter.is_some() || self.priority_filter.is_some()
    }

    pub fn stats(&self) -> WorkOrderStats {
        WorkOrderStats::tally(&self.work_orders)
    }

    /// Row display join: the owning machine's name, if it still exists.
    pub fn machine_name(&self, machine_id: &str) -> Option<&str> {
        self.machines
            .iter()
            .find(|m| m.id == machine_id)
            .map(|m| m.name.as_str())
    }

    pub fn form(&self) -> Option<&WorkOrderForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut WorkOrderForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) {
        self.form = Some(WorkOrderForm::create());
    }

    /// Edit pre-populates every field and loads the component options for
    /// the order's machine.
    pub async fn open_edit<C: ComponentStore>(&mut self, order: &WorkOrder, components: &C) {
        let mut form = WorkOrderForm::edit(order);
        form.load_component_options(components).await;
        self.form = Some(form);
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub async fn submit_form<W, M>(&mut self, work_orders: &W, machines: &M) -> bool
    where
        W: WorkOrderStore,
        M: MachineStore,
    {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if form.submit(work_orders).await {
            self.form = None;
            self.load(work_orders, machines).await;
            true
        } else {
            false
        }
    }

    /// One-click pending -> in_progress -> completed transition via the
    /// partial status update, then reload. No-op for terminal statuses.
    pub async fn advance_status<W, M>(
        &mut self,
        order: &WorkOrder,
        work_orders: &W,
        machines: &M,
    ) -> ActionOutcome
    where
        W: WorkOrderStore,
        M: MachineStore,
    {
        let Some(next) = order.status.next_shortcut() else {
            return ActionOutcome::Declined;
        };
        match work_orders.set_status(&order.id, next).await {
            Ok(()) => {
                self.load(work_orders, machines).await;
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::error!("Error updating status: {}", err);
                ActionOutcome::Failed(err.to_string())
            }
        }
    }

    pub async fn delete<W, M>(
        &mut self,
        order: &WorkOrder,
        confirm: &dyn ConfirmPrompt,
        work_orders: &W,
        machines: &M,
    ) -> ActionOutcome
    where
        W: WorkOrderStore,
        M: MachineStore,
    {
        let message = format!("Delete work order \"{}\"?", order.order_number);
        if !confirm.confirm(&message) {
            return ActionOutcome::Declined;
        }
        match work_orders.delete(&order.id).await {
            Ok(()) => {
                self.load(work_orders, machines).await;
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::error!("Error deleting work order: {}", err);
                ActionOutcome::Failed(err.to_string())
            }
        }
    }
}
