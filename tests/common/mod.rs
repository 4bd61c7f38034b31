//! Fixture records and in-memory fake stores shared by the integration
//! suites. The fakes count every endpoint call so tests can assert that
//! validation failures and declined confirmations never reach the network.

// Each test binary compiles its own copy; not every suite uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use cmms_console::forms::form::RecordEndpoint;
use cmms_console::models::component::{Component, ComponentPayload};
use cmms_console::models::machine::{Machine, MachinePayload, MachineStatus};
use cmms_console::models::report::DashboardStats;
use cmms_console::models::work_order::{WorkOrder, WorkOrderPayload, WorkOrderStatus};
use cmms_console::services::api_client::ApiError;
use cmms_console::services::components::ComponentStore;
use cmms_console::services::machines::MachineStore;
use cmms_console::services::reports::ReportStore;
use cmms_console::services::work_orders::WorkOrderStore;

pub fn machine(id: &str, name: &str, status: MachineStatus) -> Machine {
    Machine {
        id: id.to_string(),
        name: name.to_string(),
        model: "HX-2000".to_string(),
        serial_number: format!("SN-{}", id),
        location: Some("Bay 3".to_string()),
        installation_date: None,
        status,
    }
}

pub fn machine_installed(id: &str, name: &str, date: &str) -> Machine {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(NaiveTime::MIN)
        .and_utc();
    Machine {
        installation_date: Some(date),
        ..machine(id, name, MachineStatus::Operational)
    }
}

pub fn component(id: &str, machine_id: &str, name: &str) -> Component {
    Component {
        id: id.to_string(),
        machine_id: machine_id.to_string(),
        name: name.to_string(),
        part_number: format!("PN-{}", id),
        condition: Default::default(),
        status: Default::default(),
        lifespan_hours: 0.0,
        current_hours: 0.0,
        notes: None,
    }
}

pub fn work_order(id: &str, order_number: &str, machine_id: &str) -> WorkOrder {
    WorkOrder {
        id: id.to_string(),
        order_number: order_number.to_string(),
        machine_id: machine_id.to_string(),
        component_id: None,
        title: "Replace worn bearing".to_string(),
        description: None,
        priority: Default::default(),
        kind: Default::default(),
        status: WorkOrderStatus::Pending,
        assigned_to: None,
        estimated_hours: 0.0,
        scheduled_date: None,
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Api {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.to_string(),
    }
}

/// Call counters shared by all fakes.
#[derive(Default)]
pub struct Calls {
    pub list: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl Calls {
    pub fn writes(&self) -> usize {
        self.create.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct FakeMachineStore {
    pub records: Mutex<Vec<Machine>>,
    pub calls: Calls,
    /// When set, every call fails with this message.
    pub fail_with: Mutex<Option<String>>,
}

impl FakeMachineStore {
    pub fn with(records: Vec<Machine>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.fail_with.lock().unwrap().as_deref() {
            Some(message) => Err(server_error(message)),
            None => Ok(()),
        }
    }
}

fn apply_machine(machine: &mut Machine, payload: &MachinePayload) {
    machine.name = payload.name.clone();
    machine.model = payload.model.clone();
    machine.serial_number = payload.serial_number.clone();
    machine.location = payload.location.clone();
    machine.installation_date = payload.installation_date;
    machine.status = payload.status;
}

#[async_trait]
impl MachineStore for FakeMachineStore {
    async fn list(&self) -> Result<Vec<Machine>, ApiError> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Machine, ApiError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: StatusCode::NOT_FOUND,
                message: "Machine not found".to_string(),
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.records.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}

#[async_trait]
impl RecordEndpoint for FakeMachineStore {
    type Payload = MachinePayload;

    async fn create(&self, payload: &MachinePayload) -> Result<String, ApiError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let id = format!("m{}", records.len() + 1);
        let mut machine = machine(&id, "", MachineStatus::Operational);
        apply_machine(&mut machine, payload);
        records.push(machine);
        Ok(id)
    }

    async fn update(&self, id: &str, payload: &MachinePayload) -> Result<(), ApiError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let machine = records.iter_mut().find(|m| m.id == id).ok_or_else(|| {
            ApiError::Api {
                status: StatusCode::NOT_FOUND,
                message: "Machine not found".to_string(),
            }
        })?;
        apply_machine(machine, payload);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeComponentStore {
    pub records: Mutex<Vec<Component>>,
    pub calls: Calls,
    pub fail_with: Mutex<Option<String>>,
}

impl FakeComponentStore {
    pub fn with(records: Vec<Component>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.fail_with.lock().unwrap().as_deref() {
            Some(message) => Err(server_error(message)),
            None => Ok(()),
        }
    }
}

fn apply_component(component: &mut Component, payload: &ComponentPayload) {
    component.machine_id = payload.machine_id.clone();
    component.name = payload.name.clone();
    component.part_number = payload.part_number.clone();
    component.condition = payload.condition;
    component.status = payload.status;
    component.lifespan_hours = payload.lifespan_hours;
    component.current_hours = payload.current_hours;
    component.notes = payload.notes.clone();
}

#[async_trait]
impl ComponentStore for FakeComponentStore {
    async fn list_for_machine(&self, machine_id: &str) -> Result<Vec<Component>, ApiError> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.machine_id == machine_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.records.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl RecordEndpoint for FakeComponentStore {
    type Payload = ComponentPayload;

    async fn create(&self, payload: &ComponentPayload) -> Result<String, ApiError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let id = format!("c{}", records.len() + 1);
        let mut new = component(&id, "", "");
        apply_component(&mut new, payload);
        records.push(new);
        Ok(id)
    }

    async fn update(&self, id: &str, payload: &ComponentPayload) -> Result<(), ApiError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let component = records.iter_mut().find(|c| c.id == id).ok_or_else(|| {
            ApiError::Api {
                status: StatusCode::NOT_FOUND,
                message: "Component not found".to_string(),
            }
        })?;
        apply_component(component, payload);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeWorkOrderStore {
    pub records: Mutex<Vec<WorkOrder>>,
    pub calls: Calls,
    pub status_calls: AtomicUsize,
    pub fail_with: Mutex<Option<String>>,
}

impl FakeWorkOrderStore {
    pub fn with(records: Vec<WorkOrder>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.fail_with.lock().unwrap().as_deref() {
            Some(message) => Err(server_error(message)),
            None => Ok(()),
        }
    }
}

fn apply_work_order(order: &mut WorkOrder, payload: &WorkOrderPayload) {
    order.order_number = payload.order_number.clone();
    order.machine_id = payload.machine_id.clone();
    order.component_id = payload.component_id.clone();
    order.title = payload.title.clone();
    order.description = payload.description.clone();
    order.priority = payload.priority;
    order.kind = payload.kind;
    order.status = payload.status;
    order.assigned_to = payload.assigned_to.clone();
    order.estimated_hours = payload.estimated_hours;
    order.scheduled_date = payload.scheduled_date;
}

#[async_trait]
impl WorkOrderStore for FakeWorkOrderStore {
    async fn list(&self) -> Result<Vec<WorkOrder>, ApiError> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn set_status(&self, id: &str, status: WorkOrderStatus) -> Result<(), ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let order = records.iter_mut().find(|wo| wo.id == id).ok_or_else(|| {
            ApiError::Api {
                status: StatusCode::NOT_FOUND,
                message: "Work order not found".to_string(),
            }
        })?;
        order.status = status;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.records.lock().unwrap().retain(|wo| wo.id != id);
        Ok(())
    }
}

#[async_trait]
impl RecordEndpoint for FakeWorkOrderStore {
    type Payload = WorkOrderPayload;

    async fn create(&self, payload: &WorkOrderPayload) -> Result<String, ApiError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let id = format!("wo{}", records.len() + 1);
        let mut new = work_order(&id, "", "");
        apply_work_order(&mut new, payload);
        records.push(new);
        Ok(id)
    }

    async fn update(&self, id: &str, payload: &WorkOrderPayload) -> Result<(), ApiError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let order = records.iter_mut().find(|wo| wo.id == id).ok_or_else(|| {
            ApiError::Api {
                status: StatusCode::NOT_FOUND,
                message: "Work order not found".to_string(),
            }
        })?;
        apply_work_order(order, payload);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeReportStore {
    pub stats: DashboardStats,
    pub fail_with: Mutex<Option<String>>,
}

impl FakeReportStore {
    pub fn with(stats: DashboardStats) -> Self {
        Self {
            stats,
            fail_with: Mutex::new(None),
        }
    }

    pub fn fail(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl ReportStore for FakeReportStore {
    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        match self.fail_with.lock().unwrap().as_deref() {
            Some(message) => Err(server_error(message)),
            None => Ok(self.stats),
        }
    }
}

/// Scripted confirmation prompt.
pub struct Confirm(pub bool);

impl cmms_console::pages::common::ConfirmPrompt for Confirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// In-memory export sink capturing the written file.
#[derive(Default)]
pub struct MemorySink {
    pub saved: Option<(String, String)>,
}

impl cmms_console::services::export::ExportSink for MemorySink {
    fn save(&mut self, filename: &str, contents: &str) -> std::io::Result<()> {
        self.saved = Some((filename.to_string(), contents.to_string()));
        Ok(())
    }
}
