// src/lib.rs

use services::api_client::ApiClient;
use services::components::ComponentService;
use services::machines::MachineService;
use services::reports::ReportService;
use services::work_orders::WorkOrderService;

/// Shared handles for everything that talks to the CMMS API.
#[derive(Clone)]
pub struct AppState {
    pub machines: MachineService,
    pub components: ComponentService,
    pub work_orders: WorkOrderService,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            machines: MachineService::new(api.clone()),
            components: ComponentService::new(api.clone()),
            work_orders: WorkOrderService::new(api.clone()),
            reports: ReportService::new(api),
        }
    }
}

pub mod models {
    pub mod component;
    pub mod machine;
    pub mod report;
    pub mod work_order;
}

pub mod services {
    pub mod api_client;
    pub mod components;
    pub mod export;
    pub mod machines;
    pub mod reports;
    pub mod work_orders;
}

pub mod forms {
    pub mod component;
    pub mod form;
    pub mod machine;
    pub mod work_order;
}

pub mod pages {
    pub mod common;
    pub mod components;
    pub mod dashboard;
    pub mod machine_detail;
    pub mod machines;
    pub mod work_orders;
}

pub mod view;
