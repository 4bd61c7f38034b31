use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::forms::form::RecordEndpoint;
use crate::models::work_order::{WorkOrder, WorkOrderPayload, WorkOrderStatus};
use crate::services::api_client::{Acknowledged, ApiClient, ApiError};

#[async_trait]
pub trait WorkOrderStore: RecordEndpoint<Payload = WorkOrderPayload> {
    async fn list(&self) -> Result<Vec<WorkOrder>, ApiError>;
    /// Partial update used by the list-row status shortcut; everything else
    /// goes through the full edit form.
    async fn set_status(&self, id: &str, status: WorkOrderStatus) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct WorkOrderService {
    api: ApiClient,
}

#[derive(Debug, Deserialize)]
struct WorkOrderListResponse {
    #[serde(default)]
    data: Vec<WorkOrder>,
}

#[derive(Debug, Deserialize)]
struct CreatedWorkOrder {
    work_order_id: String,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: WorkOrderStatus,
}

impl WorkOrderService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WorkOrderStore for WorkOrderService {
    async fn list(&self) -> Result<Vec<WorkOrder>, ApiError> {
        tracing::debug!("Fetching work orders");
        let response: WorkOrderListResponse = self.api.get("/work-orders/").await?;
        Ok(response.data)
    }

    async fn set_status(&self, id: &str, status: WorkOrderStatus) -> Result<(), ApiError> {
        tracing::info!("Setting work order {} status to {}", id, status.label());
        let _: Acknowledged = self
            .api
            .put(&format!("/work-orders/{}/status", id), &StatusBody { status })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("Deleting work order {}", id);
        let _: Acknowledged = self.api.delete(&format!("/work-orders/{}", id)).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordEndpoint for WorkOrderService {
    type Payload = WorkOrderPayload;

    async fn create(&self, payload: &WorkOrderPayload) -> Result<String, ApiError> {
        tracing::info!("Creating work order {}", payload.order_number);
        let created: CreatedWorkOrder = self.api.post("/work-orders/", payload).await?;
        Ok(created.work_order_id)
    }

    async fn update(&self, id: &str, payload: &WorkOrderPayload) -> Result<(), ApiError> {
        tracing::info!("Updating work order {}", id);
        let _: Acknowledged = self.api.put(&format!("/work-orders/{}", id), payload).await?;
        Ok(())
    }
}
