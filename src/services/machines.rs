use async_trait::async_trait;
use serde::Deserialize;

use crate::forms::form::RecordEndpoint;
use crate::models::machine::{Machine, MachinePayload};
use crate::services::api_client::{Acknowledged, ApiClient, ApiError};

/// Machine endpoints, behind a trait so pages and forms can run against an
/// in-memory store in tests.
#[async_trait]
pub trait MachineStore: RecordEndpoint<Payload = MachinePayload> {
    async fn list(&self) -> Result<Vec<Machine>, ApiError>;
    async fn get(&self, id: &str) -> Result<Machine, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct MachineService {
    api: ApiClient,
}

#[derive(Debug, Deserialize)]
struct MachineListResponse {
    #[serde(default)]
    data: Vec<Machine>,
}

#[derive(Debug, Deserialize)]
struct MachineResponse {
    data: Machine,
}

#[derive(Debug, Deserialize)]
struct CreatedMachine {
    machine_id: String,
}

impl MachineService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MachineStore for MachineService {
    async fn list(&self) -> Result<Vec<Machine>, ApiError> {
        tracing::debug!("Fetching machines");
        let response: MachineListResponse = self.api.get("/machines/").await?;
        Ok(response.data)
    }

    async fn get(&self, id: &str) -> Result<Machine, ApiError> {
        tracing::debug!("Fetching machine {}", id);
        let response: MachineResponse = self.api.get(&format!("/machines/{}", id)).await?;
        Ok(response.data)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("Deleting machine {}", id);
        let _: Acknowledged = self.api.delete(&format!("/machines/{}", id)).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordEndpoint for MachineService {
    type Payload = MachinePayload;

    async fn create(&self, payload: &MachinePayload) -> Result<String, ApiError> {
        tracing::info!("Creating machine \"{}\"", payload.name);
        let created: CreatedMachine = self.api.post("/machines/", payload).await?;
        Ok(created.machine_id)
    }

    async fn update(&self, id: &str, payload: &MachinePayload) -> Result<(), ApiError> {
        tracing::info!("Updating machine {}", id);
        let _: Acknowledged = self.api.put(&format!("/machines/{}", id), payload).await?;
        Ok(())
    }
}
