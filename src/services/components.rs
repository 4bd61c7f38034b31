use async_trait::async_trait;
use serde::Deserialize;

use crate::forms::form::RecordEndpoint;
use crate::models::component::{Component, ComponentPayload};
use crate::services::api_client::{Acknowledged, ApiClient, ApiError};

/// Component endpoints. Components are always fetched per owning machine;
/// there is no flat collection route.
#[async_trait]
pub trait ComponentStore: RecordEndpoint<Payload = ComponentPayload> {
    async fn list_for_machine(&self, machine_id: &str) -> Result<Vec<Component>, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct ComponentService {
    api: ApiClient,
}

#[derive(Debug, Deserialize)]
struct ComponentListResponse {
    #[serde(default)]
    data: Vec<Component>,
}

#[derive(Debug, Deserialize)]
struct CreatedComponent {
    component_id: String,
}

impl ComponentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ComponentStore for ComponentService {
    async fn list_for_machine(&self, machine_id: &str) -> Result<Vec<Component>, ApiError> {
        tracing::debug!("Fetching components for machine {}", machine_id);
        let response: ComponentListResponse = self
            .api
            .get(&format!("/components/machine/{}", machine_id))
            .await?;
        Ok(response.data)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("Deleting component {}", id);
        let _: Acknowledged = self.api.delete(&format!("/components/{}", id)).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordEndpoint for ComponentService {
    type Payload = ComponentPayload;

    async fn create(&self, payload: &ComponentPayload) -> Result<String, ApiError> {
        tracing::info!("Creating component \"{}\"", payload.name);
        let created: CreatedComponent = self.api.post("/components/", payload).await?;
        Ok(created.component_id)
    }

    async fn update(&self, id: &str, payload: &ComponentPayload) -> Result<(), ApiError> {
        tracing::info!("Updating component {}", id);
        let _: Acknowledged = self.api.put(&format!("/components/{}", id), payload).await?;
        Ok(())
    }
}
