use async_trait::async_trait;
use serde::Deserialize;

use crate::models::report::DashboardStats;
use crate::services::api_client::{ApiClient, ApiError};

#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardStats, ApiError>;
}

#[derive(Clone)]
pub struct ReportService {
    api: ApiClient,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    data: DashboardStats,
}

impl ReportService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReportStore for ReportService {
    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        tracing::debug!("Fetching dashboard stats");
        let response: DashboardResponse = self.api.get("/reports/dashboard").await?;
        Ok(response.data)
    }
}
