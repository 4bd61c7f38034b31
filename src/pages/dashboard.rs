use crate::models::report::DashboardStats;
use crate::pages::common::LoadState;
use crate::services::reports::ReportStore;

/// Server-computed aggregate counts; display only.
#[derive(Default)]
pub struct DashboardPage {
    stats: DashboardStats,
    state: LoadState,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub async fn load<R: ReportStore>(&mut self, reports: &R) {
        self.state = LoadState::Loading;
        match reports.dashboard().await {
            Ok(stats) => {
                self.stats = stats;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                tracing::error!("Error loading dashboard: {}", err);
                self.state = LoadState::Error(err.to_string());
            }
        }
    }
}
