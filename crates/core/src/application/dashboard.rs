// Dashboard Service - read-only aggregate queries

use crate::domain::{LastSessionSummary, QuickStats, StudyProgress};
use crate::error::Result;
use crate::port::DashboardReader;
use std::sync::Arc;

pub struct DashboardService {
    dashboard: Arc<dyn DashboardReader>,
}

impl DashboardService {
    pub fn new(dashboard: Arc<dyn DashboardReader>) -> Self {
        Self { dashboard }
    }

    pub async fn last_session(&self) -> Result<Option<LastSessionSummary>> {
        self.dashboard.last_session().await
    }

    pub async fn study_progress(&self) -> Result<StudyProgress> {
        self.dashboard.study_progress().await
    }

    pub async fn quick_stats(&self) -> Result<QuickStats> {
        self.dashboard.quick_stats().await
    }
}
