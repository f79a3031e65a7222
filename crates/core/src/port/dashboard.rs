// Dashboard Reader Port (Interface)

use crate::domain::{LastSessionSummary, QuickStats, StudyProgress};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only cross-table aggregation for the dashboard. Never mutates.
#[async_trait]
pub trait DashboardReader: Send + Sync {
    /// The session with the latest start time, with its review counts;
    /// None when no sessions exist
    async fn last_session(&self) -> Result<Option<LastSessionSummary>>;

    /// Vocabulary coverage: distinct words ever reviewed vs the total
    async fn study_progress(&self) -> Result<StudyProgress>;

    /// Aggregate session/review counts and overall success rate
    async fn quick_stats(&self) -> Result<QuickStats>;
}
