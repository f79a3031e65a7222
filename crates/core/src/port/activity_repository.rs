// Study Activity Repository Port (Interface)

use crate::domain::{PageRequest, Paginated, RecordId, StudyActivity, StudyActivityFields};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for StudyActivity persistence
#[async_trait]
pub trait StudyActivityRepository: Send + Sync {
    /// Page of activities ordered by id ascending, plus the full-table count
    async fn list(&self, page: PageRequest) -> Result<Paginated<StudyActivity>>;

    /// Find activity by ID
    async fn find_by_id(&self, id: RecordId) -> Result<Option<StudyActivity>>;

    /// Insert a new activity; id and timestamps are assigned here
    async fn create(&self, fields: StudyActivityFields) -> Result<StudyActivity>;

    /// Rewrite name/url and refresh updated_at; None if no row matched
    async fn update(
        &self,
        id: RecordId,
        fields: StudyActivityFields,
    ) -> Result<Option<StudyActivity>>;

    /// Delete an activity; false when no row was removed
    async fn delete(&self, id: RecordId) -> Result<bool>;
}
