// Study Session Repository Port (Interface)

use crate::domain::{
    PageRequest, Paginated, RecordId, SessionDetail, SessionStats, StudyReview, StudySession,
};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for StudySession persistence.
///
/// Sessions move ACTIVE -> ENDED exactly once; the transition is guarded by
/// a conditional update on the unset end time, so two concurrent `end` calls
/// cannot both succeed.
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    /// Start a session now. No existence validation of the referenced
    /// group/activity at this layer.
    async fn create(
        &self,
        group_id: RecordId,
        study_activity_id: RecordId,
    ) -> Result<StudySession>;

    /// Set the end time, only if the session is still active.
    ///
    /// Returns None both when the session does not exist and when it already
    /// ended; callers cannot distinguish the two from this value alone.
    async fn end(&self, session_id: RecordId) -> Result<Option<StudySession>>;

    /// Append a review. None when the session does not exist; ended sessions
    /// still accept reviews (recording commonly lags termination).
    async fn add_review(
        &self,
        session_id: RecordId,
        word_id: RecordId,
        correct: bool,
    ) -> Result<Option<StudyReview>>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: RecordId) -> Result<Option<StudySession>>;

    /// Find session by ID with its reviews, each carrying the full word record
    async fn find_by_id_with_reviews(
        &self,
        session_id: RecordId,
    ) -> Result<Option<SessionDetail>>;

    /// Review totals and accuracy for one session. A session with no reviews
    /// (or an unknown id) yields all-zero stats.
    async fn session_stats(&self, session_id: RecordId) -> Result<SessionStats>;

    /// Page of sessions ordered by id descending, plus the full-table count
    async fn list(&self, page: PageRequest) -> Result<Paginated<StudySession>>;
}
