// Study Session Service
//
// No field validation here: session creation takes ids only, and existence
// checks for the referenced group/activity belong to callers.

use crate::domain::{
    PageRequest, Paginated, RecordId, SessionDetail, SessionStats, StudyReview, StudySession,
};
use crate::error::Result;
use crate::port::StudySessionRepository;
use std::sync::Arc;

pub struct StudySessionService {
    sessions: Arc<dyn StudySessionRepository>,
}

impl StudySessionService {
    pub fn new(sessions: Arc<dyn StudySessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn start(
        &self,
        group_id: RecordId,
        study_activity_id: RecordId,
    ) -> Result<StudySession> {
        tracing::debug!(group_id, study_activity_id, "Starting study session");
        self.sessions.create(group_id, study_activity_id).await
    }

    pub async fn end(&self, session_id: RecordId) -> Result<Option<StudySession>> {
        self.sessions.end(session_id).await
    }

    pub async fn record_review(
        &self,
        session_id: RecordId,
        word_id: RecordId,
        correct: bool,
    ) -> Result<Option<StudyReview>> {
        self.sessions.add_review(session_id, word_id, correct).await
    }

    pub async fn get(&self, session_id: RecordId) -> Result<Option<StudySession>> {
        self.sessions.find_by_id(session_id).await
    }

    pub async fn get_with_reviews(
        &self,
        session_id: RecordId,
    ) -> Result<Option<SessionDetail>> {
        self.sessions.find_by_id_with_reviews(session_id).await
    }

    pub async fn stats(&self, session_id: RecordId) -> Result<SessionStats> {
        self.sessions.session_stats(session_id).await
    }

    pub async fn list(&self, page: PageRequest) -> Result<Paginated<StudySession>> {
        self.sessions.list(page).await
    }
}
