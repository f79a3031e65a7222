// Study Session Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::{RecordId, Word};

/// One timed attempt at a study activity against a group's words.
///
/// A session is ACTIVE while `end_time` is unset and ENDED once it is set;
/// ENDED is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: RecordId,
    pub group_id: RecordId,
    pub study_activity_id: RecordId,
    pub start_time: String,
    pub end_time: Option<String>,
    pub created_at: String,
}

impl StudySession {
    pub fn is_ended(&self) -> bool {
        self.end_time.is_some()
    }
}

/// A single correctness judgment for one word within one session.
/// Append-only; never updated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyReview {
    pub id: RecordId,
    pub study_session_id: RecordId,
    pub word_id: RecordId,
    pub correct: bool,
    pub reviewed_at: String,
    pub created_at: String,
}

/// A review joined with the full word record.
///
/// `word` is None when the reviewed word has since been deleted; word
/// deletion does not cascade to reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewWithWord {
    pub review: StudyReview,
    pub word: Option<Word>,
}

/// A session with its denormalized review list, for single-request
/// dashboard consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDetail {
    pub session: StudySession,
    pub reviews: Vec<ReviewWithWord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ended() {
        let mut session = StudySession {
            id: 1,
            group_id: 1,
            study_activity_id: 1,
            start_time: "2026-08-06T10:00:00".to_string(),
            end_time: None,
            created_at: "2026-08-06T10:00:00".to_string(),
        };
        assert!(!session.is_ended());

        session.end_time = Some("2026-08-06T10:15:00".to_string());
        assert!(session.is_ended());
    }
}
