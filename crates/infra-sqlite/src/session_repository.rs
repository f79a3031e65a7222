// SQLite StudySessionRepository Implementation
//
// The ACTIVE -> ENDED transition is a conditional update on end_time IS
// NULL; that single statement is also the concurrency guard, so only one
// of two racing `end` calls can match the row.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tango_core::domain::{
    PageRequest, Paginated, RecordId, ReviewWithWord, SessionDetail, SessionStats, StudyReview,
    StudySession, Word,
};
use tango_core::error::Result;
use tango_core::port::{StudySessionRepository, TimeProvider};

use crate::error_map::map_sqlx_error;

pub struct SqliteStudySessionRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteStudySessionRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl StudySessionRepository for SqliteStudySessionRepository {
    async fn create(
        &self,
        group_id: RecordId,
        study_activity_id: RecordId,
    ) -> Result<StudySession> {
        let now = self.time_provider.now_iso();

        let row: SessionRow = sqlx::query_as(
            r#"
            INSERT INTO study_sessions (group_id, study_activity_id, start_time, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(group_id)
        .bind(study_activity_id)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_session())
    }

    async fn end(&self, session_id: RecordId) -> Result<Option<StudySession>> {
        let now = self.time_provider.now_iso();

        // Matches only while end_time is unset; an ended session and a
        // missing session both fall through to None
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            UPDATE study_sessions
            SET end_time = ?
            WHERE id = ? AND end_time IS NULL
            RETURNING *
            "#,
        )
        .bind(&now)
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn add_review(
        &self,
        session_id: RecordId,
        word_id: RecordId,
        correct: bool,
    ) -> Result<Option<StudyReview>> {
        // Ended sessions still accept reviews; only a missing session is
        // rejected
        let exists: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM study_sessions WHERE id = ?")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if exists.is_none() {
            return Ok(None);
        }

        let now = self.time_provider.now_iso();

        let row: ReviewRow = sqlx::query_as(
            r#"
            INSERT INTO study_reviews (study_session_id, word_id, correct, reviewed_at, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(word_id)
        .bind(correct)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Some(row.into_review()))
    }

    async fn find_by_id(&self, session_id: RecordId) -> Result<Option<StudySession>> {
        let row: Option<SessionRow> =
            sqlx::query_as("SELECT * FROM study_sessions WHERE id = ?")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn find_by_id_with_reviews(
        &self,
        session_id: RecordId,
    ) -> Result<Option<SessionDetail>> {
        let session = match self.find_by_id(session_id).await? {
            Some(session) => session,
            None => return Ok(None),
        };

        let rows: Vec<ReviewWordRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.study_session_id, r.word_id, r.correct, r.reviewed_at, r.created_at,
                   w.id AS word_pk, w.kanji, w.romaji, w.english, w.example,
                   w.created_at AS word_created_at, w.updated_at AS word_updated_at
            FROM study_reviews r
            LEFT JOIN words w ON w.id = r.word_id
            WHERE r.study_session_id = ?
            ORDER BY r.id ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Some(SessionDetail {
            session,
            reviews: rows.into_iter().map(ReviewWordRow::into_entry).collect(),
        }))
    }

    async fn session_stats(&self, session_id: RecordId) -> Result<SessionStats> {
        // SUM over zero rows is NULL, hence the Option
        let (total_reviews, correct_count): (i64, Option<i64>) = sqlx::query_as(
            r#"
            SELECT COUNT(*), SUM(CASE WHEN correct = 1 THEN 1 ELSE 0 END)
            FROM study_reviews
            WHERE study_session_id = ?
            "#,
        )
        .bind(session_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(SessionStats::from_counts(
            total_reviews,
            correct_count.unwrap_or(0),
        ))
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<StudySession>> {
        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM study_sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        // Newest first; id descending is a stable total ordering
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT * FROM study_sessions
            ORDER BY id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.per_page)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Paginated {
            items: rows.into_iter().map(SessionRow::into_session).collect(),
            total_count,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: i64,
    group_id: i64,
    study_activity_id: i64,
    start_time: String,
    end_time: Option<String>,
    created_at: String,
}

impl SessionRow {
    fn into_session(self) -> StudySession {
        StudySession {
            id: self.id,
            group_id: self.group_id,
            study_activity_id: self.study_activity_id,
            start_time: self.start_time,
            end_time: self.end_time,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    study_session_id: i64,
    word_id: i64,
    correct: i64, // SQLite boolean as integer
    reviewed_at: String,
    created_at: String,
}

impl ReviewRow {
    fn into_review(self) -> StudyReview {
        StudyReview {
            id: self.id,
            study_session_id: self.study_session_id,
            word_id: self.word_id,
            correct: self.correct != 0,
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
        }
    }
}

/// Review row joined with its word; word columns are NULL when the word
/// has since been deleted
#[derive(Debug, sqlx::FromRow)]
struct ReviewWordRow {
    id: i64,
    study_session_id: i64,
    word_id: i64,
    correct: i64,
    reviewed_at: String,
    created_at: String,

    word_pk: Option<i64>,
    kanji: Option<String>,
    romaji: Option<String>,
    english: Option<String>,
    example: Option<String>,
    word_created_at: Option<String>,
    word_updated_at: Option<String>,
}

impl ReviewWordRow {
    fn into_entry(self) -> ReviewWithWord {
        let word = self.word_pk.map(|id| Word {
            id,
            kanji: self.kanji.unwrap_or_default(),
            romaji: self.romaji.unwrap_or_default(),
            english: self.english.unwrap_or_default(),
            example: self.example,
            created_at: self.word_created_at.unwrap_or_default(),
            updated_at: self.word_updated_at.unwrap_or_default(),
        });

        ReviewWithWord {
            review: StudyReview {
                id: self.id,
                study_session_id: self.study_session_id,
                word_id: self.word_id,
                correct: self.correct != 0,
                reviewed_at: self.reviewed_at,
                created_at: self.created_at,
            },
            word,
        }
    }
}
