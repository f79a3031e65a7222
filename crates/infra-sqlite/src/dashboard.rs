// SQLite DashboardReader Implementation
//
// Read-only aggregation across the words/sessions/reviews tables; queries
// go straight to the tables rather than through the stores.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tango_core::domain::{LastSessionSummary, QuickStats, StudyProgress};
use tango_core::error::Result;
use tango_core::port::DashboardReader;

use crate::error_map::map_sqlx_error;

pub struct SqliteDashboard {
    pool: SqlitePool,
}

impl SqliteDashboard {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardReader for SqliteDashboard {
    async fn last_session(&self) -> Result<Option<LastSessionSummary>> {
        type Row = (i64, i64, i64, String, Option<String>, Option<i64>, Option<i64>);

        let row: Option<Row> = sqlx::query_as(
            r#"
            SELECT s.id, s.group_id, s.study_activity_id, s.start_time, s.end_time,
                   SUM(CASE WHEN r.correct = 1 THEN 1 ELSE 0 END) AS correct_count,
                   SUM(CASE WHEN r.correct = 0 THEN 1 ELSE 0 END) AS incorrect_count
            FROM study_sessions s
            LEFT JOIN study_reviews r ON r.study_session_id = s.id
            GROUP BY s.id
            ORDER BY s.start_time DESC, s.id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(
            |(session_id, group_id, study_activity_id, start_time, end_time, correct, incorrect)| {
                LastSessionSummary {
                    session_id,
                    group_id,
                    study_activity_id,
                    start_time,
                    end_time,
                    correct_count: correct.unwrap_or(0),
                    incorrect_count: incorrect.unwrap_or(0),
                }
            },
        ))
    }

    async fn study_progress(&self) -> Result<StudyProgress> {
        // studied_words counts words ever reviewed, across all sessions
        let (total_words, studied_words): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM words),
                (SELECT COUNT(DISTINCT word_id) FROM study_reviews)
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(StudyProgress::from_counts(total_words, studied_words))
    }

    async fn quick_stats(&self) -> Result<QuickStats> {
        // active_groups counts groups that ever hosted a session, not all
        // groups
        let (total_sessions, active_groups, total_reviews, correct_reviews): (i64, i64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM study_sessions),
                    (SELECT COUNT(DISTINCT group_id) FROM study_sessions),
                    (SELECT COUNT(*) FROM study_reviews),
                    (SELECT COUNT(*) FROM study_reviews WHERE correct = 1)
                "#,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(QuickStats::from_counts(
            total_sessions,
            active_groups,
            total_reviews,
            correct_reviews,
        ))
    }
}
