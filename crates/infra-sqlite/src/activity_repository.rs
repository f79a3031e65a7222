// SQLite StudyActivityRepository Implementation

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tango_core::domain::{PageRequest, Paginated, RecordId, StudyActivity, StudyActivityFields};
use tango_core::error::Result;
use tango_core::port::{StudyActivityRepository, TimeProvider};

use crate::error_map::map_sqlx_error;

pub struct SqliteStudyActivityRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteStudyActivityRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl StudyActivityRepository for SqliteStudyActivityRepository {
    async fn list(&self, page: PageRequest) -> Result<Paginated<StudyActivity>> {
        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM study_activities")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
            SELECT * FROM study_activities
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.per_page)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Paginated {
            items: rows.into_iter().map(ActivityRow::into_activity).collect(),
            total_count,
        })
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StudyActivity>> {
        let row: Option<ActivityRow> =
            sqlx::query_as("SELECT * FROM study_activities WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(ActivityRow::into_activity))
    }

    async fn create(&self, fields: StudyActivityFields) -> Result<StudyActivity> {
        let now = self.time_provider.now_iso();

        let row: ActivityRow = sqlx::query_as(
            r#"
            INSERT INTO study_activities (name, url, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.url)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_activity())
    }

    async fn update(
        &self,
        id: RecordId,
        fields: StudyActivityFields,
    ) -> Result<Option<StudyActivity>> {
        let now = self.time_provider.now_iso();

        let row: Option<ActivityRow> = sqlx::query_as(
            r#"
            UPDATE study_activities
            SET name = ?, url = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.url)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ActivityRow::into_activity))
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM study_activities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ActivityRow {
    id: i64,
    name: String,
    url: String,
    created_at: String,
    updated_at: String,
}

impl ActivityRow {
    fn into_activity(self) -> StudyActivity {
        StudyActivity {
            id: self.id,
            name: self.name,
            url: self.url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use tango_core::port::time_provider::SystemTimeProvider;

    async fn setup_repo() -> SqliteStudyActivityRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteStudyActivityRepository::new(pool, Arc::new(SystemTimeProvider))
    }

    fn fields(name: &str, url: &str) -> StudyActivityFields {
        StudyActivityFields {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_roundtrip() {
        let repo = setup_repo().await;

        let created = repo
            .create(fields("Flashcards", "http://localhost:8081"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let updated = repo
            .update(created.id, fields("Flashcards", "http://localhost:9090"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.url, "http://localhost:9090");

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let repo = setup_repo().await;
        for i in 0..15 {
            repo.create(fields(&format!("Activity {}", i), "http://localhost:8081"))
                .await
                .unwrap();
        }

        let page1 = repo.list(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.total_count, 15);

        let page2 = repo.list(PageRequest::new(2, 10)).await.unwrap();
        assert_eq!(page2.items.len(), 5);
    }
}
