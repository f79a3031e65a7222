// SQLite GroupRepository Implementation

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tango_core::domain::{Group, GroupFields, PageRequest, Paginated, RecordId, Word};
use tango_core::error::Result;
use tango_core::port::{GroupRepository, TimeProvider};

use crate::error_map::map_sqlx_error;
use crate::word_repository::WordRow;

pub struct SqliteGroupRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteGroupRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl GroupRepository for SqliteGroupRepository {
    async fn list(&self, page: PageRequest) -> Result<Paginated<Group>> {
        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM groups")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT * FROM groups
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
            items: rows.into_iter().map(GroupRow::into_group).collect(),
            total_count,
        })
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Group>> {
        let row: Option<GroupRow> = sqlx::query_as("SELECT * FROM groups WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn create(&self, fields: GroupFields) -> Result<Group> {
        let now = self.time_provider.now_iso();

        let row: GroupRow = sqlx::query_as(
            r#"
            INSERT INTO groups (name, description, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_group())
    }

    async fn update(&self, id: RecordId, fields: GroupFields) -> Result<Option<Group>> {
        let now = self.time_provider.now_iso();

        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            UPDATE groups
            SET name = ?, description = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM groups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_words_in_group(&self, group_id: RecordId) -> Result<Vec<Word>> {
        let rows: Vec<WordRow> = sqlx::query_as(
            r#"
            SELECT w.* FROM words w
            INNER JOIN group_words gw ON gw.word_id = w.id
            WHERE gw.group_id = ?
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(WordRow::into_word).collect())
    }

    async fn add_word_to_group(&self, group_id: RecordId, word_id: RecordId) -> Result<bool> {
        // Composite PK keeps the pair unique; a duplicate insert is ignored
        // and reported as zero rows affected
        let result = sqlx::query(
            "INSERT OR IGNORE INTO group_words (group_id, word_id) VALUES (?, ?)",
        )
        .bind(group_id)
        .bind(word_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_word_from_group(&self, group_id: RecordId, word_id: RecordId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM group_words WHERE group_id = ? AND word_id = ?")
            .bind(group_id)
            .bind(word_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GroupRow {
    id: i64,
    name: String,
    description: Option<String>,
    created_at: String,
    updated_at: String,
}

impl GroupRow {
    fn into_group(self) -> Group {
        Group {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_repository::SqliteWordRepository;
    use crate::{create_pool, run_migrations};
    use tango_core::domain::WordFields;
    use tango_core::port::time_provider::SystemTimeProvider;
    use tango_core::port::WordRepository;

    async fn setup() -> (SqliteGroupRepository, SqliteWordRepository) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
        (
            SqliteGroupRepository::new(pool.clone(), time_provider.clone()),
            SqliteWordRepository::new(pool, time_provider),
        )
    }

    fn group_fields(name: &str) -> GroupFields {
        GroupFields {
            name: name.to_string(),
            description: None,
        }
    }

    async fn make_word(words: &SqliteWordRepository, kanji: &str) -> Word {
        words
            .create(WordFields {
                kanji: kanji.to_string(),
                romaji: "romaji".to_string(),
                english: "english".to_string(),
                example: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_crud_roundtrip() {
        let (groups, _) = setup().await;

        let created = groups.create(group_fields("Verbs")).await.unwrap();
        assert_eq!(groups.find_by_id(created.id).await.unwrap().unwrap().name, "Verbs");

        let updated = groups
            .update(created.id, group_fields("Motion Verbs"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Motion Verbs");

        assert!(groups.delete(created.id).await.unwrap());
        assert!(groups.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_membership_roundtrip() {
        let (groups, words) = setup().await;
        let group = groups.create(group_fields("Verbs")).await.unwrap();
        let word = make_word(&words, "食べる").await;

        assert!(groups.add_word_to_group(group.id, word.id).await.unwrap());

        let members = groups.list_words_in_group(group.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, word.id);

        assert!(groups.remove_word_from_group(group.id, word.id).await.unwrap());
        assert!(groups.list_words_in_group(group.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_membership_is_suppressed() {
        let (groups, words) = setup().await;
        let group = groups.create(group_fields("Verbs")).await.unwrap();
        let word = make_word(&words, "行く").await;

        assert!(groups.add_word_to_group(group.id, word.id).await.unwrap());
        // Second insert affects zero rows; the pair stays unique
        assert!(!groups.add_word_to_group(group.id, word.id).await.unwrap());
        assert_eq!(groups.list_words_in_group(group.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_absent_membership_returns_false() {
        let (groups, _) = setup().await;
        assert!(!groups.remove_word_from_group(1, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let (groups, _) = setup().await;
        for i in 0..15 {
            groups.create(group_fields(&format!("Group {}", i))).await.unwrap();
        }

        let page1 = groups.list(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.total_count, 15);

        let page2 = groups.list(PageRequest::new(2, 10)).await.unwrap();
        assert_eq!(page2.items.len(), 5);
    }
}
