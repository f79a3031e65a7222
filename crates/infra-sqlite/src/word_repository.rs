// SQLite WordRepository Implementation

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tango_core::domain::{PageRequest, Paginated, RecordId, Word, WordFields};
use tango_core::error::Result;
use tango_core::port::{TimeProvider, WordRepository};

use crate::error_map::map_sqlx_error;

pub struct SqliteWordRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteWordRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl WordRepository for SqliteWordRepository {
    async fn list(&self, page: PageRequest) -> Result<Paginated<Word>> {
        // total_count is a full-table count, not the page length
        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM words")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let rows: Vec<WordRow> = sqlx::query_as(
            r#"
            SELECT * FROM words
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
            items: rows.into_iter().map(WordRow::into_word).collect(),
            total_count,
        })
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Word>> {
        let row: Option<WordRow> = sqlx::query_as("SELECT * FROM words WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(WordRow::into_word))
    }

    async fn create(&self, fields: WordFields) -> Result<Word> {
        let now = self.time_provider.now_iso();

        let row: WordRow = sqlx::query_as(
            r#"
            INSERT INTO words (kanji, romaji, english, example, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&fields.kanji)
        .bind(&fields.romaji)
        .bind(&fields.english)
        .bind(&fields.example)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_word())
    }

    async fn update(&self, id: RecordId, fields: WordFields) -> Result<Option<Word>> {
        let now = self.time_provider.now_iso();

        let row: Option<WordRow> = sqlx::query_as(
            r#"
            UPDATE words
            SET kanji = ?, romaji = ?, english = ?, example = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&fields.kanji)
        .bind(&fields.romaji)
        .bind(&fields.english)
        .bind(&fields.example)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(WordRow::into_word))
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM words WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// SQLite row representation.
/// Shared with the group and session repositories for joined word columns.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct WordRow {
    pub(crate) id: i64,
    pub(crate) kanji: String,
    pub(crate) romaji: String,
    pub(crate) english: String,
    pub(crate) example: Option<String>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl WordRow {
    pub(crate) fn into_word(self) -> Word {
        Word {
            id: self.id,
            kanji: self.kanji,
            romaji: self.romaji,
            english: self.english,
            example: self.example,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
