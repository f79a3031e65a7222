// Word Repository Port (Interface)

use crate::domain::{PageRequest, Paginated, RecordId, Word, WordFields};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Word persistence.
///
/// Absence is expressed as `None`/`false`, never as an error; storage
/// failures are the only error path.
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// Page of words ordered by id ascending, plus the full-table count
    async fn list(&self, page: PageRequest) -> Result<Paginated<Word>>;

    /// Find word by ID
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Word>>;

    /// Insert a new word; id and timestamps are assigned here
    async fn create(&self, fields: WordFields) -> Result<Word>;

    /// Rewrite the word's fields and refresh updated_at; None if no row matched
    async fn update(&self, id: RecordId, fields: WordFields) -> Result<Option<Word>>;

    /// Delete a word; false when no row was removed
    async fn delete(&self, id: RecordId) -> Result<bool>;
}
