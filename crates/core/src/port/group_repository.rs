// Group Repository Port (Interface)

use crate::domain::{Group, GroupFields, PageRequest, Paginated, RecordId, Word};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Group persistence and membership.
///
/// Membership operations do not verify that the group or word exists;
/// callers own existence checks. They surface only "zero rows affected".
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Page of groups ordered by id ascending, plus the full-table count
    async fn list(&self, page: PageRequest) -> Result<Paginated<Group>>;

    /// Find group by ID
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Group>>;

    /// Insert a new group; id and timestamps are assigned here
    async fn create(&self, fields: GroupFields) -> Result<Group>;

    /// Rewrite the group's fields and refresh updated_at; None if no row matched
    async fn update(&self, id: RecordId, fields: GroupFields) -> Result<Option<Group>>;

    /// Delete a group; false when no row was removed.
    /// Does not cascade to memberships or sessions.
    async fn delete(&self, id: RecordId) -> Result<bool>;

    /// All words belonging to a group, in join order
    async fn list_words_in_group(&self, group_id: RecordId) -> Result<Vec<Word>>;

    /// Record membership. Idempotent: an already-present pair is suppressed
    /// and reported as false.
    async fn add_word_to_group(&self, group_id: RecordId, word_id: RecordId) -> Result<bool>;

    /// Remove membership; false when the pair was not present
    async fn remove_word_from_group(&self, group_id: RecordId, word_id: RecordId) -> Result<bool>;
}
