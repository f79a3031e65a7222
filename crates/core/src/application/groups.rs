// Group Service - validation and membership delegation

use crate::domain::{DomainError, Group, GroupFields, PageRequest, Paginated, RecordId, Word};
use crate::error::Result;
use crate::port::GroupRepository;
use std::sync::Arc;

pub struct GroupService {
    groups: Arc<dyn GroupRepository>,
}

impl GroupService {
    pub fn new(groups: Arc<dyn GroupRepository>) -> Self {
        Self { groups }
    }

    pub async fn list(&self, page: PageRequest) -> Result<Paginated<Group>> {
        self.groups.list(page).await
    }

    pub async fn get(&self, id: RecordId) -> Result<Option<Group>> {
        self.groups.find_by_id(id).await
    }

    pub async fn create(&self, fields: GroupFields) -> Result<Group> {
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors).into());
        }

        tracing::debug!(name = %fields.name, "Creating group");
        self.groups.create(fields).await
    }

    pub async fn update(&self, id: RecordId, fields: GroupFields) -> Result<Option<Group>> {
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors).into());
        }

        self.groups.update(id, fields).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<bool> {
        self.groups.delete(id).await
    }

    pub async fn words_in_group(&self, group_id: RecordId) -> Result<Vec<Word>> {
        self.groups.list_words_in_group(group_id).await
    }

    pub async fn add_word(&self, group_id: RecordId, word_id: RecordId) -> Result<bool> {
        self.groups.add_word_to_group(group_id, word_id).await
    }

    pub async fn remove_word(&self, group_id: RecordId, word_id: RecordId) -> Result<bool> {
        self.groups.remove_word_from_group(group_id, word_id).await
    }
}
