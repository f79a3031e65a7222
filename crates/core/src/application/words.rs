// Word Service - validation adapter over the word store

use crate::domain::{DomainError, PageRequest, Paginated, RecordId, Word, WordFields};
use crate::error::Result;
use crate::port::WordRepository;
use std::sync::Arc;

pub struct WordService {
    words: Arc<dyn WordRepository>,
}

impl WordService {
    pub fn new(words: Arc<dyn WordRepository>) -> Self {
        Self { words }
    }

    pub async fn list(&self, page: PageRequest) -> Result<Paginated<Word>> {
        self.words.list(page).await
    }

    pub async fn get(&self, id: RecordId) -> Result<Option<Word>> {
        self.words.find_by_id(id).await
    }

    /// Validate required fields, then insert
    pub async fn create(&self, fields: WordFields) -> Result<Word> {
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors).into());
        }

        tracing::debug!(kanji = %fields.kanji, "Creating word");
        self.words.create(fields).await
    }

    /// Validate required fields, then rewrite; None if the id is unknown
    pub async fn update(&self, id: RecordId, fields: WordFields) -> Result<Option<Word>> {
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors).into());
        }

        self.words.update(id, fields).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<bool> {
        self.words.delete(id).await
    }
}
