// Study Activity Service

use crate::domain::{
    DomainError, PageRequest, Paginated, RecordId, StudyActivity, StudyActivityFields,
};
use crate::error::Result;
use crate::port::StudyActivityRepository;
use std::sync::Arc;

pub struct StudyActivityService {
    activities: Arc<dyn StudyActivityRepository>,
}

impl StudyActivityService {
    pub fn new(activities: Arc<dyn StudyActivityRepository>) -> Self {
        Self { activities }
    }

    pub async fn list(&self, page: PageRequest) -> Result<Paginated<StudyActivity>> {
        self.activities.list(page).await
    }

    pub async fn get(&self, id: RecordId) -> Result<Option<StudyActivity>> {
        self.activities.find_by_id(id).await
    }

    pub async fn create(&self, fields: StudyActivityFields) -> Result<StudyActivity> {
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors).into());
        }

        tracing::debug!(name = %fields.name, "Creating study activity");
        self.activities.create(fields).await
    }

    pub async fn update(
        &self,
        id: RecordId,
        fields: StudyActivityFields,
    ) -> Result<Option<StudyActivity>> {
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors).into());
        }

        self.activities.update(id, fields).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<bool> {
        self.activities.delete(id).await
    }
}
