use std::sync::Arc;
use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};
use crate::rubrics::domain::RubricService;
use crate::rubrics::domain::model::RubricEntity;
use crate::rubrics::repository::RubricRepository;

pub struct RubricServiceImpl {
    rubric_repository: Arc<dyn RubricRepository>,
}

impl RubricServiceImpl {
    pub(crate) fn new(rubric_repository: Arc<dyn RubricRepository>) -> Self {
        Self {
            rubric_repository,
        }
    }
}

#[async_trait]
impl RubricService for RubricServiceImpl {
    async fn save_rubric(&self, rubric: &RubricEntity) -> LibraryResult<RubricEntity> {
        if rubric.name.trim().is_empty() {
            return Err(LibraryError::validation("rubric name is required", Some("400".to_string())));
        }
        let saved = self.rubric_repository.save(rubric).await?;
        tracing::info!(rubric_id = ?saved.rubric_id, synonyms = saved.synonyms.len(), "saved rubric");
        Ok(saved)
    }

    async fn find_rubric_by_synonym(&self, synonym: &str) -> LibraryResult<RubricEntity> {
        self.rubric_repository.find_by_synonym(synonym).await?.ok_or_else(|| LibraryError::not_found(
            format!("rubric not found for synonym {:?}", synonym).as_str()))
    }
}
