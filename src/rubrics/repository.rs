pub mod memory_rubric_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::rubrics::domain::model::RubricEntity;

// RubricRepository is the synonym lookup: many aliases resolve to one rubric
#[async_trait]
pub trait RubricRepository: Repository<RubricEntity> {
    async fn find_by_synonym(&self, synonym: &str) -> LibraryResult<Option<RubricEntity>>;
}
