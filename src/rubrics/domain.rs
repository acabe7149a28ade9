pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::rubrics::domain::model::RubricEntity;

#[async_trait]
pub trait RubricService: Sync + Send {
    async fn save_rubric(&self, rubric: &RubricEntity) -> LibraryResult<RubricEntity>;
    async fn find_rubric_by_synonym(&self, synonym: &str) -> LibraryResult<RubricEntity>;
}
