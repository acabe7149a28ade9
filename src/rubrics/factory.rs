use std::sync::Arc;
use crate::rubrics::domain::RubricService;
use crate::rubrics::domain::service::RubricServiceImpl;
use crate::rubrics::repository::RubricRepository;
use crate::rubrics::repository::memory_rubric_repository::MemoryRubricRepository;

pub fn create_rubric_repository() -> Arc<dyn RubricRepository> {
    Arc::new(MemoryRubricRepository::new("rubrics"))
}

pub fn create_rubric_service(rubric_repository: Arc<dyn RubricRepository>) -> Arc<dyn RubricService> {
    Arc::new(RubricServiceImpl::new(rubric_repository))
}
