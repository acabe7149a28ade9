use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::rubrics::domain::model::RubricEntity;
use crate::rubrics::repository::RubricRepository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
pub struct MemoryRubricRepository {
    rubrics: RwLock<MemoryTable<RubricEntity>>,
}

impl MemoryRubricRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            rubrics: RwLock::new(MemoryTable::new(table_name)),
        }
    }
}

#[async_trait]
impl Repository<RubricEntity> for MemoryRubricRepository {
    async fn save(&self, entity: &RubricEntity) -> LibraryResult<RubricEntity> {
        let mut rubrics = self.rubrics.write().await;
        for other in rubrics.rows() {
            if other.rubric_id.is_some() && other.rubric_id == entity.rubric_id {
                continue;
            }
            if let Some(clash) = entity.synonyms.iter().find(|s| other.has_synonym(s)) {
                return Err(LibraryError::duplicate_key(
                    format!("synonym {:?} already belongs to rubric {:?}", clash, other.rubric_id).as_str()));
            }
        }
        rubrics.upsert(entity).map(|(saved, _)| saved)
    }

    async fn get(&self, id: i64) -> LibraryResult<RubricEntity> {
        self.rubrics.read().await.get(id)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        Ok(self.rubrics.write().await.remove(id))
    }

    async fn select_all(&self) -> LibraryResult<Vec<RubricEntity>> {
        Ok(self.rubrics.read().await.rows())
    }
}

#[async_trait]
impl RubricRepository for MemoryRubricRepository {
    async fn find_by_synonym(&self, synonym: &str) -> LibraryResult<Option<RubricEntity>> {
        Ok(self.rubrics.read().await.rows().into_iter().find(|r| r.has_synonym(synonym)))
    }
}
