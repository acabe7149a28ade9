use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::images::domain::model::ImageEntity;
use crate::images::repository::ImageRepository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
pub struct MemoryImageRepository {
    images: RwLock<MemoryTable<ImageEntity>>,
}

impl MemoryImageRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            images: RwLock::new(MemoryTable::new(table_name)),
        }
    }
}

#[async_trait]
impl Repository<ImageEntity> for MemoryImageRepository {
    async fn save(&self, entity: &ImageEntity) -> LibraryResult<ImageEntity> {
        self.images.write().await.upsert(entity).map(|(saved, _)| saved)
    }

    async fn get(&self, id: i64) -> LibraryResult<ImageEntity> {
        self.images.read().await.get(id)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        Ok(self.images.write().await.remove(id))
    }

    async fn select_all(&self) -> LibraryResult<Vec<ImageEntity>> {
        Ok(self.images.read().await.rows())
    }
}

#[async_trait]
impl ImageRepository for MemoryImageRepository {
    async fn exists(&self, id: i64) -> LibraryResult<bool> {
        Ok(self.images.read().await.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::Repository;
    use crate::images::domain::model::ImageEntity;
    use crate::images::repository::ImageRepository;
    use crate::images::repository::memory_image_repository::MemoryImageRepository;

    #[tokio::test]
    async fn test_should_create_delete_images() {
        let images_repo = MemoryImageRepository::new("images");
        let saved = images_repo.save(&ImageEntity::new(None, vec![7])).await.expect("should create image");
        let id = saved.image_id.expect("id");
        assert!(images_repo.exists(id).await.expect("should check image"));
        assert_eq!(1, images_repo.select_all().await.expect("should list images").len());

        assert_eq!(1, images_repo.delete(id).await.expect("should delete image"));
        assert!(!images_repo.exists(id).await.expect("should check image"));
    }
}
