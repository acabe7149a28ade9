pub mod memory_image_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::images::domain::model::ImageEntity;

#[async_trait]
pub trait ImageRepository: Repository<ImageEntity> {
    async fn exists(&self, id: i64) -> LibraryResult<bool>;
}
