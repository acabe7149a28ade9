use std::sync::Arc;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::images::domain::ImageService;
use crate::images::domain::model::ImageEntity;
use crate::images::repository::ImageRepository;

pub struct ImageServiceImpl {
    image_repository: Arc<dyn ImageRepository>,
}

impl ImageServiceImpl {
    pub(crate) fn new(image_repository: Arc<dyn ImageRepository>) -> Self {
        Self {
            image_repository,
        }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    async fn save_image(&self, image: &ImageEntity) -> LibraryResult<ImageEntity> {
        let saved = self.image_repository.save(image).await?;
        tracing::info!(image_id = ?saved.image_id, bytes = saved.data.len(), "saved image");
        Ok(saved)
    }

    async fn find_image_by_id(&self, id: i64) -> LibraryResult<ImageEntity> {
        self.image_repository.get(id).await
    }
}
