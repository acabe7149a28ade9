pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::images::domain::model::ImageEntity;

#[async_trait]
pub trait ImageService: Sync + Send {
    async fn save_image(&self, image: &ImageEntity) -> LibraryResult<ImageEntity>;
    async fn find_image_by_id(&self, id: i64) -> LibraryResult<ImageEntity>;
}
