use std::sync::Arc;
use crate::images::domain::ImageService;
use crate::images::domain::service::ImageServiceImpl;
use crate::images::repository::ImageRepository;
use crate::images::repository::memory_image_repository::MemoryImageRepository;

pub fn create_image_repository() -> Arc<dyn ImageRepository> {
    Arc::new(MemoryImageRepository::new("images"))
}

pub fn create_image_service(image_repository: Arc<dyn ImageRepository>) -> Arc<dyn ImageService> {
    Arc::new(ImageServiceImpl::new(image_repository))
}
