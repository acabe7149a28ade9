use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::images::repository::ImageRepository;
use crate::rubrics::repository::RubricRepository;
use crate::utils::date::LocalClock;

pub fn create_catalog_service(config: &Configuration, image_repository: Arc<dyn ImageRepository>,
                              rubric_repository: Arc<dyn RubricRepository>) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Arc::new(CatalogServiceImpl::new(config, book_repo, image_repository, rubric_repository, Box::new(LocalClock)))
}
