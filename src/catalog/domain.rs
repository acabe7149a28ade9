pub mod assembler;
pub mod evaluator;
pub mod exporter;
pub mod service;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use crate::books::domain::filter::BookFilter;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn select_books(&self, filter: &BookFilter, cancel: &CancellationToken) -> LibraryResult<Vec<BookDto>>;
    async fn export_books_to_xml(&self, filter: &BookFilter, cancel: &CancellationToken) -> LibraryResult<String>;
}
