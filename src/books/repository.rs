pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookIndexEntry};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// BookRepository keeps book records together with a derived search index. `delete` and
// `delete_index` are independent, a caller that uses them must invoke both to fully remove a
// book; `delete_with_index` removes both in one step.
#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn delete_index(&self, id: i64) -> LibraryResult<usize>;

    async fn delete_with_index(&self, id: i64) -> LibraryResult<usize>;

    async fn select_index(&self) -> LibraryResult<Vec<BookIndexEntry>>;
}
