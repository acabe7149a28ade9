use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::{BookEntity, BookIndexEntry};
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
struct BookTables {
    books: MemoryTable<BookEntity>,
    index: BTreeMap<i64, BookIndexEntry>,
    last_sequence: u64,
}

// MemoryBookRepository keeps records and index entries behind a single lock so readers always
// see a consistent snapshot.
#[derive(Debug)]
pub struct MemoryBookRepository {
    tables: RwLock<BookTables>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            tables: RwLock::new(BookTables {
                books: MemoryTable::new(table_name),
                index: BTreeMap::new(),
                last_sequence: 0,
            }),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut tables = self.tables.write().await;
        let existing = entity.book_id.and_then(|id| tables.books.get(id).ok());
        let mut row = entity.clone();
        match existing {
            Some(prev) => {
                row.sequence = prev.sequence;
                row.created_at = prev.created_at;
                row.updated_at = Utc::now().naive_utc();
            }
            None => {
                tables.last_sequence += 1;
                row.sequence = tables.last_sequence;
            }
        }
        let (saved, created) = tables.books.upsert(&row)?;
        if let Some(id) = saved.book_id {
            tables.index.insert(id, BookIndexEntry::from_book(id, &saved));
            tracing::debug!(book_id = id, created, sequence = saved.sequence, "saved book");
        }
        Ok(saved)
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.tables.read().await.books.get(id)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let removed = self.tables.write().await.books.remove(id);
        tracing::debug!(book_id = id, removed, "deleted book record");
        Ok(removed)
    }

    async fn select_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.tables.read().await.books.rows())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn delete_index(&self, id: i64) -> LibraryResult<usize> {
        let removed = self.tables.write().await.index.remove(&id).map(|_| 1).unwrap_or(0);
        tracing::debug!(book_id = id, removed, "deleted book index entry");
        Ok(removed)
    }

    async fn delete_with_index(&self, id: i64) -> LibraryResult<usize> {
        let mut tables = self.tables.write().await;
        let removed = tables.books.remove(id);
        let _ = tables.index.remove(&id);
        tracing::debug!(book_id = id, removed, "deleted book with index entry");
        Ok(removed)
    }

    async fn select_index(&self) -> LibraryResult<Vec<BookIndexEntry>> {
        Ok(self.tables.read().await.index.values().cloned().collect())
    }
}
