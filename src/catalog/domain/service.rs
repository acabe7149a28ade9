use std::future::Future;
use std::sync::Arc;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use crate::books::domain::filter::BookFilter;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{assembler, exporter, CatalogService};
use crate::catalog::domain::evaluator::{FilterEvaluator, RubricMatch};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::images::repository::ImageRepository;
use crate::rubrics::repository::RubricRepository;
use crate::utils::date::Clock;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    image_repository: Arc<dyn ImageRepository>,
    rubric_repository: Arc<dyn RubricRepository>,
    clock: Box<dyn Clock>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      image_repository: Arc<dyn ImageRepository>,
                      rubric_repository: Arc<dyn RubricRepository>,
                      clock: Box<dyn Clock>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            image_repository,
            rubric_repository,
            clock,
        }
    }

    async fn resolve_rubric(&self, filter: &BookFilter, cancel: &CancellationToken) -> LibraryResult<RubricMatch> {
        if filter.rubric_synonym.trim().is_empty() {
            return Ok(RubricMatch::Any);
        }
        let rubric = read_store("rubric store", cancel,
                                self.rubric_repository.find_by_synonym(filter.rubric_synonym.as_str())).await?;
        Ok(RubricMatch::resolved(filter.rubric_synonym.as_str(), rubric.and_then(|r| r.rubric_id)))
    }

    async fn validate_book(&self, book: &BookDto) -> LibraryResult<()> {
        if book.name.trim().is_empty() {
            return Err(LibraryError::validation("book name is required", Some("400".to_string())));
        }
        if !book.price.is_finite() || book.price < 0.0 {
            return Err(LibraryError::validation(
                format!("book price must be a non-negative number, got {}", book.price).as_str(), Some("400".to_string())));
        }
        if !self.image_repository.exists(book.image_id).await? {
            return Err(LibraryError::validation(
                format!("image {} does not exist", book.image_id).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}

// Awaits a read from the named store unless the caller cancels first. Any failure of the
// read itself is reported as that store being unavailable.
async fn read_store<T, F>(store: &str, cancel: &CancellationToken, read: F) -> LibraryResult<T>
    where F: Future<Output=LibraryResult<T>> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(LibraryError::cancelled(format!("{} read cancelled", store).as_str())),
        res = read => res.map_err(|err| match err {
            LibraryError::StoreUnavailable { .. } => err,
            other => LibraryError::store_unavailable(
                format!("{} read failed: {}", store, other).as_str(), None, false),
        }),
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.validate_book(book).await?;
        let saved = self.book_repository.save(&BookEntity::from(book)).await?;
        tracing::info!(branch_id = self.branch_id.as_str(), book_id = ?saved.book_id, "saved book");
        Ok(BookDto::from(&saved))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let removed = self.book_repository.delete_with_index(id).await?;
        if removed == 0 {
            return Err(LibraryError::not_found(format!("book not found for {}", id).as_str()));
        }
        tracing::info!(branch_id = self.branch_id.as_str(), book_id = id, "removed book");
        Ok(())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    #[tracing::instrument(skip(self, cancel))]
    async fn select_books(&self, filter: &BookFilter, cancel: &CancellationToken) -> LibraryResult<Vec<BookDto>> {
        filter.validate()?;
        let rubric = self.resolve_rubric(filter, cancel).await?;
        let candidates = read_store("book store", cancel, self.book_repository.select_all()).await?;
        let total = candidates.len();

        let evaluator = FilterEvaluator::new(filter, rubric);
        let matched: Vec<BookEntity> = candidates.into_iter().filter(|b| evaluator.matches(b)).collect();
        let matched_count = matched.len();
        let books = assembler::assemble(matched, filter);
        tracing::debug!(total, matched = matched_count, selected = books.len(), "selected books");
        Ok(books.iter().map(BookDto::from).collect())
    }

    #[tracing::instrument(skip(self, cancel))]
    async fn export_books_to_xml(&self, filter: &BookFilter, cancel: &CancellationToken) -> LibraryResult<String> {
        let books = self.select_books(filter, cancel).await?;
        let xml = exporter::render(&books, self.clock.now())?;
        tracing::info!(exported = books.len(), bytes = xml.len(), "exported books to xml");
        Ok(xml)
    }
}
