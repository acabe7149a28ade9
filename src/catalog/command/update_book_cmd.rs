use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookCommandRequest {
    #[serde(default)]
    pub book_id: i64,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub rubric_id: i64,
    pub image_id: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_busy: bool,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, name: &str, rubric_id: i64, image_id: i64, is_busy: bool) -> Self {
        Self {
            book_id,
            name: name.to_string(),
            author: None,
            description: None,
            rubric_id,
            image_id,
            price: 0.0,
            is_busy,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        // updates only apply to stored books, saving an unknown id would create one
        let mut book = self.catalog_service.find_book_by_id(req.book_id).await.map_err(CommandError::from)?;
        book.name = req.name;
        book.author = req.author;
        book.description = req.description;
        book.rubric_id = req.rubric_id;
        book.image_id = req.image_id;
        book.price = req.price;
        book.is_busy = req.is_busy;
        self.catalog_service.save_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
