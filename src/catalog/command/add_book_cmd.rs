use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookCommandRequest {
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

impl AddBookCommandRequest {
    pub fn new(name: &str, rubric_id: i64, image_id: i64) -> Self {
        Self {
            name: name.to_string(),
            author: None,
            description: None,
            rubric_id,
            image_id,
            price: 0.0,
            is_busy: false,
        }
    }

    pub fn build_book(&self) -> BookDto {
        let mut book = BookDto::new(self.name.as_str(), self.rubric_id, self.image_id)
            .with_price(self.price)
            .with_busy(self.is_busy);
        book.author = self.author.clone();
        book.description = self.description.clone();
        book
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.save_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
