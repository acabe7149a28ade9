use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub book_id: Option<i64>,
    pub name: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub rubric_id: i64,
    pub image_id: i64,
    pub price: f64,
    pub is_busy: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(name: &str, rubric_id: i64, image_id: i64) -> BookDto {
        BookDto {
            book_id: None,
            name: name.to_string(),
            author: None,
            description: None,
            rubric_id,
            image_id,
            price: 0.0,
            is_busy: false,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_busy(mut self, is_busy: bool) -> Self {
        self.is_busy = is_busy;
        self
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            name: other.name.to_string(),
            author: other.author.clone(),
            description: other.description.clone(),
            rubric_id: other.rubric_id,
            image_id: other.image_id,
            price: other.price,
            is_busy: other.is_busy,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// the store owns `sequence`, so a converted entity always starts unsequenced
impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            name: other.name.to_string(),
            author: other.author.clone(),
            description: other.description.clone(),
            rubric_id: other.rubric_id,
            image_id: other.image_id,
            price: other.price,
            is_busy: other.is_busy,
            sequence: 0,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
