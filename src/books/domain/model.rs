use chrono::{NaiveDateTime, Utc};
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a catalog book. `sequence` records insertion order and is
// assigned by the store on first save; updates keep it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub book_id: Option<i64>,
    pub name: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub rubric_id: i64,
    pub image_id: i64,
    pub price: f64,
    pub is_busy: bool,
    pub sequence: u64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(name: &str, rubric_id: i64, image_id: i64) -> Self {
        Self {
            book_id: None,
            name: name.to_string(),
            author: None,
            description: None,
            rubric_id,
            image_id,
            price: 0.0,
            is_busy: false,
            sequence: 0,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<i64> {
        self.book_id
    }

    fn assign_id(&mut self, id: i64) {
        self.book_id = Some(id);
    }
}

// BookIndexEntry is the derived search entry kept next to each stored book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookIndexEntry {
    pub book_id: i64,
    pub text: String,
}

impl BookIndexEntry {
    pub fn from_book(book_id: i64, book: &BookEntity) -> Self {
        let mut text = book.name.to_lowercase();
        if let Some(author) = book.author.as_deref() {
            text.push('\n');
            text.push_str(author.to_lowercase().as_str());
        }
        Self { book_id, text }
    }
}
