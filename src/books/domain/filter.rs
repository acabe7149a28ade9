use serde::{Deserialize, Serialize};
use crate::core::library::{BookOrder, LibraryError, LibraryResult};

/// BookFilter selects and arranges books for a query or an export. It is built per request
/// and never touches the store.
///
/// The default filter matches every rubric and every title, but only books that are not busy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookFilter {
    pub query: String,
    pub rubric_synonym: String,
    pub is_busy: bool,
    pub limit: Option<i64>,
    pub offset: i64,
    pub order: BookOrder,
}

impl Default for BookFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            rubric_synonym: String::new(),
            is_busy: false,
            limit: None,
            offset: 0,
            order: BookOrder::ByLastAdding,
        }
    }
}

impl BookFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_rubric(mut self, rubric_synonym: &str) -> Self {
        self.rubric_synonym = rubric_synonym.to_string();
        self
    }

    pub fn with_busy(mut self, is_busy: bool) -> Self {
        self.is_busy = is_busy;
        self
    }

    pub fn with_limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_order(mut self, order: BookOrder) -> Self {
        self.order = order;
        self
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.offset < 0 {
            return Err(LibraryError::invalid_filter(
                format!("offset must not be negative, got {}", self.offset).as_str()));
        }
        if let Some(limit) = self.limit {
            if limit < 0 {
                return Err(LibraryError::invalid_filter(
                    format!("limit must not be negative, got {}", limit).as_str()));
            }
        }
        Ok(())
    }
}
