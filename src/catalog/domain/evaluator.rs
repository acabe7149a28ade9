use crate::books::domain::filter::BookFilter;
use crate::books::domain::model::BookEntity;

// RubricMatch is the filter's rubric synonym after it went through the synonym lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricMatch {
    // blank synonym, every rubric matches
    Any,
    Rubric(i64),
    // the synonym resolves to no rubric, so no book can match
    Unresolved,
}

impl RubricMatch {
    pub fn resolved(synonym: &str, rubric_id: Option<i64>) -> Self {
        if synonym.trim().is_empty() {
            return RubricMatch::Any;
        }
        rubric_id.map(RubricMatch::Rubric).unwrap_or(RubricMatch::Unresolved)
    }

    fn accepts(&self, rubric_id: i64) -> bool {
        match self {
            RubricMatch::Any => true,
            RubricMatch::Rubric(id) => *id == rubric_id,
            RubricMatch::Unresolved => false,
        }
    }
}

// FilterEvaluator decides whether a single book belongs to the filter's selection
#[derive(Debug)]
pub struct FilterEvaluator {
    query: String,
    rubric: RubricMatch,
    is_busy: bool,
}

impl FilterEvaluator {
    pub fn new(filter: &BookFilter, rubric: RubricMatch) -> Self {
        Self {
            query: filter.query.trim().to_lowercase(),
            rubric,
            is_busy: filter.is_busy,
        }
    }

    pub fn matches(&self, book: &BookEntity) -> bool {
        self.matches_text(book) && self.rubric.accepts(book.rubric_id) && book.is_busy == self.is_busy
    }

    fn matches_text(&self, book: &BookEntity) -> bool {
        if self.query.is_empty() {
            return true;
        }
        book.name.to_lowercase().contains(self.query.as_str())
            || book.author.as_deref()
            .map(|a| a.to_lowercase().contains(self.query.as_str()))
            .unwrap_or(false)
    }
}
