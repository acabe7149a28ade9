use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// RubricEntity is a catalog category. Each synonym is an alternate label that resolves to this
// rubric, and a synonym belongs to at most one rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricEntity {
    pub rubric_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl RubricEntity {
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        Self {
            rubric_id: None,
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_synonym(&self, synonym: &str) -> bool {
        let wanted = normalize_synonym(synonym);
        self.synonyms.iter().any(|s| normalize_synonym(s) == wanted)
    }
}

impl Identifiable for RubricEntity {
    fn id(&self) -> Option<i64> {
        self.rubric_id
    }

    fn assign_id(&mut self, id: i64) {
        self.rubric_id = Some(id);
    }
}

pub fn normalize_synonym(synonym: &str) -> String {
    synonym.trim().to_lowercase()
}
