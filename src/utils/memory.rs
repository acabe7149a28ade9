use std::collections::BTreeMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryTable is an arena of entities keyed by store-assigned ids. Callers only ever get
// clones back, never references into the table.
#[derive(Debug, Clone)]
pub(crate) struct MemoryTable<Entity> {
    name: String,
    rows: BTreeMap<i64, Entity>,
    last_id: i64,
}

impl<Entity: Identifiable + Clone> MemoryTable<Entity> {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    // Inserts or replaces the entity and returns the stored copy along with a flag telling
    // whether it was newly created.
    pub(crate) fn upsert(&mut self, entity: &Entity) -> LibraryResult<(Entity, bool)> {
        let mut row = entity.clone();
        let id = match row.id() {
            Some(id) if id < 0 => {
                return Err(LibraryError::validation(
                    format!("{} id must not be negative, got {}", self.name, id).as_str(), None));
            }
            Some(id) => id,
            None => {
                let id = self.last_id + 1;
                row.assign_id(id);
                id
            }
        };
        self.last_id = self.last_id.max(id);
        let created = self.rows.insert(id, row.clone()).is_none();
        Ok((row, created))
    }

    pub(crate) fn get(&self, id: i64) -> LibraryResult<Entity> {
        self.rows.get(&id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} not found for {}", self.name, id).as_str()))
    }

    pub(crate) fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    pub(crate) fn remove(&mut self, id: i64) -> usize {
        self.rows.remove(&id).map(|_| 1).unwrap_or(0)
    }

    pub(crate) fn rows(&self) -> Vec<Entity> {
        self.rows.values().cloned().collect()
    }
}
