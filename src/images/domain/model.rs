use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// ImageEntity is a cover image referenced by books through `image_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntity {
    pub image_id: Option<i64>,
    #[serde(skip)]
    pub data: Vec<u8>,
    #[serde(with = "crate::utils::date::serializer")]
    pub created_at: NaiveDateTime,
}

impl ImageEntity {
    pub fn new(image_id: Option<i64>, data: Vec<u8>) -> Self {
        Self {
            image_id,
            data,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for ImageEntity {
    fn id(&self) -> Option<i64> {
        self.image_id
    }

    fn assign_id(&mut self, id: i64) {
        self.image_id = Some(id);
    }
}
