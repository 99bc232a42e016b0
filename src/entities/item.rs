use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog item as held by the repository.
///
/// `id` and `created_date` are assigned once by [`Item::new`] and never
/// rewritten; [`Item::with_details`] only touches the mutable fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Builds a new item with a fresh id stamped with the current time.
    pub fn new(name: String, description: Option<String>, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            created_date: Utc::now(),
        }
    }

    /// Returns a copy with name, description and price replaced.
    pub fn with_details(&self, name: String, description: Option<String>, price: Decimal) -> Self {
        Self {
            name,
            description,
            price,
            ..self.clone()
        }
    }
}
