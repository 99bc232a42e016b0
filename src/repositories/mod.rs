use crate::entities::Item;
use crate::errors::ServiceError;
use async_trait::async_trait;
use uuid::Uuid;

pub mod in_memory;

pub use in_memory::InMemoryItemsRepository;

/// Storage contract for catalog items.
///
/// Only backend faults surface as `Err`; a missing id is `Ok(None)` from
/// `get` and a no-op for `update` and `delete`.
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Items in insertion order, optionally narrowed to names containing
    /// `name` (case-insensitive).
    async fn list(&self, name: Option<String>) -> Result<Vec<Item>, ServiceError>;

    async fn get(&self, id: Uuid) -> Result<Option<Item>, ServiceError>;

    async fn create(&self, item: Item) -> Result<(), ServiceError>;

    /// Replaces the stored record carrying `item.id`.
    async fn update(&self, item: Item) -> Result<(), ServiceError>;

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;

    /// Readiness probe for the backing store.
    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}
