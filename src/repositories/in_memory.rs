use super::ItemsRepository;
use crate::entities::Item;
use crate::errors::ServiceError;
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-lifetime item store.
///
/// Every trait method takes the lock exactly once, so individual calls are
/// atomic. Sequences of calls made by a caller are not.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemsRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a few sample items.
    pub fn with_sample_items() -> Self {
        Self::from_items(vec![
            Item::new("Potion".to_string(), None, dec!(9)),
            Item::new("Iron Sword".to_string(), None, dec!(20)),
            Item::new("Bronze Shield".to_string(), None, dec!(18)),
        ])
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

fn name_matches(name: &str, needle_lower: &str) -> bool {
    name.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl ItemsRepository for InMemoryItemsRepository {
    async fn list(&self, name: Option<String>) -> Result<Vec<Item>, ServiceError> {
        let items = self.items.read().await;
        let result = match name {
            Some(needle) => {
                let needle = needle.to_lowercase();
                items
                    .iter()
                    .filter(|item| name_matches(&item.name, &needle))
                    .cloned()
                    .collect()
            }
            None => items.clone(),
        };
        Ok(result)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, ServiceError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, item: Item) -> Result<(), ServiceError> {
        debug!(item_id = %item.id, "storing item");
        self.items.write().await.push(item);
        Ok(())
    }

    async fn update(&self, item: Item) -> Result<(), ServiceError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => debug!(item_id = %item.id, "update skipped, item no longer stored"),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.items.write().await.retain(|item| item.id != id);
        Ok(())
    }
}
