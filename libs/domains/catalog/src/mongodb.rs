//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Item;
use crate::repository::ItemRepository;

const COLLECTION_NAME: &str = "items";

/// MongoDB-backed [`ItemRepository`].
///
/// Holds a typed collection handle; every operation round-trips to storage.
/// Single-document atomicity comes from the server, no application-level
/// locking happens here.
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// Create a repository over the default `items` collection.
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Item>(COLLECTION_NAME),
        }
    }

    /// Create a repository over a custom collection name.
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Item>(collection_name),
        }
    }

    /// Equality filter on the string-encoded `_id`.
    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    /// The caller assigns ids before persisting; an unassigned (nil) id is a
    /// programming error, not a storage condition.
    fn guard_assigned(item: &Item) -> CatalogResult<()> {
        if item.id.is_nil() {
            return Err(CatalogError::InvalidArgument(
                "item id must be assigned before persisting".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> CatalogResult<Vec<Item>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> CatalogResult<Option<Item>> {
        let item = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn create(&self, item: &Item) -> CatalogResult<()> {
        Self::guard_assigned(item)?;

        self.collection.insert_one(item).await?;

        tracing::info!("Item created");
        Ok(())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn update(&self, item: &Item) -> CatalogResult<()> {
        Self::guard_assigned(item)?;

        let result = self
            .collection
            .replace_one(Self::id_filter(item.id), item)
            .await?;

        // A replace that matched nothing is acceptable here; callers needing
        // a 404 check existence before updating.
        if result.matched_count == 0 {
            tracing::debug!("Update matched no document");
        } else {
            tracing::info!("Item updated");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> CatalogResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            tracing::debug!("Delete matched no document");
        } else {
            tracing::info!("Item deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateItemDto;

    #[test]
    fn id_filter_matches_the_string_encoding() {
        let id = Uuid::now_v7();
        let filter = MongoItemRepository::id_filter(id);

        assert_eq!(filter.get("_id"), Some(&Bson::String(id.to_string())));
    }

    #[test]
    fn guard_rejects_nil_id() {
        let mut item = Item::new(CreateItemDto {
            name: "Potion".to_string(),
            description: String::new(),
            price: 5.0,
        });
        item.id = Uuid::nil();

        let err = MongoItemRepository::guard_assigned(&item).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test]
    fn guard_accepts_assigned_id() {
        let item = Item::new(CreateItemDto {
            name: "Potion".to_string(),
            description: String::new(),
            price: 5.0,
        });

        assert!(MongoItemRepository::guard_assigned(&item).is_ok());
    }
}
