use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::Item;

/// Data access interface for catalog items.
///
/// The sole path to persisted state. Handlers depend on this trait, never on
/// a concrete storage type, so an in-memory fake substitutes in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every stored item, unfiltered, in whatever order the store returns.
    /// An empty collection yields an empty vec, never an error.
    async fn list_all(&self) -> CatalogResult<Vec<Item>>;

    /// The item with the given id, or `None` when no record matches.
    async fn get(&self, id: Uuid) -> CatalogResult<Option<Item>>;

    /// Insert exactly one new item. The caller has already assigned the id
    /// and creation timestamp; id generation is trusted to be
    /// collision-free, so no uniqueness check happens here.
    async fn create(&self, item: &Item) -> CatalogResult<()>;

    /// Replace the stored record matching `item.id` wholesale. An id with no
    /// stored match is a no-op, not an error; callers that need a 404 check
    /// existence first.
    async fn update(&self, item: &Item) -> CatalogResult<()>;

    /// Delete the record with the given id. An absent id is a no-op.
    async fn remove(&self, id: Uuid) -> CatalogResult<()>;
}
