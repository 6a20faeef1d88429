use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Catalog item as persisted in MongoDB.
///
/// `id` maps to the document's `_id`. Both the id and the creation timestamp
/// serialize as strings (hyphenated UUID, RFC 3339) so the stored documents
/// stay portable across drivers and tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Set once at creation, immutable afterwards
    pub created_date: DateTime<Utc>,
}

/// Wire representation of an [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

/// DTO for creating a new item.
///
/// A missing `name` deserializes to "" and fails validation with a field
/// error (400), rather than being rejected at the deserialization layer; a
/// missing `price` defaults to 0, which is within range.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub price: f64,
}

/// DTO for updating an existing item.
///
/// A full-body replace of the mutable fields; id and creation timestamp are
/// never part of an update. Field handling matches [`CreateItemDto`].
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub price: f64,
}

impl Item {
    /// Construct a new item from a create request, assigning a fresh id and
    /// the current timestamp.
    pub fn new(input: CreateItemDto) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            created_date: Utc::now(),
        }
    }

    /// Overwrite the mutable fields from an update request, leaving id and
    /// creation timestamp untouched.
    pub fn apply_update(&mut self, update: UpdateItemDto) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
    }
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            created_date: item.created_date,
        }
    }
}
