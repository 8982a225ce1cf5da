//! Client trait definition
//!
//! This module defines the `ItemService` trait that abstracts over different stub implementations.

use super::ClientError;
use crate::models::{DeleteItemResponse, Item, ItemId, ItemList, ItemRequest};

/// Trait defining the remote interface of the item service.
///
/// Each method is a single request/response exchange. Implementations must not
/// retry on their own.
#[async_trait::async_trait]
pub trait ItemService: Send + Sync {
    /// Create a new item
    async fn create_item(&self, request: ItemRequest) -> Result<Item, ClientError>;

    /// Get an item by its ID
    async fn get_item(&self, id: ItemId) -> Result<Item, ClientError>;

    /// Replace the fields of an existing item
    async fn update_item(&self, id: ItemId, request: ItemRequest) -> Result<Item, ClientError>;

    /// Delete an item by its ID
    async fn delete_item(&self, id: ItemId) -> Result<DeleteItemResponse, ClientError>;

    /// List all items
    async fn get_all_items(&self) -> Result<ItemList, ClientError>;
}
