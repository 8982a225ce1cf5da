//! Item client facade
//!
//! Turns plain function calls into single requests against an [`ItemService`],
//! logs what happened, and hands the outcome back to the caller.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::api::{ClientConfig, ClientError, HttpItemClient, ItemService};
use crate::models::{DeleteItemResponse, Item, ItemId, ItemList, ItemRequest};

/// One request a caller can hand to the facade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemCommand {
    Create {
        name: String,
        description: String,
        price: i32,
    },
    Get {
        id: String,
    },
    Update {
        id: String,
        name: String,
        description: String,
        price: i32,
    },
    Delete {
        id: String,
    },
    List,
}

/// Successful result of an [`ItemCommand`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Created(Item),
    Fetched(Item),
    Updated(Item),
    Deleted(DeleteItemResponse),
    Listed(ItemList),
}

/// Facade over an item service stub.
///
/// Every operation issues at most one remote call and never retries. Failures
/// are logged here and also returned, so callers may ignore the result.
#[derive(Clone)]
pub struct ItemFacade {
    service: Arc<dyn ItemService>,
}

impl ItemFacade {
    /// Create a facade over the given stub
    pub fn new<S: ItemService + 'static>(service: S) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Create a facade over a shared stub
    pub fn with_service(service: Arc<dyn ItemService>) -> Self {
        Self { service }
    }

    /// Create a facade talking HTTP to the configured endpoint
    pub fn http(config: ClientConfig) -> Self {
        Self::new(HttpItemClient::with_config(config))
    }

    pub async fn create_item(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i32,
    ) -> Result<Item, ClientError> {
        let request = ItemRequest::new(name, description, price);
        match self.service.create_item(request).await {
            Ok(item) => {
                tracing::info!(?item, "Item created successfully");
                Ok(item)
            }
            Err(e) => {
                tracing::error!("Error creating item: {}", e);
                Err(e)
            }
        }
    }

    pub async fn get_item(&self, id: &str) -> Result<Item, ClientError> {
        let id = parse_id(id)?;
        match self.service.get_item(id).await {
            Ok(item) => {
                tracing::info!(?item, "Fetched item");
                Ok(item)
            }
            Err(e) => {
                tracing::error!("Error fetching item {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn update_item(
        &self,
        id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i32,
    ) -> Result<Item, ClientError> {
        let id = parse_id(id)?;
        let request = ItemRequest::new(name, description, price);
        match self.service.update_item(id, request).await {
            Ok(item) => {
                tracing::info!(?item, "Item updated successfully");
                Ok(item)
            }
            Err(e) => {
                tracing::error!("Error updating item {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn delete_item(&self, id: &str) -> Result<DeleteItemResponse, ClientError> {
        let id = parse_id(id)?;
        match self.service.delete_item(id).await {
            Ok(response) => {
                tracing::info!("Item deleted successfully: {}", response.message);
                Ok(response)
            }
            Err(e) => {
                tracing::error!("Error deleting item {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn get_all_items(&self) -> Result<ItemList, ClientError> {
        match self.service.get_all_items().await {
            Ok(list) => {
                tracing::info!(count = list.len(), items = ?list.items, "All items");
                Ok(list)
            }
            Err(e) => {
                tracing::error!("Error fetching items: {}", e);
                Err(e)
            }
        }
    }

    /// Run a single command and wait for its outcome
    pub async fn execute(&self, command: ItemCommand) -> Result<Outcome, ClientError> {
        match command {
            ItemCommand::Create {
                name,
                description,
                price,
            } => self
                .create_item(name, description, price)
                .await
                .map(Outcome::Created),
            ItemCommand::Get { id } => self.get_item(&id).await.map(Outcome::Fetched),
            ItemCommand::Update {
                id,
                name,
                description,
                price,
            } => self
                .update_item(&id, name, description, price)
                .await
                .map(Outcome::Updated),
            ItemCommand::Delete { id } => self.delete_item(&id).await.map(Outcome::Deleted),
            ItemCommand::List => self.get_all_items().await.map(Outcome::Listed),
        }
    }

    /// Run a command on its own task.
    ///
    /// Dropping the returned handle detaches the call; its outcome is then only
    /// visible in the log.
    pub fn spawn(&self, command: ItemCommand) -> JoinHandle<Result<Outcome, ClientError>> {
        let facade = self.clone();
        tokio::spawn(async move { facade.execute(command).await })
    }
}

fn parse_id(id: &str) -> Result<ItemId, ClientError> {
    id.parse::<ItemId>().map_err(|e| {
        tracing::error!("{}", e);
        ClientError::from(e)
    })
}
