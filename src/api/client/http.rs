//! HTTP client module
//!
//! This module provides HTTP client functionality to interact with the item service endpoint.

use std::sync::Arc;

use reqwest::{Client as ReqwestClient, Error as ReqwestError, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ItemService;
use crate::models::{DeleteItemResponse, InvalidItemId, Item, ItemId, ItemList, ItemRequest};

/// Endpoint used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Generic API response structure
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, ClientError> {
        if self.success {
            self.data.ok_or(ClientError::MissingData)
        } else {
            Err(ClientError::Api(
                self.error
                    .unwrap_or_else(|| "Unknown API error".to_string()),
            ))
        }
    }
}

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    InvalidId(#[from] InvalidItemId),

    #[error("HTTP error: {0}")]
    Http(#[from] ReqwestError),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing data in response")]
    MissingData,
}

impl ClientError {
    /// True when the error was raised locally, before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::InvalidId(_))
    }
}

/// Item service stub speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpItemClient {
    http_client: Arc<ReqwestClient>,
    config: ClientConfig,
}

impl HttpItemClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http_client: Arc::new(ReqwestClient::new()),
            config,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "Received response");

        let parsed = serde_json::from_slice::<ApiResponse<T>>(&body);

        // A failing status is never a success, whatever the body claims
        if !status.is_success() {
            return Err(match parsed {
                Ok(ApiResponse {
                    success: false,
                    error: Some(message),
                    ..
                }) => ClientError::Api(message),
                _ => ClientError::Api(format!("HTTP error: {}", status)),
            });
        }

        parsed?.into_result()
    }
}

impl Default for HttpItemClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ItemService for HttpItemClient {
    async fn create_item(&self, request: ItemRequest) -> Result<Item, ClientError> {
        let url = self.config.url("/api/items");
        tracing::debug!(%url, "POST create item");
        self.send(self.http_client.post(&url).json(&request)).await
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, ClientError> {
        let url = self.config.url(&format!("/api/items/{}", id));
        tracing::debug!(%url, "GET item");
        self.send(self.http_client.get(&url)).await
    }

    async fn update_item(&self, id: ItemId, request: ItemRequest) -> Result<Item, ClientError> {
        let url = self.config.url(&format!("/api/items/{}", id));
        tracing::debug!(%url, "PUT update item");
        self.send(self.http_client.put(&url).json(&request)).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<DeleteItemResponse, ClientError> {
        let url = self.config.url(&format!("/api/items/{}", id));
        tracing::debug!(%url, "DELETE item");
        self.send(self.http_client.delete(&url)).await
    }

    async fn get_all_items(&self) -> Result<ItemList, ClientError> {
        let url = self.config.url("/api/items");
        tracing::debug!(%url, "GET all items");
        self.send(self.http_client.get(&url)).await
    }
}
