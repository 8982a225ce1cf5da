//! API module
//!
//! This module provides the remote side of the itemctl tool: the item service
//! stub trait and its HTTP implementation.

pub mod client;

// Re-export commonly used types
pub use client::{ClientConfig, ClientError, HttpItemClient, ItemService, DEFAULT_BASE_URL};
