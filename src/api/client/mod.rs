//! Client module
//!
//! This module provides the item service stub abstraction and its HTTP implementation.

mod http;
mod trait_def;

// Re-export the trait and types
pub use http::{ClientConfig, ClientError, HttpItemClient, DEFAULT_BASE_URL};
pub use trait_def::ItemService;
