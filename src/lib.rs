//! itemctl library crate
//!
//! A small command-style client for a remote item-management service. The
//! [`facade::ItemFacade`] issues one request per operation through an
//! [`api::ItemService`] stub and logs the outcome.

pub mod api;
pub mod cli;
pub mod facade;
pub mod models;

pub use api::{ClientConfig, ClientError, HttpItemClient, ItemService};
pub use facade::{ItemCommand, ItemFacade, Outcome};
