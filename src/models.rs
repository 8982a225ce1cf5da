//! Core models for the itemctl library
//!
//! This module contains the item entity and the request/response values exchanged
//! with the item service.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of an item as understood by the item service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

impl ItemId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when caller-supplied text is not a usable item identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    #[error("Item ID must be a number (got {0:?})")]
    NotANumber(String),

    /// Item IDs are 32-bit signed integers
    #[error("Item ID is out of range for a 32-bit id (got {0:?})")]
    OutOfRange(String),
}

impl InvalidItemId {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            InvalidItemId::NotANumber(input) | InvalidItemId::OutOfRange(input) => input,
        }
    }
}

impl FromStr for ItemId {
    type Err = InvalidItemId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(ItemId).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                InvalidItemId::OutOfRange(s.to_string())
            }
            _ => InvalidItemId::NotANumber(s.to_string()),
        })
    }
}

/// An item held by the item service.
///
/// Fields the service leaves out of a response decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i32,
}

/// Payload for creating or updating an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub description: String,
    pub price: i32,
}

impl ItemRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Acknowledgement returned when an item is deleted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteItemResponse {
    pub message: String,
}

/// Every item currently held by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemList {
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
