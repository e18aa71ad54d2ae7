//! Product change event types.

use serde::{Deserialize, Serialize};

/// Kind of product change described by an envelope.
///
/// The wire names are part of the downstream consumer's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductEventType {
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
}

impl ProductEventType {
    /// Stable wire name (e.g. "PRODUCT_CREATED").
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductEventType::ProductCreated => "PRODUCT_CREATED",
            ProductEventType::ProductUpdated => "PRODUCT_UPDATED",
            ProductEventType::ProductDeleted => "PRODUCT_DELETED",
        }
    }
}

impl core::fmt::Display for ProductEventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
