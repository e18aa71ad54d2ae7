//! Product record and validation rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Menu category for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Lanche,
    Acompanhamento,
    Bebida,
    Sobremesa,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lanche,
        Category::Acompanhamento,
        Category::Bebida,
        Category::Sobremesa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lanche => "Lanche",
            Category::Acompanhamento => "Acompanhamento",
            Category::Bebida => "Bebida",
            Category::Sobremesa => "Sobremesa",
        }
    }

    fn from_value(v: &Value) -> Option<Self> {
        let s = v.as_str()?;
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated product change payload.
///
/// Transient: built from one request, flattened into the outgoing event
/// envelope, and discarded. Never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: f64,
    pub cooking_time: f64,
}

/// Required fields, in reporting order. The first absent field determines
/// the error message.
const REQUIRED_FIELDS: [&str; 5] = ["name", "category", "description", "price", "cookingTime"];

/// Validate a raw product payload against the schema.
///
/// Rules run in a fixed order and halt at the first violation:
/// 1. all five required fields present;
/// 2. `name` at least 3 characters;
/// 3. `category` one of the four menu categories;
/// 4. `description` at least 10 characters;
/// 5. `price` numeric and > 0;
/// 6. `cookingTime` numeric and >= 0.
///
/// Numeric checks are strict: JSON booleans are not numbers.
pub fn validate_product(product: &Map<String, Value>) -> Result<ProductRecord, DomainError> {
    for field in REQUIRED_FIELDS {
        if !product.contains_key(field) {
            return Err(DomainError::MissingField(field));
        }
    }

    let name = product["name"]
        .as_str()
        .filter(|s| s.chars().count() >= 3)
        .ok_or_else(|| {
            DomainError::invalid_field("Product name must be at least 3 characters long")
        })?;

    let category = Category::from_value(&product["category"]).ok_or_else(|| {
        let allowed: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        DomainError::invalid_field(format!(
            "Invalid category. Must be one of: {}",
            allowed.join(", ")
        ))
    })?;

    let description = product["description"]
        .as_str()
        .filter(|s| s.chars().count() >= 10)
        .ok_or_else(|| {
            DomainError::invalid_field("Product description must be at least 10 characters long")
        })?;

    let price = product["price"]
        .as_f64()
        .filter(|p| *p > 0.0)
        .ok_or_else(|| DomainError::invalid_field("Product price must be greater than 0"))?;

    let cooking_time = product["cookingTime"]
        .as_f64()
        .filter(|t| *t >= 0.0)
        .ok_or_else(|| {
            DomainError::invalid_field("Product cookingTime must be greater than or equal to 0")
        })?;

    Ok(ProductRecord {
        name: name.to_string(),
        category,
        description: description.to_string(),
        price,
        cooking_time,
    })
}
