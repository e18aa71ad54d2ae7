//! `cardapio-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the product identifier format, the product record and its
//! validation rules, and the domain error taxonomy.

pub mod error;
pub mod id;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use product::{Category, ProductRecord, validate_product};
