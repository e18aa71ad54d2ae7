//! Published event envelope.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cardapio_core::{ProductId, ProductRecord};

use crate::event::ProductEventType;

/// Envelope for one product change, published as the queue message body.
///
/// Shape invariants, encoded by the constructors:
/// - creation envelopes carry no identifier (`productId` is `null`; the
///   downstream store mints one);
/// - deletion envelopes carry no product fields;
/// - update envelopes carry both.
///
/// `messageId` is fresh per envelope and `timestamp` is float seconds since
/// epoch, advancing with real time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEventEnvelope {
    message_id: Uuid,
    event_type: ProductEventType,
    timestamp: f64,
    product_id: Option<ProductId>,
    #[serde(flatten)]
    product: Option<ProductRecord>,
}

impl ProductEventEnvelope {
    fn new(
        event_type: ProductEventType,
        product_id: Option<ProductId>,
        product: Option<ProductRecord>,
    ) -> Self {
        Self {
            message_id: Uuid::now_v7(),
            event_type,
            timestamp: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
            product_id,
            product,
        }
    }

    /// Envelope for a product creation. No identifier yet.
    pub fn created(product: ProductRecord) -> Self {
        Self::new(ProductEventType::ProductCreated, None, Some(product))
    }

    /// Envelope for an update of an existing product.
    pub fn updated(product_id: ProductId, product: ProductRecord) -> Self {
        Self::new(
            ProductEventType::ProductUpdated,
            Some(product_id),
            Some(product),
        )
    }

    /// Envelope for a deletion. Only the identifier travels.
    pub fn deleted(product_id: ProductId) -> Self {
        Self::new(ProductEventType::ProductDeleted, Some(product_id), None)
    }

    pub fn message_id(&self) -> Uuid {
        self.message_id
    }

    pub fn event_type(&self) -> ProductEventType {
        self.event_type
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn product(&self) -> Option<&ProductRecord> {
        self.product.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardapio_core::Category;

    fn sample_record() -> ProductRecord {
        ProductRecord {
            name: "Burger X".to_string(),
            category: Category::Lanche,
            description: "Tasty burger meal".to_string(),
            price: 19.9,
            cooking_time: 10.0,
        }
    }

    fn sample_id() -> ProductId {
        ProductId::parse("507f1f77bcf86cd799439011").unwrap()
    }

    #[test]
    fn created_carries_fields_but_no_id() {
        let envelope = ProductEventEnvelope::created(sample_record());
        assert_eq!(envelope.event_type(), ProductEventType::ProductCreated);
        assert!(envelope.product_id().is_none());
        assert_eq!(envelope.product(), Some(&sample_record()));
    }

    #[test]
    fn updated_carries_id_and_fields() {
        let envelope = ProductEventEnvelope::updated(sample_id(), sample_record());
        assert_eq!(envelope.event_type(), ProductEventType::ProductUpdated);
        assert_eq!(envelope.product_id(), Some(&sample_id()));
        assert_eq!(envelope.product(), Some(&sample_record()));
    }

    #[test]
    fn deleted_carries_id_only() {
        let envelope = ProductEventEnvelope::deleted(sample_id());
        assert_eq!(envelope.event_type(), ProductEventType::ProductDeleted);
        assert_eq!(envelope.product_id(), Some(&sample_id()));
        assert!(envelope.product().is_none());
    }

    #[test]
    fn message_ids_are_unique_for_identical_inputs() {
        let a = ProductEventEnvelope::created(sample_record());
        let b = ProductEventEnvelope::created(sample_record());
        assert_ne!(a.message_id(), b.message_id());
    }

    #[test]
    fn timestamps_advance_with_real_time() {
        let a = ProductEventEnvelope::created(sample_record());
        let b = ProductEventEnvelope::created(sample_record());
        assert!(b.timestamp() >= a.timestamp());
        assert!(a.timestamp() > 0.0);
    }

    #[test]
    fn created_json_has_explicit_null_id_and_flattened_fields() {
        let value =
            serde_json::to_value(ProductEventEnvelope::created(sample_record())).unwrap();
        assert_eq!(value["eventType"], "PRODUCT_CREATED");
        assert!(value["productId"].is_null());
        assert_eq!(value["name"], "Burger X");
        assert_eq!(value["category"], "Lanche");
        assert_eq!(value["description"], "Tasty burger meal");
        assert_eq!(value["price"], 19.9);
        assert_eq!(value["cookingTime"], 10.0);
        assert!(value["messageId"].is_string());
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn deleted_json_omits_product_fields() {
        let value = serde_json::to_value(ProductEventEnvelope::deleted(sample_id())).unwrap();
        assert_eq!(value["eventType"], "PRODUCT_DELETED");
        assert_eq!(value["productId"], "507f1f77bcf86cd799439011");
        let object = value.as_object().unwrap();
        for field in ["name", "category", "description", "price", "cookingTime"] {
            assert!(!object.contains_key(field), "{field} leaked into deletion");
        }
    }

    #[test]
    fn envelope_json_round_trips() {
        let envelope = ProductEventEnvelope::updated(sample_id(), sample_record());
        let text = serde_json::to_string(&envelope).unwrap();
        let back: ProductEventEnvelope = serde_json::from_str(&text).unwrap();
        assert_eq!(back, envelope);
    }
}
