//! Product domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored product record.
///
/// `id` is assigned by the store and is always populated on records read
/// back from it. `Default` yields the all-zero record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "cafe")]
    pub name: String,
    /// Category label
    #[serde(rename = "type")]
    #[schema(example = "negro")]
    pub product_type: String,
    #[schema(example = 1)]
    pub count: i32,
    #[schema(example = 14.2)]
    pub price: f64,
    /// Advisory warehouse reference, not enforced here
    #[serde(rename = "warehouseId")]
    #[schema(example = 1)]
    pub warehouse_id: i32,
}

impl Product {
    /// Apply `patch` on top of this record.
    ///
    /// Fields present in the patch replace the stored value, absent fields
    /// keep it. An explicit zero is a real value, not "unchanged".
    pub fn merged(&self, patch: &ProductPatch) -> Product {
        Product {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            product_type: patch
                .product_type
                .clone()
                .unwrap_or_else(|| self.product_type.clone()),
            count: patch.count.unwrap_or(self.count),
            price: patch.price.unwrap_or(self.price),
            warehouse_id: patch.warehouse_id.unwrap_or(self.warehouse_id),
        }
    }

    /// Whether applying `patch` leaves this record unchanged.
    pub fn is_unchanged_by(&self, patch: &ProductPatch) -> bool {
        self.merged(patch) == *self
    }

    /// The zero record returned by name lookups that match nothing.
    pub fn is_blank(&self) -> bool {
        self.id == 0
    }
}

/// Fields for a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub product_type: String,
    pub count: i32,
    pub price: f64,
    pub warehouse_id: i32,
}

impl NewProduct {
    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            product_type: self.product_type,
            count: self.count,
            price: self.price,
            warehouse_id: self.warehouse_id,
        }
    }
}

/// Partial update: `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub product_type: Option<String>,
    pub count: Option<i32>,
    pub price: Option<f64>,
    pub warehouse_id: Option<i32>,
}

impl ProductPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.product_type.is_none()
            && self.count.is_none()
            && self.price.is_none()
            && self.warehouse_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Product {
        Product {
            id: 7,
            name: "cafe".to_string(),
            product_type: "negro".to_string(),
            count: 3,
            price: 14.2,
            warehouse_id: 1,
        }
    }

    #[test]
    fn name_only_patch_keeps_other_fields() {
        let patch = ProductPatch {
            name: Some("te".to_string()),
            ..Default::default()
        };

        let merged = stored().merged(&patch);

        assert_eq!(merged.name, "te");
        assert_eq!(merged.product_type, "negro");
        assert_eq!(merged.count, 3);
        assert_eq!(merged.price, 14.2);
        assert_eq!(merged.warehouse_id, 1);
    }

    #[test]
    fn explicit_zero_is_applied() {
        let patch = ProductPatch {
            count: Some(0),
            price: Some(0.0),
            ..Default::default()
        };

        let merged = stored().merged(&patch);

        assert_eq!(merged.count, 0);
        assert_eq!(merged.price, 0.0);
        assert_eq!(merged.name, "cafe");
    }

    #[test]
    fn id_is_never_patched() {
        let full = ProductPatch {
            name: Some("a".into()),
            product_type: Some("b".into()),
            count: Some(1),
            price: Some(2.0),
            warehouse_id: Some(9),
        };
        assert_eq!(stored().merged(&full).id, 7);
    }

    #[test]
    fn merge_is_idempotent() {
        let patch = ProductPatch {
            product_type: Some("molido".into()),
            warehouse_id: Some(4),
            ..Default::default()
        };

        let once = stored().merged(&patch);
        let twice = once.merged(&patch);

        assert_eq!(once, twice);
        assert!(once.is_unchanged_by(&patch));
    }

    #[test]
    fn empty_patch_and_same_values_are_no_ops() {
        let product = stored();
        assert!(ProductPatch::default().is_empty());
        assert!(product.is_unchanged_by(&ProductPatch::default()));

        let same = ProductPatch {
            name: Some("cafe".into()),
            count: Some(3),
            ..Default::default()
        };
        assert!(!same.is_empty());
        assert!(product.is_unchanged_by(&same));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["type"], "negro");
        assert_eq!(json["warehouseId"], 1);
        assert!(json.get("product_type").is_none());
    }

    #[test]
    fn default_record_is_blank() {
        assert!(Product::default().is_blank());
        assert!(!stored().is_blank());
        assert_eq!(
            NewProduct {
                name: "x".into(),
                product_type: "y".into(),
                count: 1,
                price: 1.5,
                warehouse_id: 2,
            }
            .with_id(5)
            .id,
            5
        );
    }
}
