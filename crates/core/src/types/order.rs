//! Order domain model as exposed by the orders API.
//!
//! These types mirror the `/api/v1/orders` wire format (camelCase JSON).
//! Orders are created server-side; the shell only reads them and appends
//! via create. `status` stays a free-form string on the wire; see
//! [`super::status::OrderStatus`] for the display-only classification.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::{CustomerId, OrderId, ProductId};

/// An order as returned by the orders API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier.
    pub id: OrderId,
    /// Owning customer.
    pub customer_id: CustomerId,
    /// Free-form status string; no client-side state machine is enforced.
    pub status: String,
    /// Total amount in the account currency.
    pub total_amount: Decimal,
    /// Creation timestamp (ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
    /// Line items, in the order the server returned them.
    pub items: Vec<OrderItem>,
}

/// A line item owned by its parent [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
}

/// Validation errors for an [`OrderDraft`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("order items cannot be empty")]
    EmptyItems,
    #[error("item {0}: product id is required")]
    MissingProduct(usize),
    #[error("item {0}: quantity must be at least 1")]
    ZeroQuantity(usize),
}

/// Payload for creating an order.
///
/// Mirrors the order service's create request: the customer and status are
/// assigned server-side from the caller's identity, so the draft carries
/// items only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub items: Vec<OrderDraftItem>,
}

/// A line item in an [`OrderDraft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraftItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
}

impl OrderDraft {
    /// Create a draft from line items.
    #[must_use]
    pub const fn new(items: Vec<OrderDraftItem>) -> Self {
        Self { items }
    }

    /// Validate the draft against the order service's create rules.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` if the item list is empty, a product id is
    /// blank, or a quantity is zero.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.items.is_empty() {
            return Err(DraftError::EmptyItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.as_str().is_empty() {
                return Err(DraftError::MissingProduct(index));
            }
            if item.quantity == 0 {
                return Err(DraftError::ZeroQuantity(index));
            }
        }
        Ok(())
    }

    /// Draft total: the sum of `price * quantity` over all items, in
    /// decimal arithmetic.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn draft_item(product: &str, quantity: u32, price: Decimal) -> OrderDraftItem {
        OrderDraftItem {
            product_id: ProductId::new(product),
            quantity,
            price,
        }
    }

    #[test]
    fn test_order_deserializes_from_wire_format() {
        let json = r#"{
            "id": "1",
            "customerId": "c1",
            "status": "PAID",
            "totalAmount": 9.5,
            "createdAt": "2024-01-01T00:00:00Z",
            "items": [{"productId": "p1", "quantity": 2, "price": 4.75}]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId::new("1"));
        assert_eq!(order.customer_id, CustomerId::new("c1"));
        assert_eq!(order.status, "PAID");
        assert_eq!(order.total_amount, dec("9.5"));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].price, dec("4.75"));
    }

    #[test]
    fn test_draft_rejects_empty_items() {
        let draft = OrderDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::EmptyItems));
    }

    #[test]
    fn test_draft_rejects_zero_quantity() {
        let draft = OrderDraft::new(vec![draft_item("p1", 0, dec("4.75"))]);
        assert_eq!(draft.validate(), Err(DraftError::ZeroQuantity(0)));
    }

    #[test]
    fn test_draft_rejects_blank_product() {
        let draft = OrderDraft::new(vec![draft_item("", 1, dec("4.75"))]);
        assert_eq!(draft.validate(), Err(DraftError::MissingProduct(0)));
    }

    #[test]
    fn test_draft_total_is_decimal_sum() {
        let draft = OrderDraft::new(vec![
            draft_item("p1", 2, dec("4.75")),
            draft_item("p2", 3, dec("0.10")),
        ]);
        assert!(draft.validate().is_ok());
        assert_eq!(draft.total(), dec("9.80"));
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = OrderDraft::new(vec![draft_item("p1", 2, dec("4.75"))]);
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["items"][0].get("productId").is_some());
        assert!(value["items"][0].get("product_id").is_none());
    }
}
