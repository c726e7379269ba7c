//! Wire types for the Stripe line-items endpoint.
//!
//! Only the fields the reconciler reads are modeled. Everything else in the
//! Stripe response is ignored during deserialization.

use serde::Deserialize;

/// Response body of `GET /v1/checkout/sessions/{id}/line_items`.
#[derive(Debug, Deserialize)]
pub struct LineItemList {
    pub data: Vec<StripeLineItem>,

    #[serde(default)]
    pub has_more: bool,
}

/// A single purchased line item.
#[derive(Debug, Deserialize)]
pub struct StripeLineItem {
    pub id: String,

    #[serde(default)]
    pub price: Option<StripePrice>,

    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Price reference attached to a line item.
#[derive(Debug, Deserialize)]
pub struct StripePrice {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_item_list() {
        let payload = r#"{
            "object": "list",
            "data": [
                {
                    "id": "li_1Qd123",
                    "object": "item",
                    "price": {
                        "id": "price_1QdFN7IvZBeqKnwP0Hs7sIoI",
                        "object": "price",
                        "currency": "usd"
                    },
                    "quantity": 1
                }
            ],
            "has_more": false,
            "url": "/v1/checkout/sessions/cs_test/line_items"
        }"#;

        let list: LineItemList = serde_json::from_str(payload).unwrap();

        assert_eq!(list.data.len(), 1);
        assert!(!list.has_more);
        let item = &list.data[0];
        assert_eq!(item.id, "li_1Qd123");
        assert_eq!(
            item.price.as_ref().map(|p| p.id.as_str()),
            Some("price_1QdFN7IvZBeqKnwP0Hs7sIoI")
        );
        assert_eq!(item.quantity, Some(1));
    }

    #[test]
    fn parse_empty_list() {
        let payload = r#"{"object": "list", "data": [], "has_more": false}"#;

        let list: LineItemList = serde_json::from_str(payload).unwrap();

        assert!(list.data.is_empty());
    }

    #[test]
    fn parse_item_without_price() {
        let payload = r#"{"data": [{"id": "li_1", "quantity": 2}]}"#;

        let list: LineItemList = serde_json::from_str(payload).unwrap();

        assert!(list.data[0].price.is_none());
        assert_eq!(list.data[0].quantity, Some(2));
    }
}
