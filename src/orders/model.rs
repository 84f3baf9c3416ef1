//! Order page wire types.
//!
//! Decoding is lenient: unknown keys are ignored and optional keys fall back
//! to empty values, so upstream additions never break a page. Only the
//! envelope (`result`, `pagination`) and the order identity (`id`,
//! `orderNumber`) are required.

use serde::{Deserialize, Deserializer, Serialize};

/// Monetary amount. The value stays a decimal string end to end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    /// ISO 4217 currency code.
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// Decimal amount as string (preserves precision).
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Billing or shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address1: String,
    pub address2: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Country code (ISO 3166-1 alpha-2).
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
}

/// A selected product option on a line item (e.g. size or colour).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantOption {
    #[serde(deserialize_with = "null_as_default")]
    pub option_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub variant_id: Option<String>,
    pub sku: Option<String>,
    pub product_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_price_paid: Money,
    #[serde(deserialize_with = "null_as_default")]
    pub variant_options: Vec<VariantOption>,
    pub image_url: Option<String>,
    /// Free-form category tag (e.g. `PHYSICAL_PRODUCT`).
    #[serde(deserialize_with = "null_as_default")]
    pub line_item_type: String,
}

/// A single order as returned by the commerce API.
///
/// Fields that the redacting policy drops are optional and omitted from the
/// output when absent, so a redacted order serializes without them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, rename = "testmode", skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_email: String,
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub shipping_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub line_items: Vec<LineItem>,

    #[serde(default, rename = "subtotal", alias = "subTotal")]
    pub subtotal: Option<Money>,
    #[serde(default)]
    pub grand_total: Option<Money>,
    #[serde(default)]
    pub refunded_total: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    pub next_page_url: Option<String>,
    /// Opaque cursor for the next page; `None` on the last page.
    pub next_page_cursor: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_next: bool,
}

/// One page of orders plus its pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Required key; `null` decodes as an empty page.
    #[serde(deserialize_with = "null_as_default")]
    pub result: Vec<Order>,
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

impl ResultPage {
    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// Treat an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
