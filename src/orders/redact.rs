//! PII redaction for order pages.

use serde::{Deserialize, Serialize};

use super::model::{Order, ResultPage};

/// How orders are transformed before they leave the proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedactionPolicy {
    /// Forward the decoded page as-is.
    PassThrough,
    /// Clear customer email and addresses; drop order metadata.
    #[default]
    RedactPii,
}

impl RedactionPolicy {
    /// Apply the policy to a whole page. Pagination is never touched.
    pub fn apply(self, page: ResultPage) -> ResultPage {
        match self {
            RedactionPolicy::PassThrough => page,
            RedactionPolicy::RedactPii => redact_page(page),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RedactionPolicy::PassThrough => "pass-through",
            RedactionPolicy::RedactPii => "redact-pii",
        }
    }
}

impl std::fmt::Display for RedactionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn redact_page(page: ResultPage) -> ResultPage {
    ResultPage {
        result: page.result.into_iter().map(redact_order).collect(),
        pagination: page.pagination,
    }
}

/// Build the redacted copy of an order.
///
/// Only identity, line items and totals survive. Email is emptied, both
/// addresses are nulled and the remaining metadata is dropped.
pub fn redact_order(order: Order) -> Order {
    let Order {
        id,
        order_number,
        line_items,
        subtotal,
        grand_total,
        refunded_total,
        ..
    } = order;

    Order {
        id,
        order_number,
        created_on: None,
        modified_on: None,
        channel: None,
        test_mode: None,
        customer_email: String::new(),
        billing_address: None,
        shipping_address: None,
        fulfillment_status: None,
        line_items,
        subtotal,
        grand_total,
        refunded_total,
    }
}
