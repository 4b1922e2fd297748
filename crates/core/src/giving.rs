//! Transformation functions for Giving API responses
//!
//! Donation amounts arrive as integer cents plus a currency code; the
//! transforms here render them for display without ever passing through
//! floating point.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Donation attributes from the Giving API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DonationAttributes {
    #[serde(default)]
    pub amount_cents: Option<i64>,
    #[serde(default)]
    pub amount_currency: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub refunded: Option<bool>,
}

/// Output structure for a single donation
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DonationOutput {
    pub id: String,
    pub amount: String,
    pub payment_method: String,
    pub received_on: Option<String>,
    pub refunded: bool,
}

/// Format an integer cent amount for display
///
/// USD renders with a `$` prefix; other currencies keep their code as a
/// suffix. Negative amounts (refund adjustments) carry a leading minus.
pub fn format_amount(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let whole = magnitude / 100;
    let fraction = magnitude % 100;

    if currency.eq_ignore_ascii_case("USD") {
        format!("{}${}.{:02}", sign, whole, fraction)
    } else {
        format!("{}{}.{:02} {}", sign, whole, fraction, currency.to_uppercase())
    }
}

/// Reduce an RFC 3339 timestamp to its calendar date
pub fn format_received_date(received_at: Option<&str>) -> Option<String> {
    received_at.and_then(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
    })
}

/// Transform a Giving API resource into the donation domain model
pub fn transform_donation(resource: Resource<DonationAttributes>) -> DonationOutput {
    let attrs = resource.attributes;
    let currency = attrs.amount_currency.unwrap_or_else(|| "USD".to_string());

    DonationOutput {
        id: resource.id,
        amount: format_amount(attrs.amount_cents.unwrap_or(0), &currency),
        payment_method: attrs.payment_method.unwrap_or_else(|| "unknown".to_string()),
        received_on: format_received_date(attrs.received_at.as_deref()),
        refunded: attrs.refunded.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_usd() {
        assert_eq!(format_amount(12345, "USD"), "$123.45");
        assert_eq!(format_amount(5, "USD"), "$0.05");
        assert_eq!(format_amount(0, "USD"), "$0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-250, "USD"), "-$2.50");
    }

    #[test]
    fn test_format_amount_other_currency() {
        assert_eq!(format_amount(10000, "EUR"), "100.00 EUR");
        assert_eq!(format_amount(999, "gbp"), "9.99 GBP");
    }

    #[test]
    fn test_format_received_date() {
        assert_eq!(
            format_received_date(Some("2024-04-07T15:30:00Z")),
            Some("2024-04-07".to_string())
        );
        assert_eq!(
            format_received_date(Some("2024-04-07T15:30:00-05:00")),
            Some("2024-04-07".to_string())
        );
        assert_eq!(format_received_date(Some("not a date")), None);
        assert_eq!(format_received_date(None), None);
    }

    #[test]
    fn test_transform_donation() {
        let resource = Resource {
            kind: "Donation".to_string(),
            id: "555".to_string(),
            attributes: DonationAttributes {
                amount_cents: Some(2500),
                amount_currency: Some("USD".to_string()),
                payment_method: Some("card".to_string()),
                received_at: Some("2024-04-07T15:30:00Z".to_string()),
                refunded: Some(false),
            },
        };

        let output = transform_donation(resource);

        assert_eq!(output.amount, "$25.00");
        assert_eq!(output.payment_method, "card");
        assert_eq!(output.received_on.as_deref(), Some("2024-04-07"));
        assert!(!output.refunded);
    }

    #[test]
    fn test_transform_donation_defaults() {
        let resource = Resource {
            kind: "Donation".to_string(),
            id: "556".to_string(),
            attributes: DonationAttributes {
                amount_cents: None,
                amount_currency: None,
                payment_method: None,
                received_at: None,
                refunded: None,
            },
        };

        let output = transform_donation(resource);

        assert_eq!(output.amount, "$0.00");
        assert_eq!(output.payment_method, "unknown");
        assert!(output.received_on.is_none());
    }
}
