//! Invoice vocabulary needed by the status-transition rule.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// An invoice-like record that carries a payments collection.
///
/// [`ApiError::cannot_change_invoice_status`](crate::ApiError::cannot_change_invoice_status)
/// only needs to know how many payments are applied, so model types implement
/// this rather than handing the whole record over.
pub trait HasPayments {
    /// Number of payments applied to the record.
    fn payment_count(&self) -> usize;
}

impl<T> HasPayments for [T] {
    fn payment_count(&self) -> usize {
        self.len()
    }
}

impl<T> HasPayments for Vec<T> {
    fn payment_count(&self) -> usize {
        self.len()
    }
}

/// Invoice status values as the Xero API spells them.
///
/// ## Examples
///
/// ```rust
/// use std::str::FromStr;
/// use xero::InvoiceStatus;
///
/// let status = InvoiceStatus::from_str("VOIDED").unwrap();
/// assert!(status.requires_no_payments());
/// assert_eq!(InvoiceStatus::Authorised.to_string(), "AUTHORISED");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Not yet submitted for approval.
    Draft,
    /// Awaiting approval.
    Submitted,
    /// Approved and awaiting payment.
    Authorised,
    /// Fully paid.
    Paid,
    /// Removed while still a draft or submitted.
    Deleted,
    /// Cancelled after approval.
    Voided,
}

impl InvoiceStatus {
    /// Returns `true` if an invoice may only move to this status while it has
    /// no payments applied.
    pub fn requires_no_payments(self) -> bool {
        matches!(self, Self::Deleted | Self::Voided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            InvoiceStatus::from_str("DELETED"),
            Ok(InvoiceStatus::Deleted)
        );
        assert!(InvoiceStatus::from_str("deleted").is_err());
        assert!(InvoiceStatus::from_str("ARCHIVED").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for status in InvoiceStatus::iter() {
            assert_eq!(InvoiceStatus::from_str(status.as_ref()), Ok(status));
        }
    }

    #[test]
    fn test_only_deleted_and_voided_require_no_payments() {
        let restricted: Vec<_> = InvoiceStatus::iter()
            .filter(|s| s.requires_no_payments())
            .collect();
        assert_eq!(
            restricted,
            vec![InvoiceStatus::Deleted, InvoiceStatus::Voided]
        );
    }

    #[test]
    fn test_serde_uses_api_spelling() {
        let json = serde_json::to_string(&InvoiceStatus::Authorised).unwrap();
        assert_eq!(json, "\"AUTHORISED\"");
    }

    #[test]
    fn test_collections_count_payments() {
        let payments = vec!["p1", "p2"];
        assert_eq!(payments.payment_count(), 2);
        assert_eq!(payments[..0].payment_count(), 0);
    }
}
